use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, PropConstants};
use crate::utils::BodyError;

/// Spin sense of a propeller, viewed from above the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinDirection {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
}

/// A single propeller placement, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Propeller {
    /// Hub position in the body frame (m)
    pub location: Vector3<f64>,
    /// Thrust line direction in the body frame
    pub thrust_direction: Vector3<f64>,
    /// Spin sense, used downstream for reaction-torque balancing
    pub spin: SpinDirection,
    /// Propeller size class (inch diameter code)
    pub size_class: u8,
}

impl Propeller {
    /// A propeller thrusting straight down (-z), the standard-layout default.
    pub fn new(location: Vector3<f64>, spin: SpinDirection, size_class: u8) -> Self {
        Self {
            location,
            thrust_direction: Vector3::new(0.0, 0.0, -1.0),
            spin,
            size_class,
        }
    }
}

/// A propeller enriched with its catalog data. Read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropellerSpec {
    /// Hub position in the body frame (m)
    pub location: Vector3<f64>,
    /// Thrust line direction in the body frame
    pub thrust_direction: Vector3<f64>,
    /// Spin sense
    pub spin: SpinDirection,
    /// Propeller size class
    pub size_class: u8,
    /// Aerodynamic constants from the catalog
    pub constants: PropConstants,
    /// Maximum angular rate from the catalog (rad/s)
    pub max_angular_rate: f64,
}

/// Enriches a propeller with its catalog entry, returning a new, fully
/// populated record. The input is left untouched.
///
/// # Errors
/// Propagates [`BodyError::UnknownSizeClass`] from the catalog unchanged.
pub fn enrich(prop: &Propeller) -> Result<PropellerSpec, BodyError> {
    let entry = catalog::lookup(prop.size_class)?;
    Ok(PropellerSpec {
        location: prop.location,
        thrust_direction: prop.thrust_direction,
        spin: prop.spin,
        size_class: prop.size_class,
        constants: entry.constants,
        max_angular_rate: entry.max_angular_rate,
    })
}
