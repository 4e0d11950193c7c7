use std::fs;
use std::path::Path;

use nalgebra::Vector3;
use serde::Deserialize;

use crate::body::{Body, MassProperties};
use crate::inertia::{InertiaTensor, MassModel};
use crate::propeller::{Propeller, SpinDirection};
use crate::utils::BodyError;

/// Raw shape of a YAML body configuration file.
#[derive(Debug, Deserialize)]
pub struct RawBodyConfig {
    pub propellers: Vec<RawPropeller>,
    /// Per-arm beam attachment points; defaults to the body center.
    pub mountpoints: Option<Vec<[f64; 3]>>,
    /// Explicit mass properties. When present the estimation engine is
    /// bypassed entirely; all fields are required so the override stays
    /// all-or-nothing at parse time.
    pub mass_properties: Option<RawMassProperties>,
}

#[derive(Debug, Deserialize)]
pub struct RawPropeller {
    pub location: [f64; 3],
    pub spin: SpinDirection,
    /// Defaults to straight down
    pub thrust_direction: Option<[f64; 3]>,
    pub size_class: u8,
}

#[derive(Debug, Deserialize)]
pub struct RawMassProperties {
    pub mass: f64,
    pub center_of_gravity: [f64; 3],
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixy: f64,
    pub ixz: f64,
    pub iyz: f64,
}

impl Body {
    /// Loads a body from a YAML configuration file.
    ///
    /// # Errors
    /// * [`BodyError::FileError`] if the file cannot be read.
    /// * [`BodyError::YamlError`] if the contents fail to deserialize.
    /// * Any construction error from [`Body::new`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BodyError> {
        let contents = fs::read_to_string(path)?;
        let raw: RawBodyConfig = serde_yaml::from_str(&contents)?;
        raw.into_body()
    }
}

impl RawBodyConfig {
    /// Converts the raw file shape into a validated [`Body`].
    pub fn into_body(self) -> Result<Body, BodyError> {
        let props = self
            .propellers
            .into_iter()
            .map(|raw| Propeller {
                location: Vector3::from(raw.location),
                thrust_direction: Vector3::from(
                    raw.thrust_direction.unwrap_or([0.0, 0.0, -1.0]),
                ),
                spin: raw.spin,
                size_class: raw.size_class,
            })
            .collect();

        let mountpoints = self
            .mountpoints
            .map(|mounts| mounts.into_iter().map(Vector3::from).collect());

        let mass_properties = match self.mass_properties {
            Some(raw) => MassProperties::Provided(MassModel {
                mass: raw.mass,
                center_of_gravity: Vector3::from(raw.center_of_gravity),
                inertia: InertiaTensor {
                    ixx: raw.ixx,
                    iyy: raw.iyy,
                    izz: raw.izz,
                    ixy: raw.ixy,
                    ixz: raw.ixz,
                    iyz: raw.iyz,
                },
            }),
            None => MassProperties::Derived,
        };

        Body::new(props, mountpoints, mass_properties)
    }
}
