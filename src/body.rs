use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::geometry::SymmetricLayout;
use crate::inertia::{estimate, InertiaTensor, MassModel};
use crate::propeller::{enrich, Propeller, PropellerSpec};
use crate::utils::BodyError;

/// How a body's mass properties are obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MassProperties {
    /// Computed by the estimation engine from the structural model.
    Derived,
    /// Supplied by the caller verbatim. The engine is never invoked and no
    /// plausibility checks are made on the values.
    Provided(MassModel),
}

/// A complete airframe description: enriched propellers plus mass properties.
///
/// Immutable once constructed; changing the geometry means building a new
/// body. This is the sole interface handed to the hover optimizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    propellers: Vec<PropellerSpec>,
    mountpoints: Vec<Vector3<f64>>,
    mass_model: MassModel,
}

impl Body {
    /// Builds a body from propeller placements.
    ///
    /// Mount points pair with propellers positionally. When absent they
    /// default to the body center, meaning each beam runs from the origin
    /// to its hub; a fresh default vector is built per call.
    ///
    /// # Errors
    /// * [`BodyError::MountPointMismatch`] if the mount point count differs
    ///   from the propeller count.
    /// * [`BodyError::UnknownSizeClass`] if a propeller's size class has no
    ///   catalog entry.
    pub fn new(
        props: Vec<Propeller>,
        mountpoints: Option<Vec<Vector3<f64>>>,
        mass_properties: MassProperties,
    ) -> Result<Self, BodyError> {
        let mountpoints = mountpoints.unwrap_or_else(|| vec![Vector3::zeros(); props.len()]);
        if props.len() != mountpoints.len() {
            return Err(BodyError::MountPointMismatch {
                props: props.len(),
                mounts: mountpoints.len(),
            });
        }

        let propellers = props.iter().map(enrich).collect::<Result<Vec<_>, _>>()?;

        let mass_model = match mass_properties {
            MassProperties::Derived => estimate(&propellers, &mountpoints)?,
            MassProperties::Provided(model) => model,
        };

        Ok(Self {
            propellers,
            mountpoints,
            mass_model,
        })
    }

    /// Builds a standard symmetric body with derived mass properties.
    pub fn standard(layout: &SymmetricLayout) -> Result<Self, BodyError> {
        Self::new(layout.propellers(), None, MassProperties::Derived)
    }

    /// The enriched propellers, in caller order.
    pub fn propellers(&self) -> &[PropellerSpec] {
        &self.propellers
    }

    /// Beam attachment points, paired positionally with the propellers.
    pub fn mountpoints(&self) -> &[Vector3<f64>] {
        &self.mountpoints
    }

    /// Total mass (kg).
    pub fn mass(&self) -> f64 {
        self.mass_model.mass
    }

    /// Center of gravity in the body frame (m).
    pub fn center_of_gravity(&self) -> Vector3<f64> {
        self.mass_model.center_of_gravity
    }

    /// Inertia tensor components about the center of gravity (kg·m²).
    pub fn inertia(&self) -> &InertiaTensor {
        &self.mass_model.inertia
    }

    /// Inertia tensor as a symmetric 3x3 matrix.
    pub fn inertia_matrix(&self) -> Matrix3<f64> {
        self.mass_model.inertia.matrix()
    }
}
