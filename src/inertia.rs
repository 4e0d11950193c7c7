use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::propeller::PropellerSpec;
use crate::utils::{
    BodyError, BEAM_LINEAR_DENSITY, CONTROLLER_HEIGHT, CONTROLLER_LENGTH, CONTROLLER_MASS,
    CONTROLLER_WIDTH,
};

/// The six independent components of a symmetric inertia tensor (kg·m²).
///
/// Off-diagonal fields are the tensor entries themselves, i.e. the negated
/// products of inertia.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InertiaTensor {
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixy: f64,
    pub ixz: f64,
    pub iyz: f64,
}

impl InertiaTensor {
    /// Assembles the symmetric 3x3 matrix.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[
            Vector3::new(self.ixx, self.ixy, self.ixz),
            Vector3::new(self.ixy, self.iyy, self.iyz),
            Vector3::new(self.ixz, self.iyz, self.izz),
        ])
    }
}

/// Mass properties of an assembled body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass (kg)
    pub mass: f64,
    /// Center of gravity in the body frame (m)
    pub center_of_gravity: Vector3<f64>,
    /// Inertia tensor about the center of gravity (kg·m²)
    pub inertia: InertiaTensor,
}

/// Estimates mass, center of gravity and inertia tensor for a set of
/// propeller placements.
///
/// Structural model: the controller stack as a box at the body origin, a
/// uniform carbon-fiber beam from each mount point to its propeller hub, and
/// the catalog motor mass as a point mass at each hub. All inertia terms are
/// taken about the center of gravity via the parallel-axis theorem.
///
/// `mountpoints` pairs positionally with `props` and must have equal length;
/// callers validate this before invoking the engine.
///
/// # Errors
/// Propagates [`BodyError::UnknownSizeClass`] if a propeller's size class
/// has no catalog entry.
pub fn estimate(
    props: &[PropellerSpec],
    mountpoints: &[Vector3<f64>],
) -> Result<MassModel, BodyError> {
    // Each propeller's own catalog mass, looked up fresh so mixed-size
    // layouts accumulate correctly.
    let prop_masses = props
        .iter()
        .map(|p| catalog::lookup(p.size_class).map(|entry| entry.mass))
        .collect::<Result<Vec<_>, _>>()?;

    let beam_masses: Vec<f64> = props
        .iter()
        .zip(mountpoints)
        .map(|(p, mount)| BEAM_LINEAR_DENSITY * (p.location - mount).norm())
        .collect();

    let mass = CONTROLLER_MASS + prop_masses.iter().sum::<f64>() + beam_masses.iter().sum::<f64>();

    // The controller sits at the origin and adds no offset of its own.
    let mut cg = Vector3::zeros();
    for (i, (prop, mount)) in props.iter().zip(mountpoints).enumerate() {
        let midpoint = (prop.location + mount) / 2.0;
        cg += prop_masses[i] / mass * prop.location;
        cg += beam_masses[i] / mass * midpoint;
    }

    let axes = [Vector3::x(), Vector3::y(), Vector3::z()];

    // Controller box inertia about its own center per axis, shifted from the
    // origin to the cg.
    let box_terms = [
        CONTROLLER_WIDTH.powi(2) + CONTROLLER_HEIGHT.powi(2),
        CONTROLLER_LENGTH.powi(2) + CONTROLLER_HEIGHT.powi(2),
        CONTROLLER_LENGTH.powi(2) + CONTROLLER_WIDTH.powi(2),
    ];
    let mut diagonal = [0.0; 3];
    for (k, axis) in axes.iter().enumerate() {
        diagonal[k] = axis.cross(&cg).norm_squared() * CONTROLLER_MASS
            + CONTROLLER_MASS / 12.0 * box_terms[k];
    }

    // The controller box is aligned with the principal axes, so it
    // contributes nothing off-diagonal.
    let mut products = [0.0; 3]; // ixy, ixz, iyz
    const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

    for (i, (prop, mount)) in props.iter().zip(mountpoints).enumerate() {
        let beam = prop.location - mount;
        let midpoint = (prop.location + mount) / 2.0;
        let r = prop.location - cg;
        let d = midpoint - cg;

        for (k, axis) in axes.iter().enumerate() {
            // Motor point mass about the cg
            diagonal[k] += axis.cross(&r).norm_squared() * prop_masses[i];
            // Thin rod about its own centroid
            diagonal[k] += beam_masses[i] / 12.0 * axis.cross(&beam).norm_squared();
            // Parallel-axis shift of the rod to the cg
            diagonal[k] += beam_masses[i] * axis.cross(&d).norm_squared();
        }

        for (k, (a, b)) in PAIRS.iter().enumerate() {
            products[k] -= r[*a] * r[*b] * prop_masses[i];
            products[k] -= beam_masses[i] / 12.0 * beam[*a] * beam[*b];
            products[k] -= beam_masses[i] * d[*a] * d[*b];
        }
    }

    Ok(MassModel {
        mass,
        center_of_gravity: cg,
        inertia: InertiaTensor {
            ixx: diagonal[0],
            iyy: diagonal[1],
            izz: diagonal[2],
            ixy: products[0],
            ixz: products[1],
            iyz: products[2],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propeller::{enrich, Propeller, SpinDirection};
    use approx::assert_relative_eq;

    fn enriched(location: Vector3<f64>, size_class: u8) -> PropellerSpec {
        enrich(&Propeller::new(
            location,
            SpinDirection::CounterClockwise,
            size_class,
        ))
        .unwrap()
    }

    #[test]
    fn bare_controller_has_box_inertia_about_origin() {
        let model = estimate(&[], &[]).unwrap();

        assert_relative_eq!(model.mass, CONTROLLER_MASS, epsilon = 1e-12);
        assert_relative_eq!(model.center_of_gravity.norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            model.inertia.ixx,
            CONTROLLER_MASS / 12.0 * (0.036f64.powi(2) + 0.035f64.powi(2)),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            model.inertia.izz,
            CONTROLLER_MASS / 12.0 * (0.105f64.powi(2) + 0.036f64.powi(2)),
            epsilon = 1e-12
        );
        assert_relative_eq!(model.inertia.ixy, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn single_arm_matches_hand_calculation() {
        let props = [enriched(Vector3::new(0.2, 0.0, 0.0), 5)];
        let mounts = [Vector3::zeros()];
        let model = estimate(&props, &mounts).unwrap();

        let m_p = 0.072;
        let m_b = BEAM_LINEAR_DENSITY * 0.2;
        let mass = CONTROLLER_MASS + m_p + m_b;
        assert_relative_eq!(model.mass, mass, epsilon = 1e-12);

        let cg_x = (m_p * 0.2 + m_b * 0.1) / mass;
        assert_relative_eq!(model.center_of_gravity.x, cg_x, epsilon = 1e-12);
        assert_relative_eq!(model.center_of_gravity.y, 0.0, epsilon = 1e-12);

        // About z: controller shift + box, motor point mass, rod + shift
        let izz = cg_x.powi(2) * CONTROLLER_MASS
            + CONTROLLER_MASS / 12.0 * (0.105f64.powi(2) + 0.036f64.powi(2))
            + (0.2 - cg_x).powi(2) * m_p
            + m_b / 12.0 * 0.2f64.powi(2)
            + m_b * (0.1 - cg_x).powi(2);
        assert_relative_eq!(model.inertia.izz, izz, epsilon = 1e-12);

        // The arm lies along x, so it adds no rod term about x
        let ixx = CONTROLLER_MASS / 12.0 * (0.036f64.powi(2) + 0.035f64.powi(2));
        assert_relative_eq!(model.inertia.ixx, ixx, epsilon = 1e-12);
    }

    #[test]
    fn off_origin_mount_shortens_the_beam() {
        let props = [enriched(Vector3::new(0.3, 0.0, 0.0), 5)];
        let mounts = [Vector3::new(0.1, 0.0, 0.0)];
        let model = estimate(&props, &mounts).unwrap();

        let m_b = BEAM_LINEAR_DENSITY * 0.2;
        let mass = CONTROLLER_MASS + 0.072 + m_b;
        assert_relative_eq!(model.mass, mass, epsilon = 1e-12);

        // Beam centroid is the segment midpoint, not half the hub position
        let cg_x = (0.072 * 0.3 + m_b * 0.2) / mass;
        assert_relative_eq!(model.center_of_gravity.x, cg_x, epsilon = 1e-12);
    }

    #[test]
    fn tensor_matrix_is_symmetric() {
        let props = [
            enriched(Vector3::new(0.15, 0.1, 0.02), 5),
            enriched(Vector3::new(-0.1, -0.2, 0.0), 4),
        ];
        let mounts = [Vector3::zeros(), Vector3::zeros()];
        let model = estimate(&props, &mounts).unwrap();
        let matrix = model.inertia.matrix();

        assert_eq!(matrix, matrix.transpose());
        assert_relative_eq!(matrix[(0, 1)], model.inertia.ixy, epsilon = 1e-15);
        assert_relative_eq!(matrix[(2, 0)], model.inertia.ixz, epsilon = 1e-15);
    }
}
