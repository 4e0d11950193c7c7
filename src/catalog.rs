use serde::{Deserialize, Serialize};

use crate::utils::BodyError;

/// Aerodynamic constants for a motor and propeller assembly.
///
/// Opaque to the mass-property engine; the hover optimizer uses them to map
/// angular rates to thrust, reaction torque and electrical power.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PropConstants {
    /// Thrust constant (N·s²/rad²)
    pub k_f: f64,
    /// Reaction torque constant (N·m·s²/rad²)
    pub k_m: f64,
    /// Power constant (W·s³/rad³)
    pub k_p: f64,
}

/// Catalog data for one propeller size class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Motor + propeller assembly mass (kg)
    pub mass: f64,
    /// Aerodynamic constants, passed through to the optimizer
    pub constants: PropConstants,
    /// Maximum angular rate (rad/s)
    pub max_angular_rate: f64,
}

impl CatalogEntry {
    const fn new(mass: f64, k_f: f64, k_m: f64, k_p: f64, max_angular_rate: f64) -> Self {
        Self {
            mass,
            constants: PropConstants { k_f, k_m, k_p },
            max_angular_rate,
        }
    }
}

/// Looks up the catalog entry for a propeller size class (inch diameter code).
///
/// The catalog is a process-wide constant table; there is no write path.
///
/// # Errors
/// Returns [`BodyError::UnknownSizeClass`] if the class has no entry.
pub fn lookup(size_class: u8) -> Result<CatalogEntry, BodyError> {
    match size_class {
        3 => Ok(CatalogEntry::new(0.040, 4.0e-7, 4.4e-9, 1.6e-4, 4400.0)),
        4 => Ok(CatalogEntry::new(0.055, 7.2e-7, 8.6e-9, 2.9e-4, 3700.0)),
        5 => Ok(CatalogEntry::new(0.072, 1.1e-6, 1.4e-8, 4.8e-4, 3000.0)),
        6 => Ok(CatalogEntry::new(0.095, 1.8e-6, 2.6e-8, 8.1e-4, 2400.0)),
        7 => Ok(CatalogEntry::new(0.120, 2.7e-6, 4.2e-8, 1.3e-3, 2000.0)),
        other => Err(BodyError::UnknownSizeClass(other)),
    }
}
