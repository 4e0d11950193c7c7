mod body;
mod catalog;
mod config;
mod geometry;
mod inertia;
mod propeller;
mod utils;

pub use body::{Body, MassProperties};
pub use catalog::{lookup, CatalogEntry, PropConstants};
pub use config::{RawBodyConfig, RawMassProperties, RawPropeller};
pub use geometry::SymmetricLayout;
pub use inertia::{estimate, InertiaTensor, MassModel};
pub use propeller::{enrich, Propeller, PropellerSpec, SpinDirection};
pub use utils::BodyError;
