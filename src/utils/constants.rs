// Central controller stack, based on a 4S 2200 mAh lipo plus flight controller
pub const CONTROLLER_MASS: f64 = 0.300; // kg
pub const CONTROLLER_LENGTH: f64 = 0.105; // m
pub const CONTROLLER_WIDTH: f64 = 0.036; // m
pub const CONTROLLER_HEIGHT: f64 = 0.035; // m

// Arms are carbon fiber plates, 5mm thickness, 10mm width
pub const BEAM_MATERIAL_DENSITY: f64 = 1500.0; // kg/m^3
pub const BEAM_THICKNESS: f64 = 0.005; // m
pub const BEAM_WIDTH: f64 = 0.010; // m
pub const BEAM_LINEAR_DENSITY: f64 = BEAM_MATERIAL_DENSITY * BEAM_THICKNESS * BEAM_WIDTH; // kg/m
