use std::io::Write;

use approx::assert_relative_eq;
use dronebody::{Body, BodyError, RawBodyConfig, SpinDirection};
use tempfile::NamedTempFile;

const DERIVED_QUAD: &str = r#"
propellers:
  - location: [0.078, 0.078, 0.0]
    spin: ccw
    size_class: 5
  - location: [-0.078, 0.078, 0.0]
    spin: cw
    size_class: 5
  - location: [-0.078, -0.078, 0.0]
    spin: ccw
    size_class: 5
  - location: [0.078, -0.078, 0.0]
    spin: cw
    size_class: 5
"#;

const OVERRIDDEN_BODY: &str = r#"
propellers:
  - location: [0.1, 0.0, 0.0]
    spin: ccw
    size_class: 5
  - location: [-0.1, 0.0, 0.0]
    spin: cw
    size_class: 5
mountpoints:
  - [0.0, 0.0, 0.0]
  - [0.0, 0.0, 0.0]
mass_properties:
  mass: 1.2
  center_of_gravity: [0.0, 0.0, -0.01]
  ixx: 0.011
  iyy: 0.012
  izz: 0.021
  ixy: 0.0
  ixz: 0.0
  iyz: 0.0
"#;

#[test]
fn derived_config_runs_the_engine() {
    let raw: RawBodyConfig = serde_yaml::from_str(DERIVED_QUAD).unwrap();
    let body = raw.into_body().unwrap();

    assert_eq!(body.propellers().len(), 4);
    assert_eq!(body.propellers()[0].spin, SpinDirection::CounterClockwise);
    assert!(body.mass() > 0.3);
    assert_relative_eq!(body.center_of_gravity().norm(), 0.0, epsilon = 1e-12);
}

#[test]
fn overridden_config_bypasses_the_engine() {
    let raw: RawBodyConfig = serde_yaml::from_str(OVERRIDDEN_BODY).unwrap();
    let body = raw.into_body().unwrap();

    assert_eq!(body.mass(), 1.2);
    assert_eq!(body.center_of_gravity().z, -0.01);
    assert_eq!(body.inertia().izz, 0.021);
}

#[test]
fn bodies_load_from_yaml_files() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DERIVED_QUAD.as_bytes()).unwrap();

    let body = Body::from_file(file.path()).unwrap();
    assert_eq!(body.propellers().len(), 4);
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let result = Body::from_file("does/not/exist.yaml");
    assert!(matches!(result, Err(BodyError::FileError(_))));
}

#[test]
fn partial_override_block_is_rejected_at_parse_time() {
    // An override missing tensor components must fail to deserialize rather
    // than silently fall back to the engine.
    let partial = r#"
propellers:
  - location: [0.1, 0.0, 0.0]
    spin: ccw
    size_class: 5
mass_properties:
  mass: 1.0
  center_of_gravity: [0.0, 0.0, 0.0]
  ixx: 0.01
"#;
    let result: Result<RawBodyConfig, _> = serde_yaml::from_str(partial);
    assert!(result.is_err());
}
