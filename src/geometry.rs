use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::propeller::{Propeller, SpinDirection};

/// A symmetric airframe layout: N arms evenly spaced on a circle in the
/// horizontal plane.
///
/// Each standard body is a named configuration of this one generator rather
/// than a distinct type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetricLayout {
    /// Number of arms
    pub arms: usize,
    /// Hub distance from the body center (m)
    pub arm_length: f64,
    /// Angle of the first arm from the body x axis (rad)
    pub start_angle: f64,
    /// Size class per arm; length must equal `arms`
    pub size_classes: Vec<u8>,
}

impl SymmetricLayout {
    /// Standard tricopter without tilt rotor.
    pub fn tricopter(arm_length: f64) -> Self {
        Self {
            arms: 3,
            arm_length,
            start_angle: 0.0,
            size_classes: vec![5; 3],
        }
    }

    /// Standard x-configuration quadcopter.
    pub fn quadcopter(arm_length: f64) -> Self {
        Self {
            arms: 4,
            arm_length,
            start_angle: PI / 4.0,
            size_classes: vec![5; 4],
        }
    }

    /// Standard hexacopter; the reference arm carries a smaller propeller.
    pub fn hexacopter(arm_length: f64) -> Self {
        Self {
            arms: 6,
            arm_length,
            start_angle: 0.0,
            size_classes: mixed_sizes(6),
        }
    }

    /// Standard octacopter; the reference arm carries a smaller propeller.
    pub fn octacopter(arm_length: f64) -> Self {
        Self {
            arms: 8,
            arm_length,
            start_angle: 0.0,
            size_classes: mixed_sizes(8),
        }
    }

    /// Generates the propeller placements for this layout.
    ///
    /// Arm `i` sits at `start_angle + i·2π/N` on a circle of radius
    /// `arm_length`, thrusting straight down. Spin alternates
    /// counter-clockwise/clockwise around the circle so that reaction torque
    /// cancels in opposite-spin pairs.
    pub fn propellers(&self) -> Vec<Propeller> {
        (0..self.arms)
            .map(|i| {
                let theta = self.start_angle + i as f64 * 2.0 * PI / self.arms as f64;
                let location = Vector3::new(
                    self.arm_length * theta.cos(),
                    self.arm_length * theta.sin(),
                    0.0,
                );
                let spin = if i % 2 == 0 {
                    SpinDirection::CounterClockwise
                } else {
                    SpinDirection::Clockwise
                };
                Propeller::new(location, spin, self.size_classes[i])
            })
            .collect()
    }
}

fn mixed_sizes(arms: usize) -> Vec<u8> {
    let mut sizes = vec![5; arms];
    sizes[0] = 4;
    sizes
}
