//! Field-relative translation

use crate::direction::{Direction, clockwise_angle};

/// Source of the current field heading, in radians, clockwise-positive.
///
/// Updated independently of the control core; read at most once per tick.
pub trait FieldHeadingSource {
    /// Current heading in radians.
    fn heading_radians(&self) -> f64;
}

/// A heading that never changes. Useful for replay and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedHeading(pub f64);

impl FixedHeading {
    /// Build from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }
}

impl FieldHeadingSource for FixedHeading {
    fn heading_radians(&self) -> f64 {
        self.0
    }
}

/// Rotate a control-relative direction by `-heading` into the field frame.
///
/// Magnitude is unchanged. A chassis turned clockwise by `h` sees a
/// field-forward request at `-h` in its own frame.
///
/// # Examples
///
/// ```
/// use std::f64::consts::{FRAC_PI_2, PI};
/// use swerve_drive::{Direction, field_relative};
///
/// let forward = Direction { angle: 0.0, magnitude: 1.0 };
/// let turned = field_relative(forward, FRAC_PI_2);
/// assert!((turned.angle - 3.0 * FRAC_PI_2).abs() < 1e-9);
/// assert!((field_relative(forward, PI).angle - PI).abs() < 1e-9);
/// ```
pub fn field_relative(direction: Direction, heading: f64) -> Direction {
    if direction.magnitude <= 0.0 {
        return direction;
    }

    // unit vector in the clockwise-from-vertical frame
    let (x, y) = direction.angle.sin_cos();
    let (sin_h, cos_h) = heading.sin_cos();
    let rotated_x = x * cos_h - y * sin_h;
    let rotated_y = x * sin_h + y * cos_h;

    Direction {
        angle: clockwise_angle(rotated_x, rotated_y),
        magnitude: direction.magnitude,
    }
}
