//! Direction extraction
//!
//! Turns a stick position into a clockwise heading and a speed. Angles are
//! radians measured clockwise from the vertical axis `(0, 1)`, in `[0, 2π)`.

use core::f64::consts::TAU;

use serde::Serialize;

/// Reference axis that defines angle zero.
const VERTICAL: (f64, f64) = (0.0, 1.0);

/// A clockwise angle with an unsigned speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Direction {
    /// Radians clockwise from vertical, in `[0, 2π)`.
    pub angle: f64,
    /// Unsigned speed, see [`taxicab_magnitude`].
    pub magnitude: f64,
}

impl Direction {
    /// Extract the direction of the vector `(x, y)`.
    ///
    /// The zero vector yields angle `0` and magnitude `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use swerve_drive::Direction;
    ///
    /// let right = Direction::from_xy(1.0, 0.0);
    /// assert!((right.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// assert!((right.magnitude - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self {
            angle: clockwise_angle(x, y),
            magnitude: taxicab_magnitude(x, y),
        }
    }
}

/// Speed of a stick position as `|x| + |y|`.
///
/// Not the Euclidean norm: a full diagonal deflection reads as `2.0`.
#[inline]
pub fn taxicab_magnitude(x: f64, y: f64) -> f64 {
    x.abs() + y.abs()
}

/// Clockwise angle of `(x, y)` from the vertical axis, in `[0, 2π)`.
///
/// The dot product with `(0, 1)` gives the unsigned angle in `[0, π]`; the
/// sign of `x` picks the half-plane. Returns `0` for the zero vector.
#[inline]
pub fn clockwise_angle(x: f64, y: f64) -> f64 {
    let length = x.hypot(y);
    if !length.is_finite() || length <= 0.0 {
        return 0.0;
    }

    let dot = x * VERTICAL.0 + y * VERTICAL.1;
    // |VERTICAL| == 1
    let unsigned = (dot / length).clamp(-1.0, 1.0).acos();

    let angle = if x < 0.0 { TAU - unsigned } else { unsigned };
    if angle >= TAU { 0.0 } else { angle }
}
