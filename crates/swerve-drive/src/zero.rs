//! Per-module zero references

use crate::module::{ModuleId, PerModule};

/// Captured "straight ahead" azimuth reading for each module.
///
/// Seeded with the modules' power-on readings, so homing an uncalibrated
/// module returns it to where it was when the robot powered up. Only
/// [`capture`](Self::capture) replaces a value; nothing resets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroReferenceStore {
    zeros: PerModule<f64>,
}

impl ZeroReferenceStore {
    /// Seed the store with power-on readings.
    pub fn from_power_on(readings: PerModule<f64>) -> Self {
        Self { zeros: readings }
    }

    /// Record `raw` as the zero of `id`, overwriting the previous value.
    pub fn capture(&mut self, id: ModuleId, raw: f64) {
        *self.zeros.get_mut(id) = raw;
    }

    /// Zero reference of `id`.
    pub fn get(&self, id: ModuleId) -> f64 {
        *self.zeros.get(id)
    }

    /// All zero references.
    pub fn all(&self) -> &PerModule<f64> {
        &self.zeros
    }
}

/// Clockwise distance from `zero` to `position`, folded into `[0, period)`.
///
/// A module that has wrapped one and a half turns past its zero reads half a
/// period. `period` must be positive.
///
/// # Examples
///
/// ```
/// use swerve_drive::position_within_rotation;
///
/// assert_eq!(position_within_rotation(1000.0 + 1.5 * 4096.0, 1000.0, 4096.0), 2048.0);
/// assert_eq!(position_within_rotation(900.0, 1000.0, 4096.0), 3996.0);
/// ```
pub fn position_within_rotation(position: f64, zero: f64, period: f64) -> f64 {
    let folded = (position - zero).rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negative inputs
    if folded >= period { 0.0 } else { folded }
}
