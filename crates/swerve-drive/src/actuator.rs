//! Two-motor swerve module with software position assumption
//!
//! [`SwerveModule`] turns a pair of raw motor channels into a
//! [`ModuleActuator`]. Azimuth targets are reached by a single-step speed
//! curve evaluated on every call: fast while far from the target, then two
//! fixed creep speeds, then stopped once within tolerance.
//!
//! ```text
//! s(z) = 1 / (1 + e^(5 - z))       z >= first_end_behavior_at
//! s(z) = first_end_behavior_speed  second_end_behavior_at <= z < first_end_behavior_at
//! s(z) = second_end_behavior_speed tolerance <= z < second_end_behavior_at
//! s(z) = 0                         z < tolerance
//! ```
//!
//! `z` is the absolute remaining travel; the output takes its sign.

use serde::{Deserialize, Serialize};
use swerve_errors::prelude::*;

use crate::module::ModuleActuator;

/// A raw open-loop motor channel with an integrated encoder.
pub trait MotorController {
    /// Set output in `[-1.0, 1.0]`.
    fn set(&mut self, speed: f64);

    /// Encoder position in native units.
    fn position(&self) -> f64;
}

impl<M: MotorController + ?Sized> MotorController for Box<M> {
    fn set(&mut self, speed: f64) {
        (**self).set(speed);
    }

    fn position(&self) -> f64 {
        (**self).position()
    }
}

/// Speed curve parameters for [`SwerveModule::assume_swerve_position`].
///
/// All distances are in azimuth encoder units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssumeProfile")]
pub struct AssumeProfile {
    tolerance: f64,
    first_end_behavior_at: f64,
    first_end_behavior_speed: f64,
    second_end_behavior_at: f64,
    second_end_behavior_speed: f64,
}

impl Default for AssumeProfile {
    /// Tuned for an azimuth geared at 18 units per revolution: 0.1 unit
    /// tolerance, creeping at 5% inside 0.75 units and 10% inside 3 units.
    fn default() -> Self {
        Self {
            tolerance: 0.1,
            first_end_behavior_at: 3.0,
            first_end_behavior_speed: 0.1,
            second_end_behavior_at: 0.75,
            second_end_behavior_speed: 0.05,
        }
    }
}

impl AssumeProfile {
    /// Validate and build a profile.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any value is non-finite, a speed is
    /// outside `[0, 1]`, or the thresholds are not ordered
    /// `0 <= tolerance <= second_end_behavior_at <= first_end_behavior_at`.
    pub fn new(
        tolerance: f64,
        first_end_behavior_at: f64,
        first_end_behavior_speed: f64,
        second_end_behavior_at: f64,
        second_end_behavior_speed: f64,
    ) -> Result<Self> {
        validate_finite!("tolerance", tolerance);
        validate_finite!("first_end_behavior_at", first_end_behavior_at);
        validate_finite!("second_end_behavior_at", second_end_behavior_at);
        validate_range!("first_end_behavior_speed", first_end_behavior_speed, 0.0_f64, 1.0_f64);
        validate_range!("second_end_behavior_speed", second_end_behavior_speed, 0.0_f64, 1.0_f64);
        validate!(tolerance >= 0.0, ValidationError::negative("tolerance", tolerance));
        validate!(
            tolerance <= second_end_behavior_at,
            ValidationError::constraint("tolerance must not exceed second_end_behavior_at")
        );
        validate!(
            second_end_behavior_at <= first_end_behavior_at,
            ValidationError::constraint(
                "second_end_behavior_at must not exceed first_end_behavior_at"
            )
        );

        Ok(Self {
            tolerance,
            first_end_behavior_at,
            first_end_behavior_speed,
            second_end_behavior_at,
            second_end_behavior_speed,
        })
    }

    /// Distance at which the module counts as arrived.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Signed azimuth output for `remaining = target - position`.
    pub fn speed_for(&self, remaining: f64) -> f64 {
        let distance = remaining.abs();
        let magnitude = if distance >= self.first_end_behavior_at {
            1.0 / (1.0 + (5.0 - distance).exp())
        } else if distance >= self.second_end_behavior_at {
            self.first_end_behavior_speed
        } else if distance >= self.tolerance {
            self.second_end_behavior_speed
        } else {
            0.0
        };
        magnitude.copysign(remaining)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAssumeProfile {
    tolerance: f64,
    first_end_behavior_at: f64,
    first_end_behavior_speed: f64,
    second_end_behavior_at: f64,
    second_end_behavior_speed: f64,
}

impl TryFrom<RawAssumeProfile> for AssumeProfile {
    type Error = SwerveError;

    fn try_from(raw: RawAssumeProfile) -> Result<Self> {
        Self::new(
            raw.tolerance,
            raw.first_end_behavior_at,
            raw.first_end_behavior_speed,
            raw.second_end_behavior_at,
            raw.second_end_behavior_speed,
        )
    }
}

/// A drive motor and a swerve (azimuth) motor acting as one module.
#[derive(Debug)]
pub struct SwerveModule<D, S> {
    drive: D,
    swerve: S,
    profile: AssumeProfile,
}

impl<D: MotorController, S: MotorController> SwerveModule<D, S> {
    /// Pair two motors under `profile`.
    pub fn new(drive: D, swerve: S, profile: AssumeProfile) -> Self {
        Self {
            drive,
            swerve,
            profile,
        }
    }

    /// The speed curve in use.
    pub fn profile(&self) -> &AssumeProfile {
        &self.profile
    }

    /// Drive motor.
    pub fn drive_motor(&self) -> &D {
        &self.drive
    }

    /// Exclusive access to the drive motor.
    pub fn drive_motor_mut(&mut self) -> &mut D {
        &mut self.drive
    }

    /// Swerve motor.
    pub fn swerve_motor(&self) -> &S {
        &self.swerve
    }

    /// Exclusive access to the swerve motor, e.g. to advance a simulation.
    pub fn swerve_motor_mut(&mut self) -> &mut S {
        &mut self.swerve
    }

    /// Split back into the two motors.
    pub fn into_parts(self) -> (D, S) {
        (self.drive, self.swerve)
    }
}

impl<D: MotorController, S: MotorController> ModuleActuator for SwerveModule<D, S> {
    fn set_drive_speed(&mut self, speed: f64) {
        self.drive.set(speed);
    }

    fn set_swerve_speed(&mut self, speed: f64) {
        self.swerve.set(speed);
    }

    fn swerve_position(&self) -> f64 {
        self.swerve.position()
    }

    fn assume_swerve_position(&mut self, target: f64) {
        let remaining = target - self.swerve.position();
        self.swerve.set(self.profile.speed_for(remaining));
    }
}
