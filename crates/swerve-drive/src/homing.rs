//! Azimuth homing
//!
//! A module's azimuth rotates continuously, so its zero is really the set
//! `zero + k·period`. Homing to the raw zero can cost almost a full turn after
//! the joint has wrapped; homing to the nearest member of the set never costs
//! more than half a turn.

use tracing::debug;

use crate::module::{ModuleActuator, ModuleId};
use crate::zero::ZeroReferenceStore;

/// Relative tolerance under which two candidate travels count as a tie.
const TIE_EPSILON: f64 = 1e-9;

/// Issues homing commands against a [`ZeroReferenceStore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomingController {
    mechanical_period: f64,
}

impl HomingController {
    /// Create a controller for the given encoder units per revolution.
    ///
    /// `mechanical_period` is expected to be validated already (it comes from
    /// [`SwerveConfig`](crate::SwerveConfig)).
    pub fn new(mechanical_period: f64) -> Self {
        Self { mechanical_period }
    }

    /// Encoder units per revolution.
    pub fn mechanical_period(&self) -> f64 {
        self.mechanical_period
    }

    /// Raw target for [`home_to_zero`](Self::home_to_zero).
    pub fn zero_target(&self, zeros: &ZeroReferenceStore, id: ModuleId) -> f64 {
        zeros.get(id)
    }

    /// Raw target for [`home_to_nearest_zero`](Self::home_to_nearest_zero).
    pub fn nearest_zero_target(&self, zeros: &ZeroReferenceStore, id: ModuleId, position: f64) -> f64 {
        nearest_equivalent(zeros.get(id), position, self.mechanical_period)
    }

    /// Drive `module` straight to its stored zero.
    pub fn home_to_zero<M: ModuleActuator + ?Sized>(
        &self,
        module: &mut M,
        zeros: &ZeroReferenceStore,
        id: ModuleId,
    ) -> f64 {
        let target = self.zero_target(zeros, id);
        debug!(module = %id, raw_target = target, "Homing to zero");
        module.assume_swerve_position(target);
        target
    }

    /// Drive `module` to the equivalent of its zero nearest its current position.
    pub fn home_to_nearest_zero<M: ModuleActuator + ?Sized>(
        &self,
        module: &mut M,
        zeros: &ZeroReferenceStore,
        id: ModuleId,
    ) -> f64 {
        let position = module.swerve_position();
        let target = self.nearest_zero_target(zeros, id, position);
        debug!(module = %id, position, raw_target = target, "Homing to nearest zero");
        module.assume_swerve_position(target);
        target
    }
}

/// The member of `{reference + k·period}` closest to `position`.
///
/// Travel `|result - position|` never exceeds `period / 2`. When two members
/// are equally close, the one with the smaller absolute value wins.
///
/// # Examples
///
/// ```
/// use swerve_drive::nearest_equivalent;
///
/// // 1896 units up to 5096 beats 2200 units down to 1000
/// assert_eq!(nearest_equivalent(1000.0, 3200.0, 4096.0), 5096.0);
/// assert_eq!(nearest_equivalent(1000.0, 1500.0, 4096.0), 1000.0);
/// ```
pub fn nearest_equivalent(reference: f64, position: f64, period: f64) -> f64 {
    let turns = ((position - reference) / period).round();
    let center = reference + turns * period;

    let tie = TIE_EPSILON * period;
    let mut best = center;
    for candidate in [center - period, center + period] {
        let travel = (candidate - position).abs();
        let best_travel = (best - position).abs();
        if travel < best_travel - tie
            || (travel <= best_travel + tie && candidate.abs() < best.abs())
        {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::PerModule;
    use approx::assert_abs_diff_eq;

    #[derive(Debug, Default)]
    struct Recorder {
        position: f64,
        target: Option<f64>,
    }

    impl ModuleActuator for Recorder {
        fn set_drive_speed(&mut self, _speed: f64) {}
        fn set_swerve_speed(&mut self, _speed: f64) {}
        fn swerve_position(&self) -> f64 {
            self.position
        }
        fn assume_swerve_position(&mut self, target: f64) {
            self.target = Some(target);
        }
    }

    fn store(zero: f64) -> ZeroReferenceStore {
        ZeroReferenceStore::from_power_on(PerModule::new(zero, zero, zero, zero))
    }

    #[test]
    fn test_wrapped_module_goes_forward() {
        assert_abs_diff_eq!(nearest_equivalent(1000.0, 3200.0, 4096.0), 5096.0);
    }

    #[test]
    fn test_near_zero_stays() {
        assert_abs_diff_eq!(nearest_equivalent(1000.0, 2000.0, 4096.0), 1000.0);
        assert_abs_diff_eq!(nearest_equivalent(1000.0, 200.0, 4096.0), 1000.0);
    }

    #[test]
    fn test_many_turns_away() {
        let position = 1000.0 + 7.0 * 4096.0 + 100.0;
        assert_abs_diff_eq!(nearest_equivalent(1000.0, position, 4096.0), 1000.0 + 7.0 * 4096.0);
        let position = 1000.0 - 3.0 * 4096.0 - 100.0;
        assert_abs_diff_eq!(nearest_equivalent(1000.0, position, 4096.0), 1000.0 - 3.0 * 4096.0);
    }

    #[test]
    fn test_tie_prefers_smaller_absolute_target() {
        // 1000 and 5096 are both 2048 away from 3048
        assert_abs_diff_eq!(nearest_equivalent(1000.0, 3048.0, 4096.0), 1000.0);
        // -3096 and 1000 are both 2048 away from -1048
        assert_abs_diff_eq!(nearest_equivalent(1000.0, -1048.0, 4096.0), 1000.0);
        // -2048 and 2048 tie on absolute value too; stays deterministic
        let target = nearest_equivalent(2048.0, 0.0, 4096.0);
        assert_abs_diff_eq!(target.abs(), 2048.0);
    }

    #[test]
    fn test_home_to_zero_commands_stored_value() {
        let homing = HomingController::new(4096.0);
        let mut module = Recorder {
            position: 3200.0,
            target: None,
        };
        let target = homing.home_to_zero(&mut module, &store(1000.0), ModuleId::FrontRight);
        assert_abs_diff_eq!(target, 1000.0);
        assert_eq!(module.target, Some(1000.0));
    }

    #[test]
    fn test_home_to_nearest_zero_reads_position() {
        let homing = HomingController::new(4096.0);
        let mut module = Recorder {
            position: 3200.0,
            target: None,
        };
        let target = homing.home_to_nearest_zero(&mut module, &store(1000.0), ModuleId::RearRight);
        assert_abs_diff_eq!(target, 5096.0);
        assert_eq!(module.target, Some(5096.0));
    }
}
