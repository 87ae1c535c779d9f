//! Reference configurations and trains for common test scenarios.

use swerve_drive::{SwerveConfig, SwerveTrain};

use crate::mock::{MockModule, RecordingTelemetry, mock_modules};
use crate::must::must_with;

/// Encoder units per revolution used by the reference scenarios.
pub const REFERENCE_PERIOD: f64 = 4096.0;

/// Deadzone used by the reference scenarios.
pub const REFERENCE_DEADZONE: f64 = 0.2;

/// `deadzone = 0.2`, `period = 4096`.
#[track_caller]
pub fn reference_config() -> SwerveConfig {
    must_with(
        SwerveConfig::new(REFERENCE_DEADZONE, REFERENCE_PERIOD),
        "reference config",
    )
}

/// A reference train over mocks reading `positions`, with a recording sink.
#[track_caller]
pub fn reference_train(positions: [f64; 4]) -> SwerveTrain<MockModule, RecordingTelemetry> {
    SwerveTrain::new(&reference_config(), mock_modules(positions), RecordingTelemetry::new())
}

/// Raw power-on readings (FR, FL, RL, RR) that differ per module, including
/// one below zero and one more than a full period out.
pub fn staggered_positions() -> [f64; 4] {
    [0.0, 1000.0, -2500.0, 9000.0]
}
