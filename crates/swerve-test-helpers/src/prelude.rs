//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use swerve_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_some, must_with};

#[cfg(feature = "mock")]
pub use crate::mock::{MockModule, RecordingTelemetry, ScriptedAxes, mock_modules};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{REFERENCE_PERIOD, reference_config, reference_train, staggered_positions};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
