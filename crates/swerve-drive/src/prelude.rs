//! Common imports for driving a swerve train.
//!
//! ```
//! use swerve_drive::prelude::*;
//! ```

pub use crate::{
    AssumeProfile, AxisInput, AxisSource, DeadzoneFilter, Direction, FieldHeadingSource,
    FixedHeading, HomingController, ModuleActuator, ModuleCommand, ModuleId, MotorController,
    NullTelemetry, PerModule, RotationUnitConverter, SwerveConfig, SwerveModule, SwerveTrain,
    TelemetrySink, TracingTelemetry, ZeroReferenceStore,
};
pub use swerve_errors::prelude::*;
