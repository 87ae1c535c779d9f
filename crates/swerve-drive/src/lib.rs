//! Swerve drive control core
//!
//! Converts multi-axis controller input into one shared actuation command for
//! a four-module swerve drivetrain, and establishes and restores each module's
//! mechanical zero azimuth.
//!
//! # Overview
//!
//! One control tick flows through:
//!
//! - **Deadzone**: a centered stick short-circuits to a stop command
//! - **Direction**: `(x, y)` becomes a clockwise angle and a taxicab magnitude
//! - **Units**: the angle becomes native azimuth encoder units
//! - **Heading** (optional): the direction is rotated into the field frame
//! - **Dispatch**: the same [`ModuleCommand`] is issued to all four modules
//!
//! Calibration captures each module's raw azimuth into a
//! [`ZeroReferenceStore`]; homing drives a module back to that zero, or to the
//! nearest equivalent of it one mechanical period away.
//!
//! # Tick model
//!
//! Everything runs synchronously inside one call from the host scheduler.
//! Nothing blocks, nothing is retried, and no locks are taken. Module and
//! telemetry writes are fire-and-forget.
//!
//! # Example
//!
//! ```
//! use swerve_drive::prelude::*;
//!
//! # #[derive(Default)]
//! # struct Stub { drive: f64, target: Option<f64> }
//! # impl ModuleActuator for Stub {
//! #     fn set_drive_speed(&mut self, speed: f64) { self.drive = speed; }
//! #     fn set_swerve_speed(&mut self, _speed: f64) {}
//! #     fn swerve_position(&self) -> f64 { 0.0 }
//! #     fn assume_swerve_position(&mut self, target: f64) { self.target = Some(target); }
//! # }
//! let config = SwerveConfig::new(0.2, 4096.0)?;
//! let modules = PerModule::from_fn(|_| Stub::default());
//! let mut train = SwerveTrain::new(&config, modules, NullTelemetry);
//!
//! let command = train.drive_from_controller(&AxisInput::new(1.0, 0.0, 0.0)?);
//! assert_eq!(command.swerve_target, Some(1024.0));
//! # Ok::<(), swerve_errors::SwerveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod actuator;
pub mod config;
pub mod direction;
pub mod heading;
pub mod homing;
pub mod input;
pub mod module;
pub mod prelude;
pub mod telemetry;
pub mod train;
pub mod units;
pub mod vision;
pub mod zero;

pub use actuator::{AssumeProfile, MotorController, SwerveModule};
pub use config::SwerveConfig;
pub use direction::{Direction, clockwise_angle, taxicab_magnitude};
pub use heading::{FieldHeadingSource, FixedHeading, field_relative};
pub use homing::{HomingController, nearest_equivalent};
pub use input::{AxisInput, AxisSource, DeadzoneFilter};
pub use module::{ModuleActuator, ModuleCommand, ModuleId, PerModule};
pub use telemetry::{NullTelemetry, TelemetrySink, TracingTelemetry};
pub use train::SwerveTrain;
pub use units::RotationUnitConverter;
pub use vision::{LimelightTable, NumberTable, TargetReading};
pub use zero::{ZeroReferenceStore, position_within_rotation};
