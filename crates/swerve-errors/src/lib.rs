//! Centralized error types for the swerve drive workspace
//!
//! The control core never fails at tick time: degenerate input and
//! uncalibrated modules are defined behaviour. Errors only surface at the
//! edges, where configuration is constructed and controller samples enter
//! the pipeline.
//!
//! - [`common`]: the top-level [`SwerveError`] and its classification
//! - [`validation`]: field-level validation failures
//! - [`prelude`]: re-exports and the `validate!` family of macros
//!
//! # Example
//!
//! ```
//! use swerve_errors::prelude::*;
//!
//! fn check_axis(value: f64) -> Result<f64> {
//!     validate_range!("x", value, -1.0_f64, 1.0_f64);
//!     Ok(value)
//! }
//!
//! assert!(check_axis(0.5).is_ok());
//! assert!(check_axis(1.5).is_err());
//! assert!(check_axis(f64::NAN).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod common;
pub mod prelude;
pub mod validation;

pub use common::{ErrorCategory, SwerveError};
pub use validation::ValidationError;

/// A specialized `Result` type for swerve drive operations.
pub type Result<T> = std::result::Result<T, SwerveError>;
