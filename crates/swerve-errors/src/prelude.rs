//! Prelude module for convenient error handling imports.
//!
//! ```
//! use swerve_errors::prelude::*;
//!
//! fn period(value: f64) -> Result<f64> {
//!     validate!(value > 0.0, ValidationError::non_positive("mechanical_period", value));
//!     Ok(value)
//! }
//!
//! assert!(period(4096.0).is_ok());
//! assert!(period(0.0).is_err());
//! ```

pub use crate::{
    Result,
    common::{ErrorCategory, SwerveError},
    validation::ValidationError,
};
pub use crate::{validate, validate_finite, validate_range};

/// Return early with `$error` unless `$condition` holds.
#[macro_export]
macro_rules! validate {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err($error.into());
        }
    };
}

/// Return early with a [`ValidationError::NonFinite`] for NaN or infinite values.
#[macro_export]
macro_rules! validate_finite {
    ($field:expr, $value:expr) => {
        if !$value.is_finite() {
            return Err($crate::ValidationError::non_finite($field).into());
        }
    };
}

/// Return early with a [`ValidationError::OutOfRange`] unless `$min <= $value <= $max`.
///
/// Written as a negated inclusion test so NaN is rejected too.
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $value:expr, $min:expr, $max:expr) => {
        if !($value >= $min && $value <= $max) {
            return Err($crate::ValidationError::out_of_range($field, $value, $min, $max).into());
        }
    };
}
