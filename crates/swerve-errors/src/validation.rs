//! Input validation error types.
//!
//! Raised when configuration is constructed and when controller samples
//! cross into the control pipeline.

use core::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value out of range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Minimum allowed value
        min: String,
        /// Maximum allowed value
        max: String,
    },

    /// Value is NaN or infinite
    #[error("{0} must be a finite number")]
    NonFinite(String),

    /// Value must be strictly greater than zero
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
    },

    /// Value must not be below zero
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
    },

    /// Constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create a non-finite error.
    pub fn non_finite(field: impl Into<String>) -> Self {
        ValidationError::NonFinite(field.into())
    }

    /// Create a non-positive error.
    pub fn non_positive<T: fmt::Debug>(field: impl Into<String>, value: T) -> Self {
        ValidationError::NonPositive {
            field: field.into(),
            value: format!("{value:?}"),
        }
    }

    /// Create a negative value error.
    pub fn negative<T: fmt::Debug>(field: impl Into<String>, value: T) -> Self {
        ValidationError::Negative {
            field: field.into(),
            value: format!("{value:?}"),
        }
    }

    /// Create a constraint violation error.
    pub fn constraint(msg: impl Into<String>) -> Self {
        ValidationError::ConstraintViolation(msg.into())
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::NonPositive { field, .. }
            | ValidationError::Negative { field, .. } => Some(field),
            ValidationError::NonFinite(field) => Some(field),
            ValidationError::ConstraintViolation(_) => None,
        }
    }
}
