//! Top-level error type and classification.

use core::fmt;

use crate::ValidationError;

/// Top-level error type wrapping every failure the workspace can report.
#[derive(Debug, thiserror::Error)]
pub enum SwerveError {
    /// A value failed validation at a construction or input boundary
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or was inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

impl SwerveError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SwerveError::Validation(_) => ErrorCategory::Validation,
            SwerveError::Config(_) => ErrorCategory::Config,
            SwerveError::Io(_) => ErrorCategory::IO,
        }
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        SwerveError::Config(msg.into())
    }

    /// Returns the wrapped validation error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            SwerveError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SwerveError {
    fn from(e: std::io::Error) -> Self {
        SwerveError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Configuration errors
    Config = 0,
    /// Validation errors
    Validation = 1,
    /// I/O errors
    IO = 2,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Validation => write!(f, "Validation"),
            ErrorCategory::IO => write!(f, "IO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Config.to_string(), "Config");
        assert_eq!(ErrorCategory::Validation.to_string(), "Validation");
        assert_eq!(ErrorCategory::IO.to_string(), "IO");
    }

    #[test]
    fn test_swerve_error_category() {
        let err: SwerveError = ValidationError::non_finite("x").into();
        assert_eq!(err.category(), ErrorCategory::Validation);

        let err = SwerveError::config("bad file");
        assert_eq!(err.category(), ErrorCategory::Config);

        let err: SwerveError = std::io::Error::other("gone").into();
        assert_eq!(err.category(), ErrorCategory::IO);
    }

    #[test]
    fn test_as_validation() {
        let err: SwerveError = ValidationError::non_positive("mechanical_period", 0.0).into();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::NonPositive { .. })
        ));
        assert!(SwerveError::config("x").as_validation().is_none());
    }

    #[test]
    fn test_swerve_error_is_std_error() {
        let err = SwerveError::config("x");
        let _: &dyn std::error::Error = &err;
    }
}
