//! Error types for swervectl

use swerve_errors::SwerveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[source] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::FileNotFound(_) => 2,
            CliError::ValidationError(_)
            | CliError::InvalidConfiguration(_)
            | CliError::JsonError(_)
            | CliError::YamlError(_) => 4,
            CliError::IoError(_) => 1,
        }
    }
}

impl From<SwerveError> for CliError {
    fn from(err: SwerveError) -> Self {
        match err {
            SwerveError::Validation(e) => CliError::ValidationError(e.to_string()),
            SwerveError::Config(msg) => CliError::InvalidConfiguration(msg),
            SwerveError::Io(e) => CliError::IoError(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swerve_errors::ValidationError;

    #[test]
    fn swerve_errors_map_to_cli_errors() {
        let err = CliError::from(SwerveError::from(ValidationError::non_finite("x")));
        assert!(matches!(err, CliError::ValidationError(ref m) if m == "x must be a finite number"));
        assert_eq!(err.exit_code(), 4);

        let err = CliError::from(SwerveError::config("bad"));
        assert!(matches!(err, CliError::InvalidConfiguration(_)));
        assert_eq!(err.exit_code(), 4);

        let err = CliError::from(SwerveError::from(std::io::Error::other("disk")));
        assert!(matches!(err, CliError::IoError(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn missing_file_exit_code() {
        assert_eq!(CliError::FileNotFound("a.yaml".into()).exit_code(), 2);
    }
}
