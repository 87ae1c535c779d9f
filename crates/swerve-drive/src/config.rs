//! Train configuration
//!
//! Supplied once at construction and immutable afterwards. Every constructor
//! path, including deserialization, goes through [`SwerveConfig::new`], so an
//! invalid configuration value cannot exist.

use serde::{Deserialize, Serialize};
use swerve_errors::prelude::*;

/// Validated configuration for a [`SwerveTrain`](crate::SwerveTrain).
///
/// # Examples
///
/// ```
/// use swerve_drive::SwerveConfig;
///
/// let config = SwerveConfig::new(0.2, 4096.0)?;
/// assert_eq!(config.mechanical_period(), 4096.0);
///
/// assert!(SwerveConfig::new(0.2, 0.0).is_err());
/// assert!(SwerveConfig::new(-0.1, 4096.0).is_err());
/// # Ok::<(), swerve_errors::SwerveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSwerveConfig")]
pub struct SwerveConfig {
    deadzone_threshold: f64,
    mechanical_period: f64,
}

impl SwerveConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    ///
    /// - `deadzone_threshold` is NaN, infinite, or negative. Zero is accepted
    ///   and yields a filter that never reports centered.
    /// - `mechanical_period` is NaN, infinite, or not strictly positive.
    pub fn new(deadzone_threshold: f64, mechanical_period: f64) -> Result<Self> {
        validate_finite!("deadzone_threshold", deadzone_threshold);
        validate!(
            deadzone_threshold >= 0.0,
            ValidationError::negative("deadzone_threshold", deadzone_threshold)
        );
        validate_finite!("mechanical_period", mechanical_period);
        validate!(
            mechanical_period > 0.0,
            ValidationError::non_positive("mechanical_period", mechanical_period)
        );

        Ok(Self {
            deadzone_threshold,
            mechanical_period,
        })
    }

    /// Tolerance below which every sampled axis counts as centered.
    pub fn deadzone_threshold(&self) -> f64 {
        self.deadzone_threshold
    }

    /// Encoder units per full azimuth revolution.
    pub fn mechanical_period(&self) -> f64 {
        self.mechanical_period
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSwerveConfig {
    deadzone_threshold: f64,
    mechanical_period: f64,
}

impl TryFrom<RawSwerveConfig> for SwerveConfig {
    type Error = SwerveError;

    fn try_from(raw: RawSwerveConfig) -> Result<Self> {
        Self::new(raw.deadzone_threshold, raw.mechanical_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() -> Result<()> {
        let config = SwerveConfig::new(0.2, 4096.0)?;
        assert!((config.deadzone_threshold() - 0.2).abs() < f64::EPSILON);
        assert!((config.mechanical_period() - 4096.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_zero_deadzone_allowed() {
        assert!(SwerveConfig::new(0.0, 4096.0).is_ok());
    }

    #[test]
    fn test_rejects_bad_period() {
        for period in [0.0, -4096.0, f64::NAN, f64::INFINITY] {
            let err = SwerveConfig::new(0.2, period);
            assert!(err.is_err(), "period {period} should be rejected");
        }
    }

    #[test]
    fn test_rejects_bad_deadzone() {
        for threshold in [-0.01, f64::NAN, f64::NEG_INFINITY] {
            let err = SwerveConfig::new(threshold, 4096.0);
            assert!(err.is_err(), "threshold {threshold} should be rejected");
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: std::result::Result<SwerveConfig, _> =
            serde_json::from_str(r#"{"deadzone_threshold": 0.1, "mechanical_period": 18.0}"#);
        assert!(ok.is_ok());

        let bad: std::result::Result<SwerveConfig, _> =
            serde_json::from_str(r#"{"deadzone_threshold": 0.1, "mechanical_period": 0.0}"#);
        let err = bad.map(|_| ()).err().map(|e| e.to_string()).unwrap_or_default();
        assert!(err.contains("mechanical_period"), "got: {err}");
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let bad: std::result::Result<SwerveConfig, _> = serde_json::from_str(
            r#"{"deadzone_threshold": 0.1, "mechanical_period": 18.0, "deadzone": 0.3}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let config = SwerveConfig::new(0.15, 4096.0)?;
        let json = serde_json::to_string(&config)?;
        let back: SwerveConfig = serde_json::from_str(&json)?;
        assert_eq!(config, back);
        Ok(())
    }
}
