//! Angle to azimuth encoder unit conversion

use core::f64::consts::TAU;

use swerve_errors::prelude::*;

/// Maps clockwise angles onto the azimuth encoder scale and back.
///
/// One full revolution is `mechanical_period` units.
///
/// # Examples
///
/// ```
/// use swerve_drive::RotationUnitConverter;
///
/// let converter = RotationUnitConverter::new(4096.0)?;
/// assert_eq!(converter.units_from_angle(std::f64::consts::FRAC_PI_2), 1024.0);
/// # Ok::<(), swerve_errors::SwerveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationUnitConverter {
    mechanical_period: f64,
}

impl RotationUnitConverter {
    /// Create a converter for the given encoder units per revolution.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the period is non-finite or not positive.
    pub fn new(mechanical_period: f64) -> Result<Self> {
        validate_finite!("mechanical_period", mechanical_period);
        validate!(
            mechanical_period > 0.0,
            ValidationError::non_positive("mechanical_period", mechanical_period)
        );
        Ok(Self { mechanical_period })
    }

    /// Encoder units per revolution.
    pub fn mechanical_period(&self) -> f64 {
        self.mechanical_period
    }

    /// `angle / 2π · period`
    #[inline]
    pub fn units_from_angle(&self, angle: f64) -> f64 {
        angle / TAU * self.mechanical_period
    }

    /// `units / period · 2π`
    #[inline]
    pub fn angle_from_units(&self, units: f64) -> f64 {
        units / self.mechanical_period * TAU
    }
}

impl From<&crate::SwerveConfig> for RotationUnitConverter {
    fn from(config: &crate::SwerveConfig) -> Self {
        // SwerveConfig has already validated the period
        Self {
            mechanical_period: config.mechanical_period(),
        }
    }
}
