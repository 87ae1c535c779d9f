//! Controller axis samples and deadzone filtering

use serde::Serialize;
use swerve_errors::prelude::*;

/// One snapshot of a three-axis analog stick, each axis in `[-1.0, 1.0]`.
///
/// `x` is right-positive, `y` is forward-positive, `z` is the twist axis.
/// Construction validates every axis, so NaN never reaches the trigonometric
/// stages of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AxisInput {
    x: f64,
    y: f64,
    z: f64,
}

impl AxisInput {
    /// Validate and build a sample.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any axis is non-finite or outside
    /// `[-1.0, 1.0]`.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        for (field, value) in [("x", x), ("y", y), ("z", z)] {
            validate_finite!(field, value);
            validate_range!(field, value, -1.0_f64, 1.0_f64);
        }
        Ok(Self { x, y, z })
    }

    /// A sample with no twist axis (`z = 0`).
    ///
    /// # Errors
    ///
    /// Same as [`AxisInput::new`].
    pub fn planar(x: f64, y: f64) -> Result<Self> {
        Self::new(x, y, 0.0)
    }

    /// Horizontal axis.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical axis.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Twist axis.
    pub fn z(&self) -> f64 {
        self.z
    }
}

/// Source of controller samples, read once per tick.
pub trait AxisSource {
    /// Raw `[x, y, z]` as reported by the controller. Not yet validated.
    fn read_axes(&mut self) -> [f64; 3];
}

/// Decides whether a stick is resting inside the deadzone.
///
/// The threshold is taken as-is: a threshold of zero or below means no sample
/// is ever centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadzoneFilter {
    threshold: f64,
}

impl DeadzoneFilter {
    /// Create a filter with the given threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// True iff `|x|`, `|y|` and `|z|` are all strictly below the threshold.
    #[inline]
    pub fn is_centered(&self, input: &AxisInput) -> bool {
        self.is_centered_planar(input.x, input.y) && input.z.abs() < self.threshold
    }

    /// Two-axis variant that ignores twist.
    #[inline]
    pub fn is_centered_planar(&self, x: f64, y: f64) -> bool {
        x.abs() < self.threshold && y.abs() < self.threshold
    }

    /// True iff every stick in `inputs` is centered. Used for two-stick pads.
    pub fn all_centered(&self, inputs: &[AxisInput]) -> bool {
        inputs.iter().all(|input| self.is_centered(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_input_accepts_unit_range() -> Result<()> {
        let input = AxisInput::new(-1.0, 1.0, 0.0)?;
        assert!((input.x() + 1.0).abs() < f64::EPSILON);
        assert!((input.y() - 1.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_axis_input_rejects_nan() {
        let err = AxisInput::new(0.0, f64::NAN, 0.0);
        assert!(matches!(
            err,
            Err(SwerveError::Validation(ValidationError::NonFinite(ref f))) if f == "y"
        ));
    }

    #[test]
    fn test_axis_input_rejects_out_of_range() {
        let err = AxisInput::new(0.0, 0.0, -1.5);
        assert!(matches!(
            err,
            Err(SwerveError::Validation(ValidationError::OutOfRange { ref field, .. })) if field == "z"
        ));
    }

    #[test]
    fn test_centered_inside_threshold() -> Result<()> {
        let filter = DeadzoneFilter::new(0.2);
        assert!(filter.is_centered(&AxisInput::new(0.1, 0.15, 0.05)?));
        assert!(filter.is_centered(&AxisInput::new(-0.19, 0.0, -0.19)?));
        Ok(())
    }

    #[test]
    fn test_threshold_is_exclusive() -> Result<()> {
        let filter = DeadzoneFilter::new(0.2);
        assert!(!filter.is_centered(&AxisInput::new(0.2, 0.0, 0.0)?));
        assert!(!filter.is_centered(&AxisInput::new(0.0, -0.2, 0.0)?));
        assert!(!filter.is_centered(&AxisInput::new(0.0, 0.0, 0.2)?));
        Ok(())
    }

    #[test]
    fn test_twist_alone_leaves_deadzone() -> Result<()> {
        let filter = DeadzoneFilter::new(0.2);
        let input = AxisInput::new(0.0, 0.0, 0.9)?;
        assert!(!filter.is_centered(&input));
        assert!(filter.is_centered_planar(input.x(), input.y()));
        Ok(())
    }

    #[test]
    fn test_non_positive_threshold_never_centered() -> Result<()> {
        let rest = AxisInput::default();
        assert!(!DeadzoneFilter::new(0.0).is_centered(&rest));
        assert!(!DeadzoneFilter::new(-0.5).is_centered(&rest));
        assert!(!DeadzoneFilter::new(0.0).all_centered(&[rest, AxisInput::planar(0.0, 0.0)?]));
        Ok(())
    }

    #[test]
    fn test_all_centered() -> Result<()> {
        let filter = DeadzoneFilter::new(0.1);
        let left = AxisInput::new(0.05, 0.0, 0.0)?;
        let right = AxisInput::new(0.0, 0.5, 0.0)?;
        assert!(filter.all_centered(&[left, left]));
        assert!(!filter.all_centered(&[left, right]));
        assert!(filter.all_centered(&[]));
        Ok(())
    }
}
