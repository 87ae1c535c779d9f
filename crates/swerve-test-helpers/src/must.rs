//! Unwrap helpers with good error messages.
//!
//! These helpers replace `unwrap()` and `expect()` in test code, providing
//! better error messages with `#[track_caller]` for accurate panic locations.
//!
//! # When to use
//!
//! - Use `must` when you have a `Result` that should succeed in tests
//! - Use `must_some` when you have an `Option` that should be `Some`
//! - Use `must_with` when a `Result` needs a note about what was being built

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with context on error.
///
/// # Example
///
/// ```rust
/// use swerve_test_helpers::must;
/// use swerve_drive::SwerveConfig;
///
/// let config = must(SwerveConfig::new(0.2, 4096.0));
/// assert_eq!(config.mechanical_period(), 4096.0);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`, with a message including the error value.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with a custom message if `None`.
///
/// # Panics
///
/// Panics if the option is `None`, with the provided message.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap a `Result` with a custom context message.
///
/// # Panics
///
/// Panics if the result is `Err`, with the context and error value.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swerve_drive::AxisInput;

    #[test]
    fn test_must_ok() {
        let input = must(AxisInput::planar(0.5, -0.5));
        assert!((input.x() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err() {
        let _ = must(AxisInput::planar(2.0, 0.0));
    }

    #[test]
    fn test_must_some_present() {
        assert_eq!(must_some(Some(42), "expected value"), 42);
    }

    #[test]
    #[should_panic(expected = "must_some: expected a target")]
    fn test_must_some_none() {
        let _ = must_some(None::<f64>, "expected a target");
    }

    #[test]
    #[should_panic(expected = "must_with: building config")]
    fn test_must_with_err() {
        let _ = must_with(swerve_drive::SwerveConfig::new(0.2, 0.0), "building config");
    }

    #[test]
    fn test_track_caller_points_to_call_site() {
        use std::panic;

        let payload = panic::catch_unwind(|| {
            let _ = must_with(Err::<(), _>("boom"), "here");
        })
        .unwrap_err();

        let msg = payload.downcast_ref::<String>().unwrap();
        assert!(msg.contains("must_with: here"));
    }
}
