//! Snapshot tests for broadcast commands and configuration errors.

use swerve_drive::prelude::*;
use swerve_test_helpers::prelude::*;

mod command_snapshots {
    use super::*;
    use insta::assert_snapshot;

    fn tick_json(x: f64, y: f64, z: f64) -> String {
        let mut train = reference_train([0.0; 4]);
        let command = train.drive_from_controller(&must(AxisInput::new(x, y, z)));
        must(serde_json::to_string(&command))
    }

    #[test]
    fn test_centered() {
        assert_snapshot!(tick_json(0.1, 0.15, 0.05), @r#"{"drive_speed":0.0,"swerve_target":null}"#);
    }

    #[test]
    fn test_forward() {
        assert_snapshot!(tick_json(0.0, 1.0, 0.0), @r#"{"drive_speed":1.0,"swerve_target":0.0}"#);
    }

    #[test]
    fn test_right() {
        assert_snapshot!(tick_json(1.0, 0.0, 0.0), @r#"{"drive_speed":1.0,"swerve_target":1024.0}"#);
    }

    #[test]
    fn test_reverse() {
        assert_snapshot!(tick_json(0.0, -0.5, 0.0), @r#"{"drive_speed":0.5,"swerve_target":2048.0}"#);
    }
}

mod config_error_snapshots {
    use super::*;
    use insta::assert_snapshot;

    fn error_of(deadzone: f64, period: f64) -> String {
        SwerveConfig::new(deadzone, period)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_zero_period() {
        assert_snapshot!(
            error_of(0.2, 0.0),
            @"Validation error: mechanical_period must be greater than zero, got 0.0"
        );
    }

    #[test]
    fn test_negative_deadzone() {
        assert_snapshot!(
            error_of(-0.1, 4096.0),
            @"Validation error: deadzone_threshold must not be negative, got -0.1"
        );
    }

    #[test]
    fn test_nan_period() {
        assert_snapshot!(
            error_of(0.2, f64::NAN),
            @"Validation error: mechanical_period must be a finite number"
        );
    }

    #[test]
    fn test_axis_out_of_range() {
        let message = AxisInput::new(0.0, 1.5, 0.0)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert_snapshot!(message, @"Validation error: y value 1.5 is out of range [-1.0, 1.0]");
    }
}
