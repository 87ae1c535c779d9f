//! Mock implementations for testing.
//!
//! Recording stand-ins for the collaborators a swerve train talks to.

use std::collections::VecDeque;

use swerve_drive::{AxisSource, ModuleActuator, PerModule, TelemetrySink};

/// A module actuator that records every write.
///
/// The azimuth position only changes when a test sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockModule {
    pub position: f64,
    pub drive_speeds: Vec<f64>,
    pub swerve_speeds: Vec<f64>,
    pub targets: Vec<f64>,
}

impl MockModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// A module whose encoder reads `position`.
    pub fn at(position: f64) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    pub fn last_drive_speed(&self) -> Option<f64> {
        self.drive_speeds.last().copied()
    }

    pub fn last_swerve_speed(&self) -> Option<f64> {
        self.swerve_speeds.last().copied()
    }

    pub fn last_target(&self) -> Option<f64> {
        self.targets.last().copied()
    }

    pub fn clear(&mut self) {
        self.drive_speeds.clear();
        self.swerve_speeds.clear();
        self.targets.clear();
    }

    pub fn total_writes(&self) -> usize {
        self.drive_speeds.len() + self.swerve_speeds.len() + self.targets.len()
    }
}

impl ModuleActuator for MockModule {
    fn set_drive_speed(&mut self, speed: f64) {
        self.drive_speeds.push(speed);
    }

    fn set_swerve_speed(&mut self, speed: f64) {
        self.swerve_speeds.push(speed);
    }

    fn swerve_position(&self) -> f64 {
        self.position
    }

    fn assume_swerve_position(&mut self, target: f64) {
        self.targets.push(target);
    }
}

/// Four mocks reading the given positions, in dispatch order.
pub fn mock_modules(positions: [f64; 4]) -> PerModule<MockModule> {
    let [front_right, front_left, rear_left, rear_right] = positions;
    PerModule::new(front_right, front_left, rear_left, rear_right).map(|_, p| MockModule::at(p))
}

/// A telemetry sink that keeps every publish in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingTelemetry {
    pub entries: Vec<(String, f64)>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value published under `name`.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn put_number(&mut self, name: &str, value: f64) {
        self.entries.push((name.to_string(), value));
    }
}

/// Replays a fixed list of raw samples, then reports a resting stick.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAxes {
    samples: VecDeque<[f64; 3]>,
    reads: usize,
}

impl ScriptedAxes {
    pub fn new(samples: impl IntoIterator<Item = [f64; 3]>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            reads: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl AxisSource for ScriptedAxes {
    fn read_axes(&mut self) -> [f64; 3] {
        self.reads += 1;
        self.samples.pop_front().unwrap_or([0.0; 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_module_records() {
        let mut module = MockModule::at(12.0);
        module.set_drive_speed(0.5);
        module.assume_swerve_position(30.0);
        assert_eq!(module.last_drive_speed(), Some(0.5));
        assert_eq!(module.last_target(), Some(30.0));
        assert_eq!(module.last_swerve_speed(), None);
        assert_eq!(module.total_writes(), 2);
        module.clear();
        assert_eq!(module.total_writes(), 0);
    }

    #[test]
    fn test_recording_telemetry_latest_wins() {
        let mut sink = RecordingTelemetry::new();
        sink.put_number("FR Swrv Pos", 1.0);
        sink.put_number("FR Swrv Pos", 2.0);
        assert_eq!(sink.value("FR Swrv Pos"), Some(2.0));
        assert_eq!(sink.value("FL Swrv Pos"), None);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_scripted_axes_rest_after_script() {
        let mut source = ScriptedAxes::new([[0.5, 0.5, 0.0]]);
        assert_eq!(source.read_axes(), [0.5, 0.5, 0.0]);
        assert_eq!(source.read_axes(), [0.0, 0.0, 0.0]);
        assert_eq!(source.reads(), 2);
        assert_eq!(source.remaining(), 0);
    }
}
