//! Simulated motors and the scripted drive loop

use serde::Serialize;
use swerve_drive::prelude::*;
use swerve_drive::position_within_rotation;
use tracing::{debug, info};

use crate::files::{ScriptSource, SimConfig};

/// An ideal motor: position moves by `output · units_per_tick` each tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulatedMotor {
    output: f64,
    position: f64,
    units_per_tick: f64,
}

impl SimulatedMotor {
    pub fn new(position: f64, units_per_tick: f64) -> Self {
        Self {
            output: 0.0,
            position,
            units_per_tick,
        }
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    /// Integrate one tick of the current output.
    pub fn advance(&mut self) {
        self.position += self.output.clamp(-1.0, 1.0) * self.units_per_tick;
    }
}

impl MotorController for SimulatedMotor {
    fn set(&mut self, speed: f64) {
        self.output = speed;
    }

    fn position(&self) -> f64 {
        self.position
    }
}

pub type SimModule = SwerveModule<SimulatedMotor, SimulatedMotor>;

/// Four simulated modules at their configured power-on positions.
pub fn build_train(config: &SimConfig) -> SwerveTrain<SimModule, TracingTelemetry> {
    let modules = config.power_on.map(|_, position| {
        SwerveModule::new(
            SimulatedMotor::new(0.0, 1.0),
            SimulatedMotor::new(position, config.swerve_units_per_tick),
            config.assume,
        )
    });
    SwerveTrain::new(&config.train, modules, TracingTelemetry)
}

/// Advance every motor in the train by one tick.
pub fn advance<T: TelemetrySink>(train: &mut SwerveTrain<SimModule, T>) {
    for id in ModuleId::ALL {
        let module = train.modules_mut().get_mut(id);
        module.drive_motor_mut().advance();
        module.swerve_motor_mut().advance();
    }
}

/// What happened on one simulated tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: usize,
    /// Raw `[x, y, z]` as scripted.
    pub input: [f64; 3],
    pub command: ModuleCommand,
    /// Azimuth after the tick, folded into one rotation from each zero.
    pub azimuth: PerModule<f64>,
}

/// Longest script a single run accepts.
pub const MAX_SCRIPT_TICKS: usize = 100_000;

/// Run every scripted tick through the train.
///
/// Stops at the first rejected sample, after the train has been stopped.
///
/// # Errors
///
/// Rejects scripts longer than [`MAX_SCRIPT_TICKS`] before any tick runs.
pub fn run_script<T: TelemetrySink>(
    train: &mut SwerveTrain<SimModule, T>,
    script: &mut ScriptSource,
    period: f64,
) -> Result<Vec<TickReport>> {
    let total = script.len();
    validate!(
        total <= MAX_SCRIPT_TICKS,
        ValidationError::out_of_range("script ticks", total, 0, MAX_SCRIPT_TICKS)
    );
    info!(ticks = total, "Running script");

    let mut reports = Vec::with_capacity(total);
    for tick in 0..total {
        let command = train.drive_from_source(script)?;
        advance(train);
        train.publish_positions();

        let zeros = *train.zero_references().all();
        let azimuth = PerModule::from_fn(|id| {
            position_within_rotation(train.modules().get(id).swerve_position(), *zeros.get(id), period)
        });
        let input = script.last_sample();
        debug!(tick, drive = command.drive_speed, "Simulated tick");
        reports.push(TickReport {
            tick,
            input,
            command,
            azimuth,
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::ScriptStep;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn config(period: f64, power_on: PerModule<f64>) -> std::result::Result<SimConfig, SwerveError> {
        SimConfig::new(SwerveConfig::new(0.1, period)?, AssumeProfile::default(), power_on, 1.0)
    }

    #[test]
    fn motor_integrates_output() {
        let mut motor = SimulatedMotor::new(2.0, 0.5);
        motor.set(2.0);
        motor.advance();
        assert!((motor.position() - 2.5).abs() < f64::EPSILON);
        motor.set(-1.0);
        motor.advance();
        assert!((motor.position() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn modules_converge_on_scripted_heading() -> TestResult {
        let config = config(18.0, PerModule::default())?;
        let mut train = build_train(&config);
        let mut script = ScriptSource::new(vec![ScriptStep { x: 1.0, y: 0.0, z: 0.0, ticks: 80 }]);

        let reports = run_script(&mut train, &mut script, 18.0)?;
        assert_eq!(reports.len(), 80);
        let last = reports.last().map(|r| r.azimuth.front_right).unwrap_or(f64::NAN);
        // a quarter turn of 18 units, settled within tolerance
        assert!((last - 4.5).abs() < 0.1, "settled at {last}");
        Ok(())
    }

    #[test]
    fn azimuth_holds_while_stick_centered() -> TestResult {
        let config = config(18.0, PerModule::default())?;
        let mut train = build_train(&config);
        let mut script = ScriptSource::new(vec![
            ScriptStep { x: 1.0, y: 0.0, z: 0.0, ticks: 1 },
            ScriptStep { x: 0.0, y: 0.0, z: 0.0, ticks: 5 },
        ]);

        let reports = run_script(&mut train, &mut script, 18.0)?;
        let (first, stopped) = reports.split_first().ok_or("no ticks")?;
        assert!(first.azimuth.front_right > 0.0);
        for report in stopped {
            assert!(report.command.is_stop());
            for (id, azimuth) in report.azimuth.iter() {
                let before = *first.azimuth.get(id);
                assert!(
                    (azimuth - before).abs() < f64::EPSILON,
                    "{id} moved from {before} to {azimuth} on tick {}",
                    report.tick
                );
            }
        }
        let output = train.modules().front_right.swerve_motor().output();
        assert!(output.abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn oversized_script_is_rejected_up_front() -> TestResult {
        let config = config(18.0, PerModule::default())?;
        let mut train = build_train(&config);
        let mut script = ScriptSource::new(vec![
            ScriptStep { x: 0.0, y: 1.0, z: 0.0, ticks: u32::MAX },
            ScriptStep { x: 0.0, y: 1.0, z: 0.0, ticks: u32::MAX },
        ]);

        let err = run_script(&mut train, &mut script, 18.0).err();
        assert!(matches!(
            err,
            Some(SwerveError::Validation(ValidationError::OutOfRange { ref field, .. })) if field == "script ticks"
        ));
        assert!(train.modules().front_right.swerve_motor().output().abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn rejected_sample_aborts_run() -> TestResult {
        let config = config(18.0, PerModule::default())?;
        let mut train = build_train(&config);
        let mut script = ScriptSource::new(vec![
            ScriptStep { x: 0.0, y: 1.0, z: 0.0, ticks: 1 },
            ScriptStep { x: 3.0, y: 0.0, z: 0.0, ticks: 1 },
        ]);
        assert!(run_script(&mut train, &mut script, 18.0).is_err());
        let drive = train.modules().rear_left.drive_motor().output();
        assert!(drive.abs() < f64::EPSILON);
        Ok(())
    }
}
