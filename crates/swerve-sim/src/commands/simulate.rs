//! `swervectl simulate`

use std::path::Path;

use anyhow::Result;
use swerve_drive::FixedHeading;
use tracing::info;

use crate::error::CliError;
use crate::files::{ScriptSource, ScriptStep, SimConfig, load};
use crate::output;
use crate::sim::{TickReport, build_train, run_script};

pub fn execute(config: &Path, script: &Path, heading_deg: Option<f64>, json: bool) -> Result<()> {
    let config: SimConfig = load(config)?;
    let steps: Vec<ScriptStep> = load(script)?;
    let mut source = ScriptSource::new(steps);

    let mut train = build_train(&config);
    if let Some(degrees) = heading_deg {
        if !degrees.is_finite() {
            return Err(CliError::ValidationError(format!("heading {degrees} is not finite")).into());
        }
        info!(heading_deg = degrees, "Driving field-relative");
        train = train.with_heading_source(FixedHeading::from_degrees(degrees));
    }

    let reports = run_script(&mut train, &mut source, config.train.mechanical_period())
        .map_err(CliError::from)?;

    if json {
        output::print_success_json("ticks", &reports)?;
    } else {
        print_reports(&reports);
    }
    Ok(())
}

fn print_reports(reports: &[TickReport]) {
    output::heading("tick  drive   target     FR       FL       RL       RR");
    for report in reports {
        let target = report
            .command
            .swerve_target
            .map_or_else(|| "hold".to_string(), |t| format!("{t:.3}"));
        println!(
            "{:>4}  {:>5.3}  {:>7}  {:>7.3}  {:>7.3}  {:>7.3}  {:>7.3}",
            report.tick,
            report.command.drive_speed,
            target,
            report.azimuth.front_right,
            report.azimuth.front_left,
            report.azimuth.rear_left,
            report.azimuth.rear_right,
        );
    }
}
