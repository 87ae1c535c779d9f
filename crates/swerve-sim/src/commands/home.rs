//! `swervectl home`

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use swerve_drive::{HomingController, ModuleId, PerModule, ZeroReferenceStore};

use crate::error::CliError;
use crate::files::{SimConfig, load};
use crate::output;

/// Homing plan for one module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HomePlan {
    pub module: ModuleId,
    pub position: f64,
    pub zero: f64,
    pub target: f64,
    pub travel: f64,
}

/// Homing targets for every module, without moving anything.
///
/// `direct` homes to the stored zero itself instead of its nearest equivalent.
pub fn plan(
    period: f64,
    positions: PerModule<f64>,
    zeros: PerModule<f64>,
    direct: bool,
) -> PerModule<HomePlan> {
    let homing = HomingController::new(period);
    let store = ZeroReferenceStore::from_power_on(zeros);
    positions.map(|module, position| {
        let target = if direct {
            homing.zero_target(&store, module)
        } else {
            homing.nearest_zero_target(&store, module, position)
        };
        HomePlan {
            module,
            position,
            zero: store.get(module),
            target,
            travel: target - position,
        }
    })
}

fn per_module(values: &[f64], flag: &str) -> std::result::Result<PerModule<f64>, CliError> {
    match values {
        [fr, fl, rl, rr] => Ok(PerModule::new(*fr, *fl, *rl, *rr)),
        _ => Err(CliError::ValidationError(format!(
            "{flag} takes four values (FR FL RL RR), got {}",
            values.len()
        ))),
    }
}

pub fn execute(
    config: &Path,
    positions: &[f64],
    zeros: Option<&[f64]>,
    direct: bool,
    json: bool,
) -> Result<()> {
    let config: SimConfig = load(config)?;
    let positions = per_module(positions, "--position")?;
    let zeros = match zeros {
        Some(values) => per_module(values, "--zero")?,
        None => config.power_on,
    };
    for (id, value) in positions.iter().chain(zeros.iter()) {
        if !value.is_finite() {
            return Err(CliError::ValidationError(format!("{id} value {value} is not finite")).into());
        }
    }

    let plans = plan(config.train.mechanical_period(), positions, zeros, direct);
    if json {
        let list: Vec<HomePlan> = plans.iter().map(|(_, p)| *p).collect();
        output::print_success_json("modules", &list)?;
    } else {
        output::heading("module  position      zero    target    travel");
        for (_, p) in plans.iter() {
            println!(
                "{:>6}  {:>8.1}  {:>8.1}  {:>8.1}  {:>+8.1}",
                p.module.label(),
                p.position,
                p.zero,
                p.target,
                p.travel
            );
        }
    }
    Ok(())
}
