//! `swervectl check-config`

use std::path::Path;

use anyhow::Result;

use crate::files::{SimConfig, load};
use crate::output;

pub fn execute(path: &Path, json: bool) -> Result<()> {
    let config: SimConfig = load(path)?;

    if json {
        output::print_success_json("config", &config)?;
    } else {
        println!("✓ Configuration is valid");
        println!("  Deadzone:          {}", config.train.deadzone_threshold());
        println!("  Mechanical period: {}", config.train.mechanical_period());
        println!("  Assume tolerance:  {}", config.assume.tolerance());
        println!("  Units per tick:    {}", config.swerve_units_per_tick);
    }
    Ok(())
}
