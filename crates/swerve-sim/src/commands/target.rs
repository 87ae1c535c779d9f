//! `swervectl target`

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use swerve_drive::LimelightTable;

use crate::files::load;
use crate::output;

/// Read a dumped camera table and report the target it describes.
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let table: HashMap<String, f64> = load(path)?;
    let reading = LimelightTable::new(table).reading();

    if json {
        output::print_success_json("target", &reading)?;
    } else if reading.has_target {
        println!(
            "Target: tx {:.2}  ty {:.2}  area {:.2}",
            reading.horizontal_offset, reading.vertical_offset, reading.area
        );
    } else {
        println!("No target in sight");
    }
    Ok(())
}
