//! Config, script and table loading
//!
//! Files are YAML (`.yaml`, `.yml`) or JSON (`.json`), chosen by extension.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use swerve_drive::{AssumeProfile, AxisSource, PerModule, SwerveConfig};
use swerve_errors::prelude::*;
use tracing::debug;

use crate::error::CliError;

/// Read and deserialize `path` according to its extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> std::result::Result<T, CliError> {
    let format = FileFormat::of(path)?;
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::FileNotFound(path.display().to_string()),
        _ => SwerveError::from(e).into(),
    })?;
    debug!(path = %path.display(), bytes = content.len(), ?format, "Loaded file");

    match format {
        FileFormat::Yaml => Ok(serde_yaml::from_str(&content)?),
        FileFormat::Json => Ok(serde_json::from_str(&content)?),
    }
}

/// Serialization format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// # Errors
    ///
    /// A configuration error for any extension other than `yaml`, `yml` or
    /// `json`.
    pub fn of(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            other => Err(SwerveError::config(format!(
                "unsupported file extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

/// Everything `swervectl` needs to stand up a simulated train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSimConfig")]
pub struct SimConfig {
    pub train: SwerveConfig,
    pub assume: AssumeProfile,
    pub power_on: PerModule<f64>,
    pub swerve_units_per_tick: f64,
}

impl SimConfig {
    pub fn new(
        train: SwerveConfig,
        assume: AssumeProfile,
        power_on: PerModule<f64>,
        swerve_units_per_tick: f64,
    ) -> Result<Self> {
        for (id, position) in power_on.iter() {
            let position = *position;
            validate_finite!(format!("power_on.{id}"), position);
        }
        validate_finite!("swerve_units_per_tick", swerve_units_per_tick);
        validate!(
            swerve_units_per_tick > 0.0,
            ValidationError::non_positive("swerve_units_per_tick", swerve_units_per_tick)
        );
        Ok(Self {
            train,
            assume,
            power_on,
            swerve_units_per_tick,
        })
    }
}

fn default_units_per_tick() -> f64 {
    1.0
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSimConfig {
    train: SwerveConfig,
    #[serde(default)]
    assume: AssumeProfile,
    #[serde(default)]
    power_on: PerModule<f64>,
    #[serde(default = "default_units_per_tick")]
    swerve_units_per_tick: f64,
}

impl TryFrom<RawSimConfig> for SimConfig {
    type Error = SwerveError;

    fn try_from(raw: RawSimConfig) -> Result<Self> {
        Self::new(raw.train, raw.assume, raw.power_on, raw.swerve_units_per_tick)
    }
}

/// One scripted stick position, held for `ticks` ticks.
///
/// Values are not validated here; the train rejects bad samples when they
/// are read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default = "one_tick")]
    pub ticks: u32,
}

fn one_tick() -> u32 {
    1
}

/// Replays script steps as a controller.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    steps: Vec<ScriptStep>,
    index: usize,
    held: u32,
    last: [f64; 3],
}

impl ScriptSource {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            index: 0,
            held: 0,
            last: [0.0; 3],
        }
    }

    /// The most recent raw sample handed out.
    pub fn last_sample(&self) -> [f64; 3] {
        self.last
    }

    /// Total ticks in the script.
    pub fn len(&self) -> usize {
        self.steps
            .iter()
            .fold(0usize, |total, s| total.saturating_add(s.ticks as usize))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AxisSource for ScriptSource {
    fn read_axes(&mut self) -> [f64; 3] {
        self.last = [0.0; 3];
        while let Some(step) = self.steps.get(self.index) {
            if self.held < step.ticks {
                self.held += 1;
                self.last = [step.x, step.y, step.z];
                break;
            }
            self.index += 1;
            self.held = 0;
        }
        self.last
    }
}
