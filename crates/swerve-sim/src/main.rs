//! swervectl - swerve drive simulator and calibration helper
//!
//! Replays scripted controller input through a simulated four-module train,
//! plans homing moves, and validates configuration files.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod files;
mod output;
mod sim;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "swervectl")]
#[command(about = "Swerve drive simulator - replay controller input, plan homing, check configs")]
#[command(version)]
#[command(long_about = "
swervectl drives a simulated four-module swerve train from a scripted list of
controller samples and reports the command broadcast on every tick. It also
computes homing targets from raw encoder readings and validates config files.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(long, global = true, help = "Output in JSON format for machine parsing")]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a controller script through a simulated train
    Simulate {
        /// Train config (YAML or JSON)
        #[arg(short, long, env = "SWERVECTL_CONFIG")]
        config: PathBuf,
        /// Controller script: a list of {x, y, z, ticks} steps
        #[arg(short, long)]
        script: PathBuf,
        /// Drive field-relative at this fixed heading
        #[arg(long, allow_negative_numbers = true)]
        heading_deg: Option<f64>,
    },

    /// Compute homing targets from raw encoder readings
    Home {
        /// Train config (YAML or JSON)
        #[arg(short, long, env = "SWERVECTL_CONFIG")]
        config: PathBuf,
        /// Current azimuth readings, FR FL RL RR
        #[arg(long, num_args = 4, required = true, allow_negative_numbers = true)]
        position: Vec<f64>,
        /// Zero references, FR FL RL RR (defaults to the config's power-on readings)
        #[arg(long, num_args = 4, allow_negative_numbers = true)]
        zero: Option<Vec<f64>>,
        /// Home to the stored zero itself rather than its nearest equivalent
        #[arg(long)]
        direct: bool,
    },

    /// Validate a config file
    CheckConfig {
        /// Config file (YAML or JSON)
        path: PathBuf,
    },

    /// Report the vision target in a dumped camera table
    Target {
        /// Table file mapping tx/ty/ta/tv to numbers (YAML or JSON)
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("swervectl={log_level},swerve={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Simulate {
            config,
            script,
            heading_deg,
        } => commands::simulate::execute(config, script, *heading_deg, cli.json),
        Commands::Home {
            config,
            position,
            zero,
            direct,
        } => commands::home::execute(config, position, zero.as_deref(), *direct, cli.json),
        Commands::CheckConfig { path } => commands::check_config::execute(path, cli.json),
        Commands::Target { path } => commands::target::execute(path, cli.json),
    }
}
