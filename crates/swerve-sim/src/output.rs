//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde::Serialize;
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print `{"success": true, <key>: <value>}`.
pub fn print_success_json<T: Serialize>(key: &str, value: &T) -> Result<(), CliError> {
    let mut output = serde_json::Map::new();
    output.insert("success".to_string(), json!(true));
    output.insert(key.to_string(), serde_json::to_value(value)?);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Section heading for human output.
pub fn heading(text: &str) {
    println!("{}", text.bold());
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::FileNotFound(_)) => "file_not_found",
        Some(CliError::ValidationError(_)) => "validation",
        Some(CliError::InvalidConfiguration(_)) => "invalid_configuration",
        Some(CliError::IoError(_)) => "io",
        Some(CliError::JsonError(_)) => "json",
        Some(CliError::YamlError(_)) => "yaml",
        None => "unknown",
    }
}
