//! Output formatting for pomowatch.
//!
//! This module provides formatters for displaying session state and settings
//! in various formats.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomowatchError;
use crate::session::{DurationConfig, SessionSnapshot};

pub use json::*;
pub use pretty::*;

/// Format a session snapshot based on output format
///
/// # Errors
///
/// Returns `PomowatchError::Parse` if JSON serialization fails.
pub fn format_snapshot(
    snapshot: &SessionSnapshot,
    format: OutputFormat,
) -> Result<String, PomowatchError> {
    match format {
        OutputFormat::Pretty => Ok(format_snapshot_pretty(snapshot)),
        OutputFormat::Json => format_snapshot_json(snapshot),
    }
}

/// Format the phase table based on output format
///
/// # Errors
///
/// Returns `PomowatchError::Parse` if JSON serialization fails.
pub fn format_phases(
    durations: &DurationConfig,
    format: OutputFormat,
) -> Result<String, PomowatchError> {
    match format {
        OutputFormat::Pretty => Ok(format_phases_pretty(durations)),
        OutputFormat::Json => format_phases_json(durations),
    }
}

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(
    config: &Config,
    source: &Path,
    durations: &DurationConfig,
    format: OutputFormat,
) -> Result<String, PomowatchError> {
    match format {
        OutputFormat::Pretty => format_config_pretty(config, source, durations),
        OutputFormat::Json => format_config_json(config, source, durations),
    }
}
