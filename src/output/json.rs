//! JSON output formatting for pomowatch.

use std::path::Path;

use serde_json::json;

use crate::config::Config;
use crate::error::PomowatchError;
use crate::session::{DurationConfig, Phase, SessionSnapshot};
use crate::theme;

/// Format a session snapshot as JSON
///
/// # Errors
///
/// Returns `PomowatchError::Parse` if JSON serialization fails.
pub fn format_snapshot_json(snapshot: &SessionSnapshot) -> Result<String, PomowatchError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Format the phase table as JSON
///
/// # Errors
///
/// Returns `PomowatchError::Parse` if JSON serialization fails.
pub fn format_phases_json(durations: &DurationConfig) -> Result<String, PomowatchError> {
    let items: Vec<_> = Phase::ALL
        .iter()
        .map(|&phase| {
            let style = theme::style(phase);
            json!({
                "phase": phase,
                "label": phase.label(),
                "seconds": durations.get(phase),
                "accent": style.accent,
                "icon": style.icon_name,
            })
        })
        .collect();

    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the effective configuration as JSON
///
/// # Errors
///
/// Returns `PomowatchError::Parse` if JSON serialization fails.
pub fn format_config_json(
    config: &Config,
    source: &Path,
    durations: &DurationConfig,
) -> Result<String, PomowatchError> {
    let output = json!({
        "source": source.display().to_string(),
        "loaded": source.exists(),
        "durations": durations,
        "advance": config.session.advance_mode(),
        "general": config.general,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
