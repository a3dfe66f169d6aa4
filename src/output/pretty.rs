use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::error::PomowatchError;
use crate::session::format::format_minutes;
use crate::session::{render_progress_bar, DurationConfig, Phase, SessionSnapshot};
use crate::theme;

const BAR_WIDTH: usize = 30;

/// One-line countdown used by `run`.
pub fn format_countdown_line(snapshot: &SessionSnapshot) -> String {
    let style = theme::style(snapshot.phase);
    format!(
        "{} {:<11} {}  {}",
        style.icon,
        snapshot.label.color(style.accent.term()).bold(),
        snapshot.remaining_display.bold(),
        render_progress_bar(snapshot.progress, BAR_WIDTH).color(style.accent.term()),
    )
}

/// Format a session snapshot as a short report
pub fn format_snapshot_pretty(snapshot: &SessionSnapshot) -> String {
    let style = theme::style(snapshot.phase);
    let state = if snapshot.running {
        "running".green()
    } else {
        "paused".yellow()
    };

    let mut output = format!(
        "{} {}  {}\n",
        style.icon,
        snapshot.label.color(style.accent.term()).bold(),
        snapshot.remaining_display.bold()
    );
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "  {} {:.0}%\n",
        render_progress_bar(snapshot.progress, BAR_WIDTH),
        snapshot.progress * 100.0
    ));
    output.push_str(&format!("  {:<10} {}\n", "State:".dimmed(), state));
    output.push_str(&format!(
        "  {:<10} {}\n",
        "Length:".dimmed(),
        format_minutes(snapshot.duration)
    ));
    output.push_str(&format!(
        "  {:<10} {}",
        "Breaks:".dimmed(),
        snapshot.cycle_count
    ));

    output
}

/// Format the phase table
pub fn format_phases_pretty(durations: &DurationConfig) -> String {
    let mut output = format!("Phases ({} items)\n", Phase::ALL.len());
    output.push_str(&"─".repeat(40));

    for phase in Phase::ALL {
        let style = theme::style(phase);
        output.push_str(&format!(
            "\n{} {:<12} {}",
            style.icon,
            phase.label().color(style.accent.term()).bold(),
            format_minutes(durations.get(phase)).dimmed()
        ));
    }

    output
}

/// Format the effective configuration
///
/// # Errors
///
/// Returns an error if the configuration cannot be rendered as YAML.
pub fn format_config_pretty(
    config: &Config,
    source: &Path,
    durations: &DurationConfig,
) -> Result<String, PomowatchError> {
    let origin = if source.exists() {
        source.display().to_string()
    } else {
        format!("{} (not found, using defaults)", source.display())
    };

    let mut output = format!("{} {}\n", "Config:".bold(), origin);
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(config.to_yaml()?.trim_end());
    output.push('\n');
    output.push_str(&"─".repeat(40));

    for phase in Phase::ALL {
        output.push_str(&format!(
            "\n{:<12} {}",
            phase.label(),
            format_minutes(durations.get(phase))
        ));
    }

    Ok(output)
}
