//! Configuration settings for pomowatch.
//!
//! Settings are loaded from `~/.pomowatch/config.yaml`. The file is only
//! read; edits made while the timer runs are not written back.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomowatchError;
use crate::session::{AdvanceMode, DurationConfig, DEFAULT_LONG_BREAK_AFTER};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Phase lengths.
    pub durations: DurationsConfig,
    /// Session cycling settings.
    pub session: SessionConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Phase lengths in minutes.
///
/// Values outside 1..=60 are clamped when the durations are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationsConfig {
    /// Focus duration in minutes.
    #[serde(default = "default_focus")]
    pub focus_minutes: i64,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: i64,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: i64,
}

/// How a finished phase is followed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceSetting {
    /// Hold at zero until switched.
    #[default]
    Manual,
    /// Cycle automatically.
    Auto,
}

/// Session cycling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Advance mode.
    #[serde(default)]
    pub advance: AdvanceSetting,
    /// Number of short breaks before a long break (auto mode only).
    #[serde(default = "default_long_break_after")]
    pub long_break_after: u32,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus() -> i64 {
    25
}

const fn default_short_break() -> i64 {
    5
}

const fn default_long_break() -> i64 {
    15
}

const fn default_long_break_after() -> u32 {
    DEFAULT_LONG_BREAK_AFTER
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            advance: AdvanceSetting::default(),
            long_break_after: default_long_break_after(),
        }
    }
}

impl DurationsConfig {
    /// Build clamped session durations from these minute values.
    #[must_use]
    pub fn build(&self) -> DurationConfig {
        DurationConfig::from_minutes(
            self.focus_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        )
    }
}

impl SessionConfig {
    /// The controller advance mode these settings describe.
    #[must_use]
    pub fn advance_mode(&self) -> AdvanceMode {
        match self.advance {
            AdvanceSetting::Manual => AdvanceMode::Manual,
            AdvanceSetting::Auto => AdvanceMode::Auto {
                long_break_after: self.long_break_after.max(1),
            },
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomowatchError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomowatchError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config = serde_yaml::from_str(&contents).map_err(|e| {
            PomowatchError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, PomowatchError> {
        serde_yaml::to_string(self)
            .map_err(|e| PomowatchError::Config(format!("Failed to serialize config: {e}")))
    }
}
