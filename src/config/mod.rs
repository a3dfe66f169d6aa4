//! Configuration management for pomowatch.
//!
//! This module handles loading configuration from `~/.pomowatch/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    AdvanceSetting, ColorSetting, Config, DurationsConfig, GeneralConfig, SessionConfig,
};
