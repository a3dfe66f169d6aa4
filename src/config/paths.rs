//! Path resolution for pomowatch configuration.
//!
//! Configuration lives in `~/.pomowatch/`:
//! - `config.yaml` - durations, advance mode and output settings

use std::path::PathBuf;

use crate::error::PomowatchError;

/// Paths to pomowatch configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomowatch/`
    pub root: PathBuf,
    /// Config file: `~/.pomowatch/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomowatchError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomowatchError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomowatch")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}
