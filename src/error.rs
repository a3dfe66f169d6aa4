//! Error types for pomowatch.
//!
//! The session core never fails; these errors come from the shell around it
//! (configuration files, terminal setup, argument parsing, output).

use thiserror::Error;

/// Errors produced outside the session state machine.
#[derive(Debug, Error)]
pub enum PomowatchError {
    /// Configuration could not be resolved, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or stdio failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or parsing failure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The terminal could not be set up, drawn to, or restored.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A command-line value was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_json::Error> for PomowatchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for PomowatchError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
