//! Command implementations for pomowatch.
//!
//! This module contains the implementation of all CLI commands, plus the
//! [`Context`] that resolves config-file values and flag overrides into the
//! settings every command shares.

mod completions;
mod run;
mod simulate;

pub use completions::{completions, generate_completions, shell_from_str};
pub use run::run;
pub use simulate::simulate;

use std::path::PathBuf;
use std::rc::Rc;

use crate::cli::args::{Cli, OutputFormat, SessionArgs};
use crate::config::{Config, Paths};
use crate::error::PomowatchError;
use crate::output::{format_config, format_phases, format_snapshot};
use crate::session::{AdvanceMode, DurationConfig, Phase, SessionController};

/// Settings resolved from the config file and command-line overrides.
#[derive(Debug, Clone)]
pub struct Context {
    /// The loaded (or default) configuration file contents.
    pub config: Config,
    /// Where the configuration was looked for.
    pub source: PathBuf,
    /// Phase lengths shared with every controller built from this context.
    pub durations: Rc<DurationConfig>,
    pub mode: AdvanceMode,
    pub format: OutputFormat,
}

impl Context {
    /// Load the config file and apply the command-line overrides in `cli`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or if
    /// no config path was given and the home directory is unknown.
    pub fn from_cli(cli: &Cli) -> Result<Self, PomowatchError> {
        let source = match &cli.config {
            Some(path) => path.clone(),
            None => Paths::new()?.config_file,
        };
        let config = Config::load_from_path(&source)?;
        Ok(Self::resolve(config, source, &cli.session, cli.output))
    }

    /// Combine a loaded config with overrides.
    #[must_use]
    pub fn resolve(
        mut config: Config,
        source: PathBuf,
        overrides: &SessionArgs,
        output: Option<OutputFormat>,
    ) -> Self {
        if let Some(focus) = overrides.focus {
            config.durations.focus_minutes = focus;
        }
        if let Some(short_break) = overrides.short_break {
            config.durations.short_break_minutes = short_break;
        }
        if let Some(long_break) = overrides.long_break {
            config.durations.long_break_minutes = long_break;
        }
        if overrides.auto_advance {
            config.session.advance = crate::config::AdvanceSetting::Auto;
        }
        if let Some(n) = overrides.long_break_after {
            config.session.long_break_after = n;
        }

        let durations = Rc::new(config.durations.build());
        let mode = config.session.advance_mode();
        let format = output.unwrap_or(config.general.default_output);

        Self {
            config,
            source,
            durations,
            mode,
            format,
        }
    }

    /// Build a paused controller, optionally positioned on `phase`.
    #[must_use]
    pub fn controller(&self, phase: Option<Phase>) -> SessionController {
        let mut controller = SessionController::with_mode(Rc::clone(&self.durations), self.mode);
        if let Some(phase) = phase {
            while controller.phase() != phase {
                controller.switch_phase();
            }
        }
        controller
    }
}

/// Execute status command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn status(ctx: &Context, phase: Option<Phase>) -> Result<String, PomowatchError> {
    format_snapshot(&ctx.controller(phase).snapshot(), ctx.format)
}

/// Execute config command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn config(ctx: &Context) -> Result<String, PomowatchError> {
    format_config(&ctx.config, &ctx.source, &ctx.durations, ctx.format)
}

/// Execute phases command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn phases(ctx: &Context) -> Result<String, PomowatchError> {
    format_phases(&ctx.durations, ctx.format)
}
