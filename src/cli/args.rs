use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::session::Phase;

#[derive(Parser)]
#[command(name = "pomowatch")]
#[command(about = "A Pomodoro interval timer for the terminal")]
#[command(long_about = "pomowatch - A Pomodoro interval timer

Cycles between focus, short break and long break phases with configurable
lengths. Runs as an interactive terminal UI by default.

QUICK START:
  pomowatch                   Open the interactive timer
  pomowatch run               Count down one focus phase in the terminal
  pomowatch run --phase sb    Count down a short break
  pomowatch --focus 50m       Use a 50-minute focus phase

CONFIGURATION:
  Defaults are read from ~/.pomowatch/config.yaml if it exists.
  Command-line flags override the file.

For more information on a specific command, run:
  pomowatch <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the config file's `general.default_output`.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to an alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Session overrides shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Focus length (e.g., 25, 25m, 1h). Clamped to 1-60 minutes.
    #[arg(long, global = true, value_parser = parse_minutes_arg)]
    pub focus: Option<i64>,

    /// Short break length (e.g., 5, 5m). Clamped to 1-60 minutes.
    #[arg(long, global = true, value_parser = parse_minutes_arg)]
    pub short_break: Option<i64>,

    /// Long break length (e.g., 15, 15m). Clamped to 1-60 minutes.
    #[arg(long, global = true, value_parser = parse_minutes_arg)]
    pub long_break: Option<i64>,

    /// Roll over to the next phase automatically when one finishes
    #[arg(long, global = true)]
    pub auto_advance: bool,

    /// Short breaks before a long break in auto-advance mode
    #[arg(long, global = true, value_name = "N")]
    pub long_break_after: Option<u32>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive timer (default)
    ///
    /// Keys:
    ///   space    start / pause
    ///   s        switch to the next phase
    ///   r        reset the current phase
    ///   e        edit durations
    ///   q        quit
    #[command(alias = "ui")]
    Tui,

    /// Count down one phase in the terminal
    ///
    /// Prints a single updating line with the remaining time and a progress
    /// bar. Exits when the phase reaches zero. With --auto-advance, keeps
    /// cycling until --cycles phases have finished.
    ///
    /// # Examples
    ///
    ///   pomowatch run
    ///   pomowatch run --phase long
    ///   pomowatch --auto-advance run --cycles 8
    #[command(alias = "r")]
    Run(RunArgs),

    /// Drive a session without a clock and print the result
    ///
    /// Applies the given number of one-second ticks instantly. Useful for
    /// scripting and for checking how settings play out.
    ///
    /// # Examples
    ///
    ///   pomowatch simulate --ticks 1500
    ///   pomowatch simulate --ticks 10 --switch-after 5
    ///   pomowatch --auto-advance simulate --ticks 2000 -o json
    Simulate(SimulateArgs),

    /// Show the initial session state for the current settings
    Status {
        /// Phase to show
        #[arg(long, short = 'p', value_parser = parse_phase_arg)]
        phase: Option<Phase>,
    },

    /// Show the effective configuration
    Config,

    /// List phases with their durations, colors and icons
    Phases,

    /// Generate shell completions
    ///
    /// Example: pomowatch completions bash > ~/.bash_completion.d/pomowatch
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Phase to count down (focus, short, long)
    #[arg(long, short = 'p', value_parser = parse_phase_arg)]
    pub phase: Option<Phase>,

    /// Phases to finish before exiting in auto-advance mode
    #[arg(long, short = 'c', default_value_t = 1)]
    pub cycles: u32,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Number of one-second ticks to apply
    #[arg(long, short = 't')]
    pub ticks: u32,

    /// Phase to start in (focus, short, long)
    #[arg(long, short = 'p', value_parser = parse_phase_arg)]
    pub phase: Option<Phase>,

    /// Switch phase after this many ticks
    #[arg(long, value_name = "N")]
    pub switch_after: Option<u32>,

    /// Leave the session paused, so ticks have no effect
    #[arg(long)]
    pub paused: bool,
}

fn parse_phase_arg(s: &str) -> Result<Phase, String> {
    Phase::parse(s).ok_or_else(|| format!("unknown phase '{s}' (expected focus, short or long)"))
}

fn parse_minutes_arg(s: &str) -> Result<i64, String> {
    crate::session::parse_minutes(s).ok_or_else(|| format!("invalid duration '{s}'"))
}
