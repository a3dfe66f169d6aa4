//! pomowatch - A Pomodoro interval timer
//!
//! This crate provides a focus/break session state machine and a terminal
//! front end (interactive TUI and headless countdown) that drives it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod output;
pub mod session;
pub mod theme;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomowatchError;
pub use session::{DurationConfig, Phase, SessionController};
