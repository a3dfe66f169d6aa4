//! Command-line interface for pomowatch.

pub mod args;
pub mod commands;
