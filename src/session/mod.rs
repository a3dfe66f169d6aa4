//! Pomodoro session core.
//!
//! Provides the interval state machine and its settings:
//! - Phases (focus, short break, long break)
//! - Clamped per-phase durations
//! - The session controller with start/pause/reset/switch and per-second ticks
//! - `MM:SS` formatting

pub mod controller;
pub mod durations;
pub mod format;
pub mod phase;

pub use controller::{
    AdvanceMode, SessionController, SessionSnapshot, TickOutcome, DEFAULT_LONG_BREAK_AFTER,
};
pub use durations::DurationConfig;
pub use format::{format_mmss, parse_minutes, render_progress_bar};
pub use phase::Phase;
