//! Configurable interval lengths.

use std::cell::Cell;

use serde::{Serialize, Serializer};

use super::Phase;

/// Shortest allowed phase, in seconds.
pub const MIN_SECONDS: u32 = 60;
/// Longest allowed phase, in seconds.
pub const MAX_SECONDS: u32 = 3600;
/// Durations are whole minutes.
pub const STEP_SECONDS: u32 = 60;

const DEFAULT_FOCUS: u32 = 25 * 60;
const DEFAULT_SHORT_BREAK: u32 = 5 * 60;
const DEFAULT_LONG_BREAK: u32 = 15 * 60;

/// Lengths of the three phases, in seconds.
///
/// Every stored value lies in `[MIN_SECONDS, MAX_SECONDS]` and is a multiple
/// of `STEP_SECONDS`. Fields are `Cell`s so a single `Rc<DurationConfig>` can
/// be edited by the settings screen while the controller reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationConfig {
    focus: Cell<u32>,
    short_break: Cell<u32>,
    long_break: Cell<u32>,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            focus: Cell::new(DEFAULT_FOCUS),
            short_break: Cell::new(DEFAULT_SHORT_BREAK),
            long_break: Cell::new(DEFAULT_LONG_BREAK),
        }
    }
}

impl DurationConfig {
    /// Create a config with the default 25/5/15 minute lengths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from minute values, clamping each one.
    #[must_use]
    pub fn from_minutes(focus: i64, short_break: i64, long_break: i64) -> Self {
        let config = Self::default();
        config.set(Phase::Focus, focus.saturating_mul(60));
        config.set(Phase::ShortBreak, short_break.saturating_mul(60));
        config.set(Phase::LongBreak, long_break.saturating_mul(60));
        config
    }

    fn cell(&self, phase: Phase) -> &Cell<u32> {
        match phase {
            Phase::Focus => &self.focus,
            Phase::ShortBreak => &self.short_break,
            Phase::LongBreak => &self.long_break,
        }
    }

    /// Configured length of `phase` in seconds.
    #[must_use]
    pub fn get(&self, phase: Phase) -> u32 {
        self.cell(phase).get()
    }

    /// Store a new length for `phase`.
    ///
    /// Out-of-range input is clamped to `[60, 3600]` and then rounded to the
    /// nearest whole minute; this never fails.
    pub fn set(&self, phase: Phase, seconds: i64) {
        self.cell(phase).set(normalize(seconds));
    }

    /// Step `phase` by whole minutes, as a stepper control would.
    pub fn adjust(&self, phase: Phase, delta_minutes: i64) {
        let current = i64::from(self.get(phase));
        self.set(phase, current.saturating_add(delta_minutes.saturating_mul(60)));
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn normalize(seconds: i64) -> u32 {
    let step = i64::from(STEP_SECONDS);
    let clamped = seconds.clamp(i64::from(MIN_SECONDS), i64::from(MAX_SECONDS));
    let rounded = (clamped + step / 2) / step * step;
    // Bounds are multiples of the step, so rounding stays in range.
    debug_assert!((i64::from(MIN_SECONDS)..=i64::from(MAX_SECONDS)).contains(&rounded));
    rounded as u32
}

impl Serialize for DurationConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("DurationConfig", 3)?;
        s.serialize_field("focus_seconds", &self.get(Phase::Focus))?;
        s.serialize_field("short_break_seconds", &self.get(Phase::ShortBreak))?;
        s.serialize_field("long_break_seconds", &self.get(Phase::LongBreak))?;
        s.end()
    }
}
