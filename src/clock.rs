//! Periodic tick sources for driving a session.
//!
//! The controller has no clock of its own. Front ends own a [`Ticker`], which
//! holds at most one [`TickSource`] at a time and feeds its ticks into the
//! controller. Dropping the ticker releases the source.

use std::time::{Duration, Instant};

use log::debug;

use crate::session::{SessionController, TickOutcome};

/// Length of one tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Something that reports how many ticks have come due since it was last asked.
#[cfg_attr(test, mockall::automock)]
pub trait TickSource {
    /// Number of whole ticks elapsed since the previous call.
    fn ticks_due(&mut self) -> u32;
}

/// Wall-clock tick source with a fixed period.
#[derive(Debug, Clone)]
pub struct Metronome {
    period: Duration,
    anchor: Instant,
}

impl Metronome {
    /// Start counting one-second ticks from now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Start counting ticks of `period` from now.
    #[must_use]
    pub fn with_period(period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "tick period must be non-zero");
        Self {
            period,
            anchor: Instant::now(),
        }
    }

    /// Time left until the next tick comes due.
    #[must_use]
    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.anchor.elapsed())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn due_at(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.anchor);
        let due = (elapsed.as_nanos() / self.period.as_nanos()).min(u128::from(u32::MAX)) as u32;
        // Keep the fractional remainder so ticks do not drift.
        self.anchor += self.period * due;
        due
    }
}

impl Default for Metronome {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for Metronome {
    fn ticks_due(&mut self) -> u32 {
        self.due_at(Instant::now())
    }
}

/// Owner of the single tick source driving a controller.
#[derive(Debug)]
pub struct Ticker<S> {
    source: Option<S>,
}

impl<S> Default for Ticker<S> {
    fn default() -> Self {
        Self { source: None }
    }
}

impl<S: TickSource> Ticker<S> {
    /// Create a ticker with no active source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a source built by `make` unless one is already active.
    ///
    /// Returns true if a new source was created.
    pub fn ensure_with(&mut self, make: impl FnOnce() -> S) -> bool {
        if self.source.is_some() {
            return false;
        }
        self.source = Some(make());
        debug!("tick source acquired");
        true
    }

    /// Drop the active source, if any.
    pub fn release(&mut self) {
        if self.source.take().is_some() {
            debug!("tick source released");
        }
    }

    /// Check if a source is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.source.is_some()
    }

    /// The active source, if any.
    #[must_use]
    pub const fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Feed every due tick into `controller`.
    ///
    /// Returns the outcomes in order; empty when no source is active.
    pub fn pump(&mut self, controller: &mut SessionController) -> Vec<TickOutcome> {
        let Some(source) = self.source.as_mut() else {
            return Vec::new();
        };
        (0..source.ticks_due()).map(|_| controller.tick()).collect()
    }
}

impl Ticker<Metronome> {
    /// Install a one-second metronome unless one is already active.
    pub fn ensure_started(&mut self) -> bool {
        self.ensure_with(Metronome::new)
    }

    /// Time until the active metronome's next tick.
    #[must_use]
    pub fn until_next(&self) -> Option<Duration> {
        self.source().map(Metronome::until_next)
    }
}

impl<S> Drop for Ticker<S> {
    fn drop(&mut self) {
        if self.source.take().is_some() {
            debug!("tick source released on teardown");
        }
    }
}
