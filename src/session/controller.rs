//! The phase state machine and countdown clock.
//!
//! `SessionController` owns the current phase, the seconds remaining in it,
//! whether the countdown is running, and a counter of completed short breaks.
//! It never owns a clock: the front end calls [`SessionController::tick`]
//! once per second while the session runs.

use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::format::format_mmss;
use super::{DurationConfig, Phase};

/// Number of short breaks before a long break in auto-advance mode.
pub const DEFAULT_LONG_BREAK_AFTER: u32 = 4;

/// What happens when a running countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum AdvanceMode {
    /// Hold at zero until the user switches phase or resets.
    #[default]
    Manual,
    /// Roll over to the next phase of the Pomodoro cycle and keep running.
    Auto {
        /// Completed short breaks that trigger a long break.
        long_break_after: u32,
    },
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is not running; nothing changed.
    Idle,
    /// One second elapsed.
    Counted,
    /// One second elapsed and the phase reached zero.
    Finished,
    /// Already at zero in manual mode; nothing changed.
    Holding,
    /// Already at zero in auto mode; moved to the given phase.
    Advanced(Phase),
}

/// Serializable view of the controller for renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub label: &'static str,
    pub remaining: u32,
    pub remaining_display: String,
    pub duration: u32,
    pub running: bool,
    pub progress: f64,
    pub cycle_count: u32,
    pub advance: AdvanceMode,
}

/// Pomodoro session state machine.
#[derive(Debug, Clone)]
pub struct SessionController {
    durations: Rc<DurationConfig>,
    mode: AdvanceMode,
    phase: Phase,
    remaining: u32,
    running: bool,
    cycle_count: u32,
}

impl SessionController {
    /// Create a paused controller in the focus phase with its full duration.
    #[must_use]
    pub fn new(durations: Rc<DurationConfig>) -> Self {
        Self::with_mode(durations, AdvanceMode::Manual)
    }

    /// Create a controller with an explicit advance mode.
    #[must_use]
    pub fn with_mode(durations: Rc<DurationConfig>, mode: AdvanceMode) -> Self {
        let remaining = durations.get(Phase::Focus);
        Self {
            durations,
            mode,
            phase: Phase::Focus,
            remaining,
            running: false,
            cycle_count: 0,
        }
    }

    /// Start or resume the countdown.
    ///
    /// A controller sitting at zero is reloaded with the current phase's
    /// duration first. Calling this while running has no effect.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        if self.remaining == 0 {
            self.remaining = self.duration();
        }
        self.running = true;
        debug!("started {} with {}s remaining", self.phase, self.remaining);
    }

    /// Pause the countdown. `remaining` is left as is.
    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            debug!("paused {} at {}s", self.phase, self.remaining);
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        if self.remaining > 0 {
            self.remaining -= 1;
            return if self.remaining == 0 {
                debug!("{} finished", self.phase);
                TickOutcome::Finished
            } else {
                TickOutcome::Counted
            };
        }

        match self.mode {
            AdvanceMode::Manual => TickOutcome::Holding,
            AdvanceMode::Auto { long_break_after } => {
                let next = self.auto_next(long_break_after);
                self.enter(next);
                TickOutcome::Advanced(next)
            }
        }
    }

    fn auto_next(&mut self, long_break_after: u32) -> Phase {
        match self.phase {
            Phase::Focus => Phase::ShortBreak,
            Phase::ShortBreak => {
                self.cycle_count += 1;
                if self.cycle_count >= long_break_after {
                    Phase::LongBreak
                } else {
                    Phase::Focus
                }
            }
            Phase::LongBreak => {
                self.cycle_count = 0;
                Phase::Focus
            }
        }
    }

    /// Move to the next phase in the manual cycle.
    ///
    /// Focus, Short Break, Long Break, then back to Focus. A running
    /// countdown is stopped rather than carried into the new phase.
    pub fn switch_phase(&mut self) {
        self.pause();
        self.enter(self.phase.next());
    }

    /// Stop the countdown and reload the current phase's full duration.
    pub fn reset(&mut self) {
        self.pause();
        self.remaining = self.duration();
        debug!("reset {} to {}s", self.phase, self.remaining);
    }

    /// Reload `remaining` after a settings edit, unless a countdown is running.
    pub fn refresh_duration(&mut self) {
        if !self.running {
            self.remaining = self.duration();
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!("{} -> {}", self.phase, phase);
        self.phase = phase;
        self.remaining = self.duration();
    }

    /// Fraction of the current phase already elapsed, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let duration = self.duration();
        debug_assert!(duration > 0, "phase durations are never zero");
        if duration == 0 {
            return 0.0;
        }
        // The duration may have been shortened under a running countdown.
        (1.0 - f64::from(self.remaining) / f64::from(duration)).clamp(0.0, 1.0)
    }

    /// Configured length of the current phase.
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.durations.get(self.phase)
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    #[must_use]
    pub const fn mode(&self) -> AdvanceMode {
        self.mode
    }

    /// The shared duration settings this controller reads.
    #[must_use]
    pub fn durations(&self) -> &Rc<DurationConfig> {
        &self.durations
    }

    /// Capture the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            label: self.phase.label(),
            remaining: self.remaining,
            remaining_display: format_mmss(self.remaining),
            duration: self.duration(),
            running: self.running,
            progress: self.progress(),
            cycle_count: self.cycle_count,
            advance: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SessionController {
        SessionController::new(Rc::new(DurationConfig::new()))
    }

    fn auto_controller(long_break_after: u32) -> SessionController {
        SessionController::with_mode(
            Rc::new(DurationConfig::new()),
            AdvanceMode::Auto { long_break_after },
        )
    }

    fn run_down(c: &mut SessionController) {
        while c.remaining() > 0 {
            c.tick();
        }
    }

    #[test]
    fn test_new_controller() {
        let c = controller();
        assert_eq!(c.phase(), Phase::Focus);
        assert_eq!(c.remaining(), 1500);
        assert!(!c.is_running());
        assert_eq!(c.cycle_count(), 0);
        assert_eq!(c.mode(), AdvanceMode::Manual);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut once = controller();
        once.start();

        let mut twice = controller();
        twice.start();
        twice.start();

        assert!(twice.is_running());
        assert_eq!(once.remaining(), twice.remaining());
        assert_eq!(once.phase(), twice.phase());
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut c = controller();
        c.start();
        c.tick();
        c.pause();
        c.pause();
        assert!(!c.is_running());
        assert_eq!(c.remaining(), 1499);
    }

    #[test]
    fn test_start_reloads_when_at_zero() {
        let mut c = controller();
        c.start();
        run_down(&mut c);
        c.pause();
        assert_eq!(c.remaining(), 0);

        c.start();
        assert!(c.is_running());
        assert_eq!(c.remaining(), 1500);
    }

    #[test]
    fn test_start_keeps_partial_countdown() {
        let mut c = controller();
        c.start();
        for _ in 0..10 {
            c.tick();
        }
        c.pause();
        c.start();
        assert_eq!(c.remaining(), 1490);
    }

    #[test]
    fn test_tick_is_noop_when_paused() {
        let mut c = controller();
        assert_eq!(c.tick(), TickOutcome::Idle);
        assert_eq!(c.remaining(), 1500);
    }

    #[test]
    fn test_tick_outcomes() {
        let durations = Rc::new(DurationConfig::new());
        durations.set(Phase::Focus, 60);
        let mut c = SessionController::new(durations);
        c.start();

        for _ in 0..59 {
            assert_eq!(c.tick(), TickOutcome::Counted);
        }
        assert_eq!(c.tick(), TickOutcome::Finished);
        assert_eq!(c.tick(), TickOutcome::Holding);
    }

    #[test]
    fn test_full_focus_run_in_manual_mode() {
        let mut c = controller();
        c.start();
        for _ in 0..1500 {
            c.tick();
        }

        assert_eq!(c.remaining(), 0);
        assert!((c.progress() - 1.0).abs() < f64::EPSILON);
        assert!(c.is_running());
        assert_eq!(c.phase(), Phase::Focus);

        c.tick();
        c.tick();
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.phase(), Phase::Focus);
    }

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let durations = Rc::new(DurationConfig::new());
        durations.set(Phase::Focus, 120);
        let mut c = SessionController::new(durations);
        c.start();

        let mut last = c.progress();
        for _ in 0..130 {
            c.tick();
            let p = c.progress();
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn test_progress_clamped_when_duration_shrinks() {
        let durations = Rc::new(DurationConfig::new());
        let mut c = SessionController::new(Rc::clone(&durations));
        c.start();
        c.tick();

        durations.set(Phase::Focus, 60);
        assert_eq!(c.remaining(), 1499);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_switch_phase_cycles_and_stops() {
        let mut c = controller();

        c.switch_phase();
        assert_eq!(c.phase(), Phase::ShortBreak);
        assert_eq!(c.remaining(), 300);
        assert!(!c.is_running());

        c.start();
        c.switch_phase();
        assert_eq!(c.phase(), Phase::LongBreak);
        assert_eq!(c.remaining(), 900);
        assert!(!c.is_running());

        c.switch_phase();
        assert_eq!(c.phase(), Phase::Focus);
        assert_eq!(c.remaining(), 1500);
    }

    #[test]
    fn test_switch_phase_while_running() {
        let mut c = controller();
        c.start();
        c.tick();
        c.switch_phase();

        assert!(!c.is_running());
        assert_eq!(c.phase(), Phase::ShortBreak);
        assert_eq!(c.remaining(), 300);
    }

    #[test]
    fn test_reset_restores_duration() {
        let mut c = controller();
        c.switch_phase();
        c.start();
        for _ in 0..42 {
            c.tick();
        }
        c.reset();

        assert!(!c.is_running());
        assert_eq!(c.phase(), Phase::ShortBreak);
        assert_eq!(c.remaining(), 300);
    }

    #[test]
    fn test_reset_uses_latest_config() {
        let durations = Rc::new(DurationConfig::new());
        let mut c = SessionController::new(Rc::clone(&durations));
        durations.set(Phase::Focus, 600);
        c.reset();
        assert_eq!(c.remaining(), 600);
    }

    #[test]
    fn test_refresh_duration_respects_running_countdown() {
        let durations = Rc::new(DurationConfig::new());
        let mut c = SessionController::new(Rc::clone(&durations));

        durations.set(Phase::Focus, 1200);
        c.refresh_duration();
        assert_eq!(c.remaining(), 1200);

        c.start();
        c.tick();
        durations.set(Phase::Focus, 600);
        c.refresh_duration();
        assert_eq!(c.remaining(), 1199);
    }

    #[test]
    fn test_auto_advance_focus_to_short_break() {
        let mut c = auto_controller(4);
        c.start();
        run_down(&mut c);

        assert_eq!(c.tick(), TickOutcome::Advanced(Phase::ShortBreak));
        assert_eq!(c.phase(), Phase::ShortBreak);
        assert_eq!(c.remaining(), 300);
        assert!(c.is_running());
    }

    #[test]
    fn test_auto_advance_full_cycle() {
        let mut c = auto_controller(4);
        c.start();

        let mut phases = Vec::new();
        while phases.len() < 9 {
            if let TickOutcome::Advanced(p) = c.tick() {
                phases.push(p);
            }
        }

        assert_eq!(
            phases,
            vec![
                Phase::ShortBreak,
                Phase::Focus,
                Phase::ShortBreak,
                Phase::Focus,
                Phase::ShortBreak,
                Phase::Focus,
                Phase::ShortBreak,
                Phase::LongBreak,
                Phase::Focus,
            ]
        );
        assert_eq!(c.cycle_count(), 0);
    }

    #[test]
    fn test_auto_advance_counts_short_breaks() {
        let mut c = auto_controller(4);
        c.start();
        run_down(&mut c);
        c.tick(); // -> short break
        run_down(&mut c);
        c.tick(); // -> focus
        assert_eq!(c.cycle_count(), 1);
        assert_eq!(c.phase(), Phase::Focus);
    }

    #[test]
    fn test_switch_phase_leaves_cycle_count() {
        let mut c = auto_controller(2);
        c.start();
        run_down(&mut c);
        c.tick();
        run_down(&mut c);
        c.tick();
        assert_eq!(c.cycle_count(), 1);

        c.switch_phase();
        assert_eq!(c.cycle_count(), 1);
    }

    #[test]
    fn test_snapshot() {
        let mut c = controller();
        c.start();
        for _ in 0..125 {
            c.tick();
        }
        let snap = c.snapshot();

        assert_eq!(snap.phase, Phase::Focus);
        assert_eq!(snap.label, "Focus");
        assert_eq!(snap.remaining, 1375);
        assert_eq!(snap.remaining_display, "22:55");
        assert_eq!(snap.duration, 1500);
        assert!(snap.running);
        assert_eq!(snap.advance, AdvanceMode::Manual);
    }
}
