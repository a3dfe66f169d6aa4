//! Application state for the TUI.

use std::rc::Rc;
use std::time::Duration;

use log::info;

use crate::clock::{Metronome, Ticker};
use crate::session::{AdvanceMode, DurationConfig, Phase, SessionController, TickOutcome};

/// Longest wait between input polls.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Which panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Countdown view.
    Timer,
    /// Duration steppers.
    Settings,
}

/// Application state.
pub struct App {
    /// The session being displayed.
    pub controller: SessionController,
    /// Settings edited by the steppers; shared with the controller.
    durations: Rc<DurationConfig>,
    /// The one tick source for this view. Dropped with the app.
    ticker: Ticker<Metronome>,
    /// Current panel.
    pub screen: Screen,
    /// Highlighted stepper on the settings screen.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(durations: Rc<DurationConfig>, mode: AdvanceMode) -> Self {
        Self::with_controller(SessionController::with_mode(Rc::clone(&durations), mode))
    }

    /// Wrap an existing controller.
    #[must_use]
    pub fn with_controller(controller: SessionController) -> Self {
        Self {
            durations: Rc::clone(controller.durations()),
            controller,
            ticker: Ticker::new(),
            screen: Screen::Timer,
            selected: 0,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Start or pause the countdown.
    pub fn toggle_running(&mut self) {
        if self.controller.is_running() {
            self.controller.pause();
            self.ticker.release();
            self.status = Some("Paused".to_string());
        } else {
            self.controller.start();
            self.ticker.ensure_started();
            self.status = None;
        }
    }

    /// Move to the next phase; the countdown stops.
    pub fn switch_phase(&mut self) {
        self.controller.switch_phase();
        self.ticker.release();
        self.status = Some(format!("Switched to {}", self.controller.phase()));
    }

    /// Restart the current phase from its full length.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.ticker.release();
        self.status = Some(format!("Reset {}", self.controller.phase()));
    }

    /// Feed elapsed ticks into the controller.
    pub fn on_tick(&mut self) {
        let outcomes = self.ticker.pump(&mut self.controller);
        self.apply(&outcomes);
    }

    /// Update the status line for tick outcomes.
    pub fn apply(&mut self, outcomes: &[TickOutcome]) {
        for outcome in outcomes {
            match outcome {
                TickOutcome::Finished => {
                    info!("{} finished", self.controller.phase());
                    if self.controller.mode() == AdvanceMode::Manual {
                        self.status = Some(format!(
                            "{} finished - press s for the next phase",
                            self.controller.phase()
                        ));
                    }
                }
                TickOutcome::Advanced(phase) => {
                    self.status = Some(format!("Now: {phase}"));
                }
                TickOutcome::Idle | TickOutcome::Counted | TickOutcome::Holding => {}
            }
        }
    }

    /// How long the event loop may block waiting for input.
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        self.ticker.until_next().map_or(MAX_POLL, |d| d.min(MAX_POLL))
    }

    /// Whether a tick source is active.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Show or hide the settings screen.
    pub fn toggle_settings(&mut self) {
        self.screen = match self.screen {
            Screen::Timer => Screen::Settings,
            Screen::Settings => Screen::Timer,
        };
        self.status = None;
    }

    /// The phase whose stepper is highlighted.
    #[must_use]
    pub fn selected_phase(&self) -> Phase {
        Phase::ALL[self.selected.min(Phase::ALL.len() - 1)]
    }

    /// Move stepper selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move stepper selection down.
    pub fn select_next(&mut self) {
        if self.selected < Phase::ALL.len() - 1 {
            self.selected += 1;
        }
    }

    /// Step the highlighted duration by whole minutes.
    ///
    /// The displayed countdown follows the new length unless it is running.
    pub fn adjust_selected(&mut self, delta_minutes: i64) {
        let phase = self.selected_phase();
        self.durations.adjust(phase, delta_minutes);
        if phase == self.controller.phase() {
            self.controller.refresh_duration();
        }
        self.status = Some(format!(
            "{}: {} min",
            phase,
            self.durations.get(phase) / 60
        ));
    }

    /// Duration settings shown on the settings screen.
    #[must_use]
    pub fn durations(&self) -> &DurationConfig {
        &self.durations
    }
}
