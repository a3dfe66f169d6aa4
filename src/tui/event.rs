//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomowatchError;
use crate::tui::app::{App, Screen};

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Switch to the next phase.
    Switch,
    /// Reset the current phase.
    Reset,
    /// Open or close the settings screen.
    Settings,
    /// Move the stepper selection up.
    Up,
    /// Move the stepper selection down.
    Down,
    /// Add a minute to the selected duration.
    Increase,
    /// Remove a minute from the selected duration.
    Decrease,
    /// Show key help.
    Help,
}

/// Key help shown in the status bar.
pub const HELP: &str = "space:start/pause | s:switch | r:reset | e:settings | q:quit";
/// Key help for the settings screen.
pub const SETTINGS_HELP: &str = "j/k:select | h/l or -/+:adjust | e/Esc:back | q:quit";

/// Map a key press to an action for the given screen.
#[must_use]
pub fn map_key(key: KeyEvent, screen: Screen) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match (screen, key.code) {
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Char('e')) | (Screen::Settings, KeyCode::Esc) => Some(Action::Settings),
        (Screen::Timer, KeyCode::Esc) => Some(Action::Quit),
        (_, KeyCode::Char('?')) => Some(Action::Help),

        (Screen::Timer, KeyCode::Char(' ') | KeyCode::Enter) => Some(Action::Toggle),
        (Screen::Timer, KeyCode::Char('s')) => Some(Action::Switch),
        (Screen::Timer, KeyCode::Char('r')) => Some(Action::Reset),

        (Screen::Settings, KeyCode::Char('k') | KeyCode::Up) => Some(Action::Up),
        (Screen::Settings, KeyCode::Char('j') | KeyCode::Down) => Some(Action::Down),
        (Screen::Settings, KeyCode::Char('l' | '+' | '=') | KeyCode::Right) => {
            Some(Action::Increase)
        }
        (Screen::Settings, KeyCode::Char('h' | '-') | KeyCode::Left) => Some(Action::Decrease),

        _ => None,
    }
}

/// Handle terminal events.
///
/// Waits up to the app's poll timeout for input and returns an action to
/// take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &App) -> Result<Option<Action>, PomowatchError> {
    if event::poll(app.poll_timeout())
        .map_err(|e| PomowatchError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| PomowatchError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(map_key(key, app.screen));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_timer_keys() {
        assert_eq!(map_key(key(KeyCode::Char(' ')), Screen::Timer), Some(Action::Toggle));
        assert_eq!(map_key(key(KeyCode::Char('s')), Screen::Timer), Some(Action::Switch));
        assert_eq!(map_key(key(KeyCode::Char('r')), Screen::Timer), Some(Action::Reset));
        assert_eq!(map_key(key(KeyCode::Esc), Screen::Timer), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Char('j')), Screen::Timer), None);
    }

    #[test]
    fn test_settings_keys() {
        assert_eq!(map_key(key(KeyCode::Char('l')), Screen::Settings), Some(Action::Increase));
        assert_eq!(map_key(key(KeyCode::Char('-')), Screen::Settings), Some(Action::Decrease));
        assert_eq!(map_key(key(KeyCode::Down), Screen::Settings), Some(Action::Down));
        assert_eq!(map_key(key(KeyCode::Esc), Screen::Settings), Some(Action::Settings));
        assert_eq!(map_key(key(KeyCode::Char('s')), Screen::Settings), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Screen::Timer), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, Screen::Settings), Some(Action::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release, Screen::Timer), None);
    }
}
