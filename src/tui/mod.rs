//! Terminal User Interface (TUI) for pomowatch.
//!
//! The interactive front end for a session: it owns the tick source, renders
//! the controller once per loop, and edits durations through the settings
//! screen. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Screen};
pub use event::{map_key, Action};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomowatchError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(mut app: App) -> Result<(), PomowatchError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomowatchError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomowatchError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomowatchError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    // Release the tick source before the terminal goes away
    drop(app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomowatchError> {
    while !app.should_quit {
        app.on_tick();

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomowatchError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            dispatch(app, action);
        }
    }

    Ok(())
}

/// Apply an action to the app.
pub fn dispatch(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::Toggle => app.toggle_running(),
        Action::Switch => app.switch_phase(),
        Action::Reset => app.reset(),
        Action::Settings => app.toggle_settings(),
        Action::Up => app.select_previous(),
        Action::Down => app.select_next(),
        Action::Increase => app.adjust_selected(1),
        Action::Decrease => app.adjust_selected(-1),
        Action::Help => {
            app.status = Some(
                match app.screen {
                    Screen::Timer => event::HELP,
                    Screen::Settings => event::SETTINGS_HELP,
                }
                .to_string(),
            );
        }
    }
}
