//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::session::format::format_minutes;
use crate::session::Phase;
use crate::theme;
use crate::tui::app::{App, Screen};
use crate::tui::event::{HELP, SETTINGS_HELP};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timer or settings
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.screen {
        Screen::Timer => render_timer(frame, app, chunks[1]),
        Screen::Settings => render_settings(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

fn accent(phase: Phase) -> Color {
    theme::style(phase).accent.tui()
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let phase = app.controller.phase();
    let style = theme::style(phase);
    let title = format!(" {} {} ", style.icon, phase.label());

    let header = Paragraph::new(title)
        .style(Style::default().fg(accent(phase)).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent(phase))),
        );

    frame.render_widget(header, area);
}

/// Render the countdown and progress gauge.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Countdown
            Constraint::Length(3), // Gauge
        ])
        .split(area);

    let snapshot = app.controller.snapshot();
    let color = accent(snapshot.phase);

    let state = if snapshot.running {
        Span::styled("running", Style::default().fg(Color::Green))
    } else {
        Span::styled("paused", Style::default().fg(Color::Yellow))
    };

    let countdown = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            snapshot.remaining_display.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(state),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(snapshot.progress.clamp(0.0, 1.0))
        .label(format!("{:.0}%", snapshot.progress * 100.0));

    frame.render_widget(gauge, chunks[1]);
}

/// Render the duration steppers.
fn render_settings(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = Phase::ALL
        .iter()
        .enumerate()
        .map(|(i, &phase)| {
            let is_selected = i == app.selected;
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<12}", phase.label()),
                    Style::default().fg(accent(phase)).add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::raw(format!("  - {} +", format_minutes(app.durations().get(phase)))),
            ]);

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(list, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.screen {
        Screen::Timer => HELP,
        Screen::Settings => SETTINGS_HELP,
    };
    let status_text = app.status.as_deref().unwrap_or(help);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::session::{AdvanceMode, DurationConfig};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_timer_screen_shows_countdown() {
        let app = App::new(Rc::new(DurationConfig::new()), AdvanceMode::Manual);
        let text = draw(&app);

        assert!(text.contains("Focus"));
        assert!(text.contains("25:00"));
        assert!(text.contains("paused"));
    }

    #[test]
    fn test_settings_screen_lists_durations() {
        let mut app = App::new(Rc::new(DurationConfig::new()), AdvanceMode::Manual);
        app.toggle_settings();
        let text = draw(&app);

        assert!(text.contains("Settings"));
        assert!(text.contains("Short Break"));
        assert!(text.contains("15 minutes"));
    }
}
