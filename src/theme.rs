//! Cosmetic metadata for phases.
//!
//! A lookup table keyed by [`Phase`]; the session controller never reads it.

use serde::Serialize;

use crate::session::Phase;

/// Accent color family of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Green,
    Blue,
}

impl Accent {
    /// Color for the TUI.
    #[must_use]
    pub const fn tui(self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Red => Color::Red,
            Self::Green => Color::Green,
            Self::Blue => Color::Blue,
        }
    }

    /// Color for plain terminal output.
    #[must_use]
    pub const fn term(self) -> colored::Color {
        match self {
            Self::Red => colored::Color::Red,
            Self::Green => colored::Color::Green,
            Self::Blue => colored::Color::Blue,
        }
    }
}

/// Display metadata for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseStyle {
    pub accent: Accent,
    /// Glyph shown next to the label.
    pub icon: &'static str,
    /// Plain-text name of the icon, for JSON output.
    pub icon_name: &'static str,
}

/// Look up the style of `phase`.
#[must_use]
pub const fn style(phase: Phase) -> PhaseStyle {
    match phase {
        Phase::Focus => PhaseStyle {
            accent: Accent::Red,
            icon: "🧠",
            icon_name: "brain",
        },
        Phase::ShortBreak => PhaseStyle {
            accent: Accent::Green,
            icon: "☕",
            icon_name: "cup",
        },
        Phase::LongBreak => PhaseStyle {
            accent: Accent::Blue,
            icon: "🛏",
            icon_name: "bed",
        },
    }
}
