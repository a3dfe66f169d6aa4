//! The three interval kinds a session cycles through.

use serde::{Deserialize, Serialize};

/// Interval kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Working interval
    #[default]
    Focus,
    /// Short rest between focus intervals
    ShortBreak,
    /// Longer rest after several focus intervals
    LongBreak,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// The phase that follows this one in the manual cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::ShortBreak,
            Self::ShortBreak => Self::LongBreak,
            Self::LongBreak => Self::Focus,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Parse a phase from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "f" | "pomodoro" | "pomo" => Some(Self::Focus),
            "short" | "short-break" | "short_break" | "sb" => Some(Self::ShortBreak),
            "long" | "long-break" | "long_break" | "lb" => Some(Self::LongBreak),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Phase::Focus.label(), "Focus");
        assert_eq!(Phase::ShortBreak.label(), "Short Break");
        assert_eq!(Phase::LongBreak.label(), "Long Break");
        assert_eq!(Phase::LongBreak.to_string(), "Long Break");
    }

    #[test]
    fn test_next_cycles_through_all_phases() {
        assert_eq!(Phase::Focus.next(), Phase::ShortBreak);
        assert_eq!(Phase::ShortBreak.next(), Phase::LongBreak);
        assert_eq!(Phase::LongBreak.next(), Phase::Focus);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Phase::parse("focus"), Some(Phase::Focus));
        assert_eq!(Phase::parse(" SB "), Some(Phase::ShortBreak));
        assert_eq!(Phase::parse("long-break"), Some(Phase::LongBreak));
        assert_eq!(Phase::parse("nap"), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Phase::ShortBreak).unwrap();
        assert_eq!(json, "\"short_break\"");
    }
}
