//! Countdown formatting and duration parsing.

/// Format seconds as `MM:SS`.
///
/// Minutes are not wrapped at 60, so an hour-long phase shows `60:00`.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format whole minutes for settings labels.
#[must_use]
pub fn format_minutes(seconds: u32) -> String {
    let minutes = seconds / 60;
    format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
}

/// Parse a duration string like "25", "25m", "1h", "1h30m" into minutes.
///
/// A bare number is taken as minutes. The total must be positive. Seconds are not accepted since phase
/// lengths are whole minutes.
#[must_use]
pub fn parse_minutes(s: &str) -> Option<i64> {
    let s = s.trim().to_lowercase();
    let mut total: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            if current_num.is_empty() {
                return None;
            }
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            match c {
                'h' => total = total.checked_add(num.checked_mul(60)?)?,
                'm' => total = total.checked_add(num)?,
                _ => return None,
            }
        }
    }

    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total = total.checked_add(num)?;
    }

    if total > 0 {
        Some(total)
    } else {
        None
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
