//! Display text formatting rules.
//!
//! Truncation is lossy for display only; the state machine's input string
//! is never mutated by these functions.

/// Maximum number of characters shown before truncation
pub const MAX_DISPLAY_LEN: usize = 12;

/// Marker appended to truncated display text
pub const ELLIPSIS: char = '\u{2026}';

/// Text presented when no input has been entered
pub const EMPTY_DISPLAY: &str = "0";

/// Formats raw input text for the display.
///
/// Empty input reads as "0"; text longer than [`MAX_DISPLAY_LEN`] is cut
/// to its first [`MAX_DISPLAY_LEN`] characters with a single trailing
/// ellipsis.
#[must_use]
pub fn format_display(input: &str) -> String {
    let text = if input.is_empty() {
        EMPTY_DISPLAY
    } else {
        input
    };
    if text.chars().count() > MAX_DISPLAY_LEN {
        let mut truncated: String = text.chars().take(MAX_DISPLAY_LEN).collect();
        truncated.push(ELLIPSIS);
        truncated
    } else {
        text.to_string()
    }
}

/// Formats a computed value as the new input text.
///
/// Integral values render without a fractional part; everything else is
/// limited to ten decimals with trailing zeros trimmed.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    }
}
