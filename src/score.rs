//! Fixed-width score display and session high score
//!
//! Scores render as zero-padded 5-character strings (`7` -> `"00007"`).
//! The width is fixed and the display clamps at 99999, so lexical order on
//! rendered scores equals numeric order; the high-score merge relies on that.

use crate::consts::{SCORE_DIGITS, SCORE_DISPLAY_MAX};

/// Render a score for display, clamped at [`SCORE_DISPLAY_MAX`]
pub fn format_score(score: u32) -> String {
    format!(
        "{:0width$}",
        score.min(SCORE_DISPLAY_MAX),
        width = SCORE_DIGITS
    )
}

/// Render the high-score banner (`"HI 00042"`)
pub fn high_label(high: u32) -> String {
    format!("HI {}", format_score(high))
}

/// Pick the better of two rendered scores.
///
/// Works directly on display strings for hosts that only keep text fields;
/// fixed width plus clamping makes lexical max the numeric max.
pub fn merge_high(current: &str, previous: &str) -> String {
    if current >= previous {
        current.to_string()
    } else {
        previous.to_string()
    }
}
