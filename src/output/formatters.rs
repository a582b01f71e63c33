//! Formatting utilities for terminal output

use crate::core::letter_len;
use crate::engine::ScoreState;

/// Format a word with its length in front, e.g. `(4) silk`
#[must_use]
pub fn word_badge(word: &str) -> String {
    format!("({}) {word}", letter_len(word))
}

/// One-line score summary
#[must_use]
pub fn score_line(score: ScoreState) -> String {
    format!(
        "{} {} · {} {}",
        score.word_count,
        plural(score.word_count, "word", "words"),
        score.letter_count,
        plural(score.letter_count, "letter", "letters"),
    )
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
