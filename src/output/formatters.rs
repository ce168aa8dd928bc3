//! Formatting utilities for terminal output

use crate::core::{Feedback, Hint};
use colored::Colorize;

/// Render a guess with each letter on its hint color
#[must_use]
pub fn colored_feedback(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.hints())
        .map(|(letter, hint)| {
            let letter = letter.to_string();
            match hint {
                Hint::Green => letter.black().on_green().bold().to_string(),
                Hint::Yellow => letter.black().on_yellow().bold().to_string(),
                Hint::Grey => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Feedback as its G/Y/A code followed by emoji squares
#[must_use]
pub fn feedback_summary(feedback: &Feedback) -> String {
    format!("{feedback} {}", feedback.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
