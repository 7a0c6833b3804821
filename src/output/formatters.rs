//! Formatting utilities for terminal output

use crate::config::Language;

/// Keyboard rows for the on-screen keyboard
#[must_use]
pub const fn keyboard_rows(language: Language) -> [&'static str; 3] {
    match language {
        Language::En => ["qwertyuiop", "asdfghjkl", "zxcvbnm"],
        Language::Fr => ["azertyuiop", "qsdfghjklm", "wxcvbn"],
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `1 guess`, `3 guesses`
#[must_use]
pub fn plural_guesses(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}
