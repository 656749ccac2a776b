//! Formatting utilities shared by both front ends

use crate::game::Outcome;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many incorrect guesses are left
#[must_use]
pub fn attempts_bar(remaining: u32, max: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(max), width)
}

/// Uppercase letters separated by spaces, or a dash when there are none
#[must_use]
pub fn format_letters<I: IntoIterator<Item = char>>(letters: I) -> String {
    let joined = letters
        .into_iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// Player-facing text for an outcome
///
/// `guess` is the raw input that produced the outcome.
#[must_use]
pub fn outcome_message(outcome: &Outcome, guess: &str) -> String {
    let letter = guess.trim().to_lowercase();
    match outcome {
        Outcome::Ignored => "Enter a single letter you haven't guessed yet.".to_string(),
        Outcome::Correct => format!("Good guess! '{letter}' is in the word."),
        Outcome::Incorrect => format!("Wrong guess! '{letter}' is not in the word."),
        Outcome::Won { word } => {
            format!("🎉 Congratulations! You've guessed the word: {} 🎉", word.to_uppercase())
        }
        Outcome::Lost { word } => format!("Game over! The word was: {}", word.to_uppercase()),
        Outcome::Exhausted => exhausted_message().to_string(),
    }
}

/// Shown once every word in the bank has been played
#[must_use]
pub const fn exhausted_message() -> &'static str {
    "No more unique words available! Please restart the game."
}
