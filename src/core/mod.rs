//! Core domain types for hangman
//!
//! This module contains the fundamental domain types: validated words, guessed
//! letters, and the pure display derivations built on them.

mod letter;
mod reveal;
mod word;

pub use letter::{Letter, LetterError};
pub use reveal::{PLACEHOLDER, is_revealed, render_word};
pub use word::{Word, WordError};
