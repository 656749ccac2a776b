//! Hangman word representation
//!
//! A Word stores a lowercase alphabetic word along with its distinct letters for
//! fast membership checks during guess evaluation.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A playable word, lowercase ASCII letters only
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters, got '{0}'")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Python").unwrap();
    /// assert_eq!(word.text(), "python");
    ///
    /// assert!(Word::new("machine learning").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the word is empty (never true for a validated word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hangman").unwrap();
        assert_eq!(word.text(), "hangman");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CLOUD").unwrap();
        assert_eq!(word.text(), "cloud");

        let word2 = Word::new("ClOuD").unwrap();
        assert_eq!(word2.text(), "cloud");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cl0ud").is_err()); // Number
        assert!(Word::new("machine learning").is_err()); // Space
        assert!(Word::new("data!").is_err()); // Punctuation
        assert!(Word::new("café").is_err()); // Non-ASCII
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("data").unwrap();
        assert!(word.has_letter('d'));
        assert!(word.has_letter('a'));
        assert!(word.has_letter('t'));
        assert!(!word.has_letter('z'));
        assert!(!word.has_letter('D')); // Letters are compared lowercased
    }

    #[test]
    fn word_display() {
        let word = Word::new("network").unwrap();
        assert_eq!(format!("{word}"), "network");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cloud").unwrap();
        let word2 = Word::new("CLOUD").unwrap();
        let word3 = Word::new("data").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
