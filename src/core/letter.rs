//! Single-letter guesses

use std::fmt;
use thiserror::Error;

/// A normalized guess: one lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

/// Why raw input was not a letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("Guess must be exactly one character, got {0}")]
    InvalidLength(usize),
    #[error("Guess must be an ASCII letter, got '{0}'")]
    NotAlphabetic(char),
}

impl Letter {
    /// Parse raw input into a letter
    ///
    /// Input must be exactly one ASCII alphabetic character. Case is ignored.
    ///
    /// # Errors
    /// Returns `LetterError` for empty input, input longer than one character,
    /// or a character that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse("Q").unwrap().as_char(), 'q');
    /// assert!(Letter::parse("").is_err());
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self(c.to_ascii_lowercase())),
            (Some(c), None) => Err(LetterError::NotAlphabetic(c)),
            _ => Err(LetterError::InvalidLength(input.chars().count())),
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
