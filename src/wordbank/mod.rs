//! Word bank for hangman
//!
//! A fixed, read-only collection of playable words and their clues. The default
//! bank is embedded at build time; custom banks can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::io;
use thiserror::Error;

/// Error type for building a word bank
#[derive(Debug, Error)]
pub enum BankError {
    #[error("Word bank must contain at least one entry")]
    Empty,
    #[error("Word '{0}' appears more than once")]
    DuplicateWord(String),
    #[error("Clue for '{0}' is empty")]
    EmptyClue(String),
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("Failed to read word bank: {0}")]
    Io(#[from] io::Error),
}

/// A playable word and the clue shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: Word,
    clue: String,
}

impl WordEntry {
    /// Create an entry from raw word and clue text
    ///
    /// # Errors
    /// Returns `BankError::InvalidWord` if the word is not alphabetic, or
    /// `BankError::EmptyClue` if the clue is blank.
    pub fn new(word: &str, clue: &str) -> Result<Self, BankError> {
        let word = Word::new(word)?;
        let clue = clue.trim();
        if clue.is_empty() {
            return Err(BankError::EmptyClue(word.text().to_string()));
        }

        Ok(Self {
            word,
            clue: clue.to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }
}

/// Ordered, duplicate-free collection of word entries
///
/// Order is preserved from construction so seeded selection is reproducible.
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Vec<WordEntry>,
}

impl WordBank {
    /// Build a bank from entries
    ///
    /// # Errors
    /// Returns `BankError::Empty` for no entries and `BankError::DuplicateWord`
    /// if two entries share a word.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, BankError> {
        if entries.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = FxHashSet::default();
        for entry in &entries {
            if !seen.insert(entry.word.text()) {
                return Err(BankError::DuplicateWord(entry.word.text().to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Build a bank from `(word, clue)` pairs
    ///
    /// # Errors
    /// Returns the first `BankError` hit by any entry or by the bank invariants.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordbank::WordBank;
    ///
    /// let bank = WordBank::from_pairs(&[("cat", "feline pet")]).unwrap();
    /// assert_eq!(bank.len(), 1);
    /// assert!(WordBank::from_pairs(&[]).is_err());
    /// ```
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, BankError> {
        let entries = pairs
            .iter()
            .map(|&(word, clue)| WordEntry::new(word, clue))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The default bank compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded data is malformed.
    pub fn embedded() -> Result<Self, BankError> {
        Self::from_pairs(WORDS)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a constructed bank
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.word.text() == word)
    }

    /// Check if the bank holds a word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_bank_is_valid() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(bank.len(), WORDS_COUNT);
        assert_eq!(WORDS_COUNT, 20);
    }

    #[test]
    fn embedded_words_are_lowercase_alphabetic() {
        for &(word, clue) in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(!clue.trim().is_empty(), "Word '{word}' has an empty clue");
        }
    }

    #[test]
    fn embedded_bank_has_known_entries() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(
            bank.get("cloud").map(WordEntry::clue),
            Some("A system of remote servers hosted on the Internet.")
        );
        assert!(bank.contains("python"));
        assert!(!bank.contains("machine learning"));
    }

    #[test]
    fn entry_normalizes_word_and_trims_clue() {
        let entry = WordEntry::new("CAT", "  feline pet ").unwrap();
        assert_eq!(entry.word().text(), "cat");
        assert_eq!(entry.clue(), "feline pet");
    }

    #[test]
    fn entry_rejects_empty_clue() {
        assert!(matches!(
            WordEntry::new("cat", "   "),
            Err(BankError::EmptyClue(word)) if word == "cat"
        ));
    }

    #[test]
    fn entry_rejects_invalid_word() {
        assert!(matches!(
            WordEntry::new("cat5", "clue"),
            Err(BankError::InvalidWord(_))
        ));
    }

    #[test]
    fn bank_rejects_empty() {
        assert!(matches!(WordBank::new(Vec::new()), Err(BankError::Empty)));
    }

    #[test]
    fn bank_rejects_duplicates() {
        let result = WordBank::from_pairs(&[("cat", "one"), ("dog", "two"), ("CAT", "three")]);
        assert!(matches!(result, Err(BankError::DuplicateWord(word)) if word == "cat"));
    }

    #[test]
    fn bank_preserves_order() {
        let bank = WordBank::from_pairs(&[("ox", "a"), ("cat", "b"), ("dog", "c")]).unwrap();
        let words: Vec<&str> = bank.entries().iter().map(|e| e.word().text()).collect();
        assert_eq!(words, ["ox", "cat", "dog"]);
    }
}
