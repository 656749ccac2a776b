//! Word bank loading utilities
//!
//! Reads `word: clue` lines from a file. Blank lines and `#` comments are
//! ignored; malformed lines are skipped with a warning.

use super::{BankError, WordBank, WordEntry};
use log::warn;
use std::fs;
use std::path::Path;

/// Load a word bank from a file
///
/// # Errors
///
/// Returns `BankError::Io` if the file cannot be read, or a bank invariant error
/// if no valid entries remain or a word appears twice.
///
/// # Examples
/// ```no_run
/// use hangman::wordbank::loader::load_from_file;
///
/// let bank = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, BankError> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parse word bank text
///
/// # Errors
///
/// Returns a bank invariant error if no valid entries remain or a word appears
/// twice.
///
/// # Examples
/// ```
/// use hangman::wordbank::loader::parse_str;
///
/// let bank = parse_str("# pets\ncat: feline pet\ndog: canine pet\n").unwrap();
/// assert_eq!(bank.len(), 2);
/// ```
pub fn parse_str(content: &str) -> Result<WordBank, BankError> {
    let entries = content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let Some((word, clue)) = trimmed.split_once(':') else {
                warn!("Skipping line {}: expected 'word: clue'", index + 1);
                return None;
            };

            match WordEntry::new(word.trim(), clue) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping line {}: {e}", index + 1);
                    None
                }
            }
        })
        .collect();

    WordBank::new(entries)
}
