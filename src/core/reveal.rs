//! Pure display derivations
//!
//! Nothing here touches game state: each function maps a word and a set of
//! guessed letters to what the player is allowed to see.

use std::collections::BTreeSet;

/// Shown in place of a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Render a word with unguessed letters hidden, letters separated by spaces
///
/// # Examples
/// ```
/// use hangman::core::render_word;
/// use std::collections::BTreeSet;
///
/// let guessed: BTreeSet<char> = ['c', 't'].into_iter().collect();
/// assert_eq!(render_word("cat", &guessed), "c _ t");
/// assert_eq!(render_word("cat", &BTreeSet::new()), "_ _ _");
/// ```
#[must_use]
pub fn render_word(word: &str, guessed: &BTreeSet<char>) -> String {
    let mut result = String::with_capacity(word.len() * 2);

    for (i, letter) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let lower = letter.to_ascii_lowercase();
        result.push(if guessed.contains(&lower) {
            letter
        } else {
            PLACEHOLDER
        });
    }

    result
}

/// Check whether every letter of the word has been guessed
#[must_use]
pub fn is_revealed(word: &str, guessed: &BTreeSet<char>) -> bool {
    word.chars()
        .all(|letter| guessed.contains(&letter.to_ascii_lowercase()))
}
