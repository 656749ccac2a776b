//! Session state

use crate::core::render_word;
use crate::wordbank::WordEntry;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No word has been selected yet
    Uninitialized,
    /// A word is being guessed
    InRound,
    /// Every word has been played; only a restart continues
    Exhausted,
}

/// Per-session round results
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

impl Statistics {
    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_won + self.rounds_lost
    }

    /// Percentage of finished rounds that were won, 0 when none finished
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played() == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played() as f64 * 100.0
        }
    }
}

/// Everything one player's session knows
///
/// Invariant: `incorrect_count() <= max_incorrect()`. The current entry is only
/// absent before the first round and after the bank is exhausted.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) phase: Phase,
    pub(super) current: Option<WordEntry>,
    pub(super) guessed: BTreeSet<char>,
    pub(super) incorrect: u32,
    pub(super) max_incorrect: u32,
    pub(super) used: FxHashSet<String>,
    pub(super) stats: Statistics,
}

impl GameState {
    /// Fresh, uninitialized state
    #[must_use]
    pub fn new(max_incorrect: u32) -> Self {
        Self {
            phase: Phase::Uninitialized,
            current: None,
            guessed: BTreeSet::new(),
            incorrect: 0,
            max_incorrect,
            used: FxHashSet::default(),
            stats: Statistics::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.current.as_ref().map(|entry| entry.word().text())
    }

    #[must_use]
    pub fn current_clue(&self) -> Option<&str> {
        self.current.as_ref().map(WordEntry::clue)
    }

    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Guessed letters that are not in the current word, alphabetical
    #[must_use]
    pub fn missed_letters(&self) -> Vec<char> {
        let Some(entry) = &self.current else {
            return Vec::new();
        };
        self.guessed
            .iter()
            .copied()
            .filter(|&c| !entry.word().has_letter(c))
            .collect()
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_count(&self) -> u32 {
        self.incorrect
    }

    #[inline]
    #[must_use]
    pub const fn max_incorrect(&self) -> u32 {
        self.max_incorrect
    }

    /// Incorrect guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.max_incorrect.saturating_sub(self.incorrect)
    }

    #[inline]
    #[must_use]
    pub const fn used_words(&self) -> &FxHashSet<String> {
        &self.used
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }

    /// The current word as the player sees it, e.g. `"c _ t"`
    #[must_use]
    pub fn masked_word(&self) -> Option<String> {
        self.current_word()
            .map(|word| render_word(word, &self.guessed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_uninitialized() {
        let state = GameState::new(6);
        assert_eq!(state.phase(), Phase::Uninitialized);
        assert_eq!(state.current_word(), None);
        assert_eq!(state.current_clue(), None);
        assert_eq!(state.masked_word(), None);
        assert_eq!(state.incorrect_count(), 0);
        assert_eq!(state.remaining_attempts(), 6);
        assert!(state.guessed_letters().is_empty());
        assert!(state.used_words().is_empty());
        assert!(state.missed_letters().is_empty());
    }

    #[test]
    fn statistics_win_rate() {
        let none = Statistics::default();
        assert_eq!(none.rounds_played(), 0);
        assert!(none.win_rate().abs() < f64::EPSILON);

        let stats = Statistics {
            rounds_won: 3,
            rounds_lost: 1,
        };
        assert_eq!(stats.rounds_played(), 4);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }
}
