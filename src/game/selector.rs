//! Word selection without repetition

use super::GameError;
use crate::wordbank::{WordBank, WordEntry};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Pick an unused entry uniformly at random
///
/// Candidates keep the bank's order, so a seeded RNG gives a reproducible pick.
///
/// # Errors
///
/// Returns `GameError::WordBankExhausted` when every word in the bank is in `used`.
///
/// # Examples
/// ```
/// use hangman::game::{GameError, select_word};
/// use hangman::wordbank::WordBank;
/// use rand::{SeedableRng, rngs::StdRng};
/// use rustc_hash::FxHashSet;
///
/// let bank = WordBank::from_pairs(&[("cat", "feline pet")]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut used = FxHashSet::default();
///
/// assert_eq!(select_word(&bank, &used, &mut rng).unwrap().word().text(), "cat");
///
/// used.insert("cat".to_string());
/// assert_eq!(select_word(&bank, &used, &mut rng), Err(GameError::WordBankExhausted));
/// ```
pub fn select_word<'a, R: Rng + ?Sized>(
    bank: &'a WordBank,
    used: &FxHashSet<String>,
    rng: &mut R,
) -> Result<&'a WordEntry, GameError> {
    let available: Vec<&WordEntry> = bank
        .entries()
        .iter()
        .filter(|entry| !used.contains(entry.word().text()))
        .collect();

    available
        .choose(rng)
        .copied()
        .ok_or(GameError::WordBankExhausted)
}
