use crate::core::LetterError;
use thiserror::Error;

/// Failures inside the game core
///
/// None of these are fatal: the session maps them onto an [`Outcome`] and
/// keeps running.
///
/// [`Outcome`]: super::Outcome
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Every word in the bank has been played this session
    #[error("No unused words remain in the word bank")]
    WordBankExhausted,

    /// Guess was not a single letter
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] LetterError),

    /// Letter was already guessed this round
    #[error("Letter '{0}' was already guessed")]
    AlreadyGuessed(char),

    #[error("Maximum incorrect guesses must be at least 1, got {0}")]
    InvalidMaxIncorrect(u32),
}
