//! Result of submitting a guess

/// What happened after a guess was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was not a single letter, or the letter was already guessed
    Ignored,
    /// Letter is in the word; round continues
    Correct,
    /// Letter is not in the word; round continues
    Incorrect,
    /// Guess revealed the last hidden letter
    Won { word: String },
    /// Guess used up the last allowed incorrect attempt
    Lost { word: String },
    /// No round is in progress because the word bank is used up
    Exhausted,
}

impl Outcome {
    /// Check if this outcome finished the round
    #[inline]
    #[must_use]
    pub const fn ends_round(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}
