//! Guess evaluation and round progression

use super::{GameError, GameState, Outcome, Phase, select_word};
use crate::core::{Letter, is_revealed};
use crate::wordbank::WordBank;
use log::{debug, info};
use rand::Rng;

/// Default number of incorrect guesses allowed per round
pub const MAX_INCORRECT: u32 = 6;

/// Session settings, fixed for the session's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_incorrect: u32,
}

impl GameConfig {
    /// # Errors
    /// Returns `GameError::InvalidMaxIncorrect` if `max_incorrect` is 0.
    pub fn new(max_incorrect: u32) -> Result<Self, GameError> {
        if max_incorrect == 0 {
            return Err(GameError::InvalidMaxIncorrect(max_incorrect));
        }
        Ok(Self { max_incorrect })
    }

    #[inline]
    #[must_use]
    pub const fn max_incorrect(&self) -> u32 {
        self.max_incorrect
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_incorrect: MAX_INCORRECT,
        }
    }
}

/// One player's game: the state plus the bank and randomness it draws from
pub struct Session<'a, R> {
    bank: &'a WordBank,
    config: GameConfig,
    rng: R,
    state: GameState,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Start a session with an empty used set and the first word selected
    ///
    /// # Examples
    /// ```
    /// use hangman::game::{GameConfig, Outcome, Session};
    /// use hangman::wordbank::WordBank;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let bank = WordBank::from_pairs(&[("cat", "feline pet")]).unwrap();
    /// let mut session = Session::new(&bank, GameConfig::default(), StdRng::seed_from_u64(0));
    ///
    /// assert_eq!(session.state().current_clue(), Some("feline pet"));
    /// assert_eq!(session.submit_guess("c"), Outcome::Correct);
    /// assert_eq!(session.submit_guess("z"), Outcome::Incorrect);
    /// assert_eq!(session.state().masked_word().as_deref(), Some("c _ _"));
    /// ```
    pub fn new(bank: &'a WordBank, config: GameConfig, rng: R) -> Self {
        let mut session = Self {
            bank,
            config,
            rng,
            state: GameState::new(config.max_incorrect()),
        };
        session.begin_round();
        session
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }

    /// Words not yet used this session, the current one included
    #[must_use]
    pub fn words_remaining(&self) -> usize {
        self.bank
            .entries()
            .iter()
            .filter(|entry| !self.state.used.contains(entry.word().text()))
            .count()
    }

    /// Evaluate one guess
    ///
    /// Invalid or repeated input is [`Outcome::Ignored`] and changes nothing.
    /// A win is checked before a loss. When a round ends the next word is
    /// selected immediately, or the session becomes [`Phase::Exhausted`].
    pub fn submit_guess(&mut self, input: &str) -> Outcome {
        let letter = match self.accept_guess(input) {
            Ok(letter) => letter,
            Err(GameError::WordBankExhausted) => {
                debug!("Guess {input:?} rejected: word bank exhausted");
                return Outcome::Exhausted;
            }
            Err(e) => {
                debug!("Guess {input:?} ignored: {e}");
                return Outcome::Ignored;
            }
        };

        let Some(entry) = &self.state.current else {
            return Outcome::Exhausted;
        };
        let word = entry.word().text().to_string();
        let hit = entry.word().has_letter(letter.as_char());

        self.state.guessed.insert(letter.as_char());
        if !hit {
            self.state.incorrect += 1;
        }
        debug!(
            "Guess '{letter}' {} ({}/{} incorrect)",
            if hit { "correct" } else { "incorrect" },
            self.state.incorrect,
            self.state.max_incorrect
        );

        // Win before loss
        if is_revealed(&word, &self.state.guessed) {
            self.state.stats.rounds_won += 1;
            info!("Round won: {word}");
            self.finish_round(&word);
            Outcome::Won { word }
        } else if self.state.incorrect >= self.state.max_incorrect {
            self.state.stats.rounds_lost += 1;
            info!("Round lost: {word}");
            self.finish_round(&word);
            Outcome::Lost { word }
        } else if hit {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }

    /// Throw away all state, including used words and statistics, and start over
    pub fn restart(&mut self) {
        info!(
            "Restarting session after {} rounds",
            self.state.stats.rounds_played()
        );
        self.state = GameState::new(self.config.max_incorrect());
        self.begin_round();
    }

    fn accept_guess(&self, input: &str) -> Result<Letter, GameError> {
        if self.state.current.is_none() {
            return Err(GameError::WordBankExhausted);
        }

        let letter = Letter::parse(input)?;
        if self.state.guessed.contains(&letter.as_char()) {
            return Err(GameError::AlreadyGuessed(letter.as_char()));
        }

        Ok(letter)
    }

    fn finish_round(&mut self, word: &str) {
        self.state.used.insert(word.to_string());
        self.state.guessed.clear();
        self.state.incorrect = 0;
        self.begin_round();
    }

    fn begin_round(&mut self) {
        match select_word(self.bank, &self.state.used, &mut self.rng) {
            Ok(entry) => {
                debug!("New round: {} letters", entry.word().len());
                self.state.current = Some(entry.clone());
                self.state.phase = Phase::InRound;
            }
            Err(e) => {
                info!("{e} after {} words", self.state.used.len());
                self.state.current = None;
                self.state.phase = Phase::Exhausted;
            }
        }
    }
}
