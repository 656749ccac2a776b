//! Hangman
//!
//! A clue-driven hangman game: reveal a hidden word one letter at a time within
//! a bounded number of incorrect guesses. Words are never repeated within a session.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::render_word;
//! use hangman::game::{GameConfig, Outcome, Session};
//! use hangman::wordbank::WordBank;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let bank = WordBank::from_pairs(&[("ox", "farm animal")]).unwrap();
//! let mut session = Session::new(&bank, GameConfig::default(), StdRng::seed_from_u64(1));
//!
//! assert_eq!(session.submit_guess("o"), Outcome::Correct);
//! assert_eq!(session.submit_guess("x"), Outcome::Won { word: "ox".to_string() });
//! assert_eq!(render_word("ox", &['o'].into_iter().collect()), "o _");
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word bank
pub mod wordbank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
