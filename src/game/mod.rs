//! Game session state machine
//!
//! A [`Session`] owns one player's [`GameState`] and drives it through rounds:
//! select an unused word, evaluate guesses, and move on after a win or a loss
//! until the word bank runs out.

mod error;
mod outcome;
pub mod selector;
mod session;
mod state;

pub use error::GameError;
pub use outcome::Outcome;
pub use selector::select_word;
pub use session::{GameConfig, MAX_INCORRECT, Session};
pub use state::{GameState, Phase, Statistics};
