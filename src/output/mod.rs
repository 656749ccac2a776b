//! Terminal output formatting
//!
//! Display utilities for the line-mode player and shared message text.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_exhausted, print_outcome, print_round, print_statistics, print_word_bank,
};
