//! Command implementations

pub mod simple;

pub use simple::{play, run_simple};
