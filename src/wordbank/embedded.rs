//! Embedded word bank
//!
//! Word/clue pairs compiled into the binary at build time.

// Include generated word bank from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
