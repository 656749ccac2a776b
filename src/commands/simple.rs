//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI

use crate::game::{Phase, Session};
use crate::output::{print_banner, print_outcome, print_round, print_statistics};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Restart,
    Guess(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "quit" | "exit" => Self::Quit,
            "restart" | "new" => Self::Restart,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<R: Rng>(session: &mut Session<'_, R>) -> Result<()> {
    let stdin = io::stdin();
    play(session, stdin.lock())
}

/// Play until the reader is exhausted or the player quits
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn play<R: Rng, B: BufRead>(session: &mut Session<'_, R>, mut reader: B) -> Result<()> {
    print_banner();

    loop {
        print_round(session.state());

        let prompt = if session.state().phase() == Phase::Exhausted {
            "Type 'restart' or 'quit'"
        } else {
            "Enter a letter"
        };
        let Some(input) = read_line(&mut reader, prompt)? else {
            break;
        };

        match Command::parse(&input) {
            Command::Quit => break,
            Command::Restart => {
                session.restart();
                println!("\n🔄 {}\n", "New game started!".bright_cyan());
            }
            Command::Guess(guess) => {
                let outcome = session.submit_guess(&guess);
                print_outcome(&outcome, &guess);
                if outcome.ends_round() {
                    print_statistics(session.state().stats());
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    print_statistics(session.state().stats());
    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn read_line<B: BufRead>(reader: &mut B, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
