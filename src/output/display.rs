//! Display functions for the line-mode front end

use super::formatters::{attempts_bar, exhausted_message, format_letters, outcome_message};
use crate::game::{GameState, Outcome, Statistics};
use crate::wordbank::WordBank;
use colored::Colorize;

/// Print the welcome banner and controls
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     🎮 Hangman Game 🎮                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the word by entering one letter at a time!");
    println!("Commands: 'restart' to start over, 'quit' to exit\n");
}

/// Print the clue, the revealed word and the attempts left
pub fn print_round(state: &GameState) {
    let (Some(clue), Some(masked)) = (state.current_clue(), state.masked_word()) else {
        print_exhausted();
        return;
    };

    println!("{}", "─".repeat(60).cyan());
    println!("Clue: {}", clue.bright_white().bold());
    println!("\n    {}\n", masked.to_uppercase().bright_yellow().bold());
    println!(
        "Incorrect guesses left: [{}] {}",
        attempts_bar(state.remaining_attempts(), state.max_incorrect(), 12).green(),
        state.remaining_attempts()
    );
    println!("Missed letters:         {}", format_letters(state.missed_letters()).red());
}

/// Print feedback for a submitted guess
pub fn print_outcome(outcome: &Outcome, guess: &str) {
    let message = outcome_message(outcome, guess);
    match outcome {
        Outcome::Correct => println!("{}", message.green()),
        Outcome::Incorrect => println!("{}", message.red()),
        Outcome::Won { .. } => println!("\n{}\n", message.bright_green().bold()),
        Outcome::Lost { .. } => println!("\n{}\n", message.bright_red().bold()),
        Outcome::Ignored | Outcome::Exhausted => println!("{}", message.yellow()),
    }
}

pub fn print_exhausted() {
    println!("{}", exhausted_message().yellow().bold());
}

/// Print the rounds won and lost so far
pub fn print_statistics(stats: Statistics) {
    println!(
        "Rounds: {} | Won: {} | Lost: {} | Win Rate: {:.0}%",
        stats.rounds_played(),
        stats.rounds_won.to_string().green(),
        stats.rounds_lost.to_string().red(),
        stats.win_rate()
    );
}

/// Print every entry of a word bank
pub fn print_word_bank(bank: &WordBank) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ({} words)", "WORD BANK".bright_cyan().bold(), bank.len());
    println!("{}", "═".repeat(60).cyan());

    for entry in bank.entries() {
        println!(
            "  {} {}",
            format!("{:<16}", entry.word().text()).bright_yellow(),
            entry.clue()
        );
    }
}
