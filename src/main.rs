//! Hangman - CLI
//!
//! Clue-driven hangman with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    game::{GameConfig, MAX_INCORRECT, Session},
    output::print_word_bank,
    wordbank::{WordBank, loader::load_from_file},
};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time, guided by a clue",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank file with one 'word: clue' per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Incorrect guesses allowed per word
    #[arg(
        short,
        long,
        global = true,
        default_value_t = MAX_INCORRECT,
        value_parser = clap::value_parser!(u32).range(1..=26)
    )]
    max_incorrect: u32,

    /// Seed for a reproducible word order
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List every word and clue in the active word bank
    Words,
}

/// Load the word bank based on the -w flag
fn load_word_bank(wordlist: Option<&str>) -> Result<WordBank> {
    match wordlist {
        Some(path) => {
            load_from_file(path).with_context(|| format!("Failed to load word bank from '{path}'"))
        }
        None => WordBank::embedded().context("Embedded word bank is invalid"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bank = load_word_bank(cli.wordlist.as_deref())?;
    info!("Loaded {} words", bank.len());

    let config = GameConfig::new(cli.max_incorrect)?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&bank, config, rng),
        Commands::Simple => {
            let mut session = Session::new(&bank, config, rng);
            run_simple(&mut session)
        }
        Commands::Words => {
            print_word_bank(&bank);
            Ok(())
        }
    }
}

fn run_play_command(bank: &WordBank, config: GameConfig, rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(Session::new(bank, config, rng));
    run_tui(app)
}
