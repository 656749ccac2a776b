//! TUI application state and logic

use crate::game::{Outcome, Phase, Session};
use crate::output::formatters::{exhausted_message, outcome_message};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};

/// Application state
pub struct App<'a> {
    pub session: Session<'a, StdRng>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a, StdRng>) -> Self {
        Self {
            session,
            messages: vec![
                Message {
                    text: "Guess the word by pressing one letter at a time!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Ctrl-R restarts, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.guess(c);
            }
            _ => {}
        }
    }

    pub fn guess(&mut self, letter: char) {
        let input = letter.to_string();
        let outcome = self.session.submit_guess(&input);
        debug!("Key '{letter}' -> {outcome:?}");

        let style = match outcome {
            Outcome::Correct | Outcome::Won { .. } => MessageStyle::Success,
            Outcome::Incorrect | Outcome::Lost { .. } => MessageStyle::Error,
            Outcome::Ignored | Outcome::Exhausted => MessageStyle::Info,
        };
        self.add_message(&outcome_message(&outcome, &input), style);

        if outcome.ends_round() {
            if self.session.state().phase() == Phase::Exhausted {
                self.add_message(exhausted_message(), MessageStyle::Error);
                self.add_message("Press Ctrl-R to restart or Esc to quit.", MessageStyle::Info);
            } else {
                self.add_message("Next word! Check the new clue.", MessageStyle::Info);
            }
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Raw mode and alternate screen, undone on drop
///
/// Escape sequences go to `out`; the TUI itself draws through its own backend.
struct TerminalGuard<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out, active: true };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(self.out, LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            debug!("Terminal restore failed: {err}");
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    let mut guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    guard.restore()?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
