//! TUI application state and logic

use super::input::{Command, command_for_key, command_for_mouse};
use crate::game::{GameError, GameOutcome, GameState, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{debug, trace};

/// Application state
pub struct App {
    pub game: GameState,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Where the on-screen keyboard was last drawn, for mouse hit-testing
    pub keyboard_area: Rect,
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

impl App {
    #[must_use]
    pub fn new(game: GameState, rng: StdRng) -> Self {
        let mut app = Self {
            game,
            rng,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            keyboard_area: Rect::default(),
        };
        app.add_welcome();
        app
    }

    fn add_welcome(&mut self) {
        self.add_message(
            &format!(
                "Guess the word in {} tries. Type or click letters, Enter to submit.",
                self.game.max_guesses()
            ),
            MessageStyle::Info,
        );
    }

    /// Whether the current game has reached a terminal outcome
    #[must_use]
    pub const fn game_over(&self) -> bool {
        self.game.outcome().is_terminal()
    }

    /// Apply one player command
    pub fn handle(&mut self, command: Command) {
        trace!(?command, "command");
        match command {
            Command::Quit => self.should_quit = true,
            Command::NewGame => self.new_game(),
            Command::Letter(letter) => {
                let result = self.game.append_letter(letter);
                self.report_rejection(result);
            }
            Command::Delete => {
                let result = self.game.delete_letter();
                self.report_rejection(result);
            }
            Command::Submit => self.submit(),
        }
    }

    fn submit(&mut self) {
        match self.game.submit_guess() {
            Ok(record) => match self.game.outcome() {
                GameOutcome::Won => {
                    self.stats.record(&self.game);
                    let celebration = match record.row + 1 {
                        1 => "🎯 HOLE IN ONE! You win!",
                        2 => "🔥 MAGNIFICENT! You win!",
                        3 => "✨ SPLENDID! You win!",
                        4 => "👏 GREAT JOB! You win!",
                        5 => "🎉 NICE WORK! You win!",
                        _ => "😅 PHEW! You win!",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                }
                GameOutcome::Lost => {
                    self.stats.record(&self.game);
                    let target = self
                        .game
                        .revealed_target()
                        .map(|word| word.text().to_uppercase())
                        .unwrap_or_default();
                    self.add_message(
                        &format!("You lose! The word was: {target}"),
                        MessageStyle::Error,
                    );
                }
                GameOutcome::InProgress => {
                    let left = self.game.remaining_guesses();
                    self.add_message(
                        &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                        MessageStyle::Info,
                    );
                }
            },
            Err(GameError::IncompleteGuess { .. }) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(err) => {
                debug!(%err, "submit rejected");
            }
        }
    }

    fn report_rejection(&mut self, result: Result<bool, GameError>) {
        if let Err(err) = result {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// Start a new game, keeping session statistics
    pub fn new_game(&mut self) {
        self.game.restart_with_rng(&mut self.rng);
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

    /// Most recent message
    #[must_use]
    pub fn latest_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup or teardown fails.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let mut keyboard_area = app.keyboard_area;
        terminal.draw(|f| keyboard_area = super::rendering::ui(f, &app))?;
        app.keyboard_area = keyboard_area;

        let command = match event::read()? {
            Event::Key(key) => command_for_key(key, app.game_over()),
            Event::Mouse(mouse) => command_for_mouse(mouse, app.keyboard_area, app.game_over()),
            _ => None,
        };

        if let Some(command) = command {
            app.handle(command);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
