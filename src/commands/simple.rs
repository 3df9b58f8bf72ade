//! Simple interactive CLI mode
//!
//! Text-based game without TUI: the player types whole words, which are fed
//! through the same letter commands the on-screen keyboard uses.

use crate::core::{Word, WordError};
use crate::game::{GameError, GameState, GuessRecord, Statistics};
use crate::output::{print_board, print_keyboard, print_outcome, print_statistics};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// Why a typed word could not be played
#[derive(Debug, Error)]
pub enum EntryError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Replace the guess buffer with `input` and submit it
///
/// # Errors
///
/// Returns an error if `input` is not a 5-letter word or the game rejects the
/// submission (for example because it is already over).
pub fn enter_word(game: &mut GameState, input: &str) -> Result<GuessRecord, EntryError> {
    let word = Word::new(input)?;

    while game.delete_letter()? {}
    for &letter in word.letters() {
        game.append_letter(letter)?;
    }

    Ok(game.submit_guess()?)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng + ?Sized>(game: &mut GameState, rng: &mut R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the hidden 5-letter word in {} tries.",
        game.max_guesses()
    );
    println!("  - {} letter in the right spot", " G ".black().on_green());
    println!("  - {} letter in the word, wrong spot", " Y ".black().on_yellow());
    println!("  - {} letter not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut stats = Statistics::default();

    loop {
        print_board(game);
        print_keyboard(game.keyboard());

        if game.outcome().is_terminal() {
            stats.record(game);
            print_outcome(game);
            print_statistics(&stats);

            match get_user_input("Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    game.restart_with_rng(rng);
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let prompt = format!("Guess {}/{}", game.row() + 1, game.max_guesses());
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                debug!("game abandoned");
                game.restart_with_rng(rng);
                println!("\n🔄 New game started!\n");
            }
            word => {
                if let Err(err) = enter_word(game, word) {
                    println!("❌ {err}\n");
                }
            }
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}
