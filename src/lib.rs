//! Wordle Clone
//!
//! A single-player Wordle game: a hidden five-letter word, a fixed number of
//! guesses, and per-letter feedback on both the board and a virtual keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::Letter;
//! use wordle_clone::game::{GameConfig, GameOutcome, GameState, LetterStatus};
//!
//! let mut game = GameState::new(&["water"], GameConfig::default()).unwrap();
//!
//! for ch in "water".chars() {
//!     game.append_letter(Letter::new(ch).unwrap()).unwrap();
//! }
//! let record = game.submit_guess().unwrap();
//!
//! assert!(record.feedback.is_perfect());
//! assert_eq!(game.outcome(), GameOutcome::Won);
//! assert_eq!(game.status_of(Letter::new('w').unwrap()), LetterStatus::Hit);
//! ```

// Core domain types
pub mod core;

// Game state machine and keyboard
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
