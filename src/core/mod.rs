//! Core domain types for Wordle
//!
//! Letters, words, and the scoring rule. Everything here is pure data with no
//! I/O, so the game state machine and every renderer share one definition of
//! what a guess scores.

mod feedback;
mod letter;
mod word;

pub use feedback::{Classification, Feedback};
pub use letter::Letter;
pub use word::{Word, WordError};

/// Number of letters in every target and guess
pub const WORD_LENGTH: usize = 5;
