//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, score_guess};
pub use simple::{EntryError, enter_word, run_simple};
