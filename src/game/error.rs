//! Error taxonomy for game setup and commands
//!
//! Every error is local and recoverable: a rejected command leaves the game
//! exactly as it was.

use super::GameOutcome;
use crate::core::{WORD_LENGTH, WordError};
use std::fmt;
use thiserror::Error;

/// Problems with the word list or settings a game is initialized with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("candidate word list is empty")]
    EmptyWordList,
    #[error("candidate word {word:?} is invalid")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("max guesses must be at least 1")]
    ZeroMaxGuesses,
    #[error("max guesses must be at most {limit}, got {requested}")]
    TooManyGuesses { requested: usize, limit: usize },
}

/// Why a command could not be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The game already reached a terminal outcome
    GameOver(GameOutcome),
    /// The guess buffer already holds five letters
    BufferFull,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver(outcome) => write!(f, "the game is already {outcome}"),
            Self::BufferFull => write!(f, "the guess already has {WORD_LENGTH} letters"),
        }
    }
}

/// Errors returned by [`GameState`](super::GameState)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid game configuration")]
    Config(#[from] ConfigError),
    #[error("guess has {len} letters, need 5")]
    IncompleteGuess { len: usize },
    #[error("command rejected: {0}")]
    InvalidTransition(Rejection),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_word_keeps_source() {
        let err = GameError::from(ConfigError::InvalidWord {
            word: "pianos".to_string(),
            source: WordError::InvalidLength(6),
        });

        let config = err.source().expect("config error is the source");
        assert_eq!(config.to_string(), "candidate word \"pianos\" is invalid");
        let word = config.source().expect("word error is the source");
        assert_eq!(word.to_string(), "word must be exactly 5 letters, got 6");
    }

    #[test]
    fn too_many_guesses_message() {
        let err = ConfigError::TooManyGuesses {
            requested: 30_000,
            limit: 20,
        };
        assert_eq!(err.to_string(), "max guesses must be at most 20, got 30000");
    }

    #[test]
    fn messages() {
        assert_eq!(
            GameError::IncompleteGuess { len: 3 }.to_string(),
            "guess has 3 letters, need 5"
        );
        assert_eq!(
            GameError::InvalidTransition(Rejection::GameOver(GameOutcome::Lost)).to_string(),
            "command rejected: the game is already lost"
        );
        assert_eq!(
            GameError::InvalidTransition(Rejection::BufferFull).to_string(),
            "command rejected: the guess already has 5 letters"
        );
    }
}
