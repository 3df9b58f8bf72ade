//! Five-letter word representation
//!
//! A Word stores its letters in order plus a membership set for the scoring rule.

use super::{Letter, WORD_LENGTH};
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A validated 5-letter word
///
/// Used both for the hidden target and for submitted guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
    distinct: FxHashSet<Letter>,
}

/// Error type for invalid words and letters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not an ASCII letter")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    ///
    /// let word = Word::new("Water").unwrap();
    /// assert_eq!(word.text(), "water");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("h0use").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let letters: Vec<Letter> = text
            .chars()
            .map(Letter::try_from)
            .collect::<Result<_, _>>()?;
        let letters = <[Letter; WORD_LENGTH]>::try_from(letters)
            .map_err(|letters| WordError::InvalidLength(letters.len()))?;

        Ok(Self::from_letters(letters))
    }

    /// Build a word from five already-validated letters
    #[must_use]
    pub fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        Self {
            text: letters.iter().map(|l| l.as_char()).collect(),
            distinct: letters.iter().copied().collect(),
            letters,
        }
    }

    /// Get the word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check whether the letter appears anywhere in the word
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.distinct.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
