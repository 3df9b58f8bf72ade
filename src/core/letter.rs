//! Single-letter representation
//!
//! Every letter that enters the game passes through [`Letter::new`], so the rest
//! of the crate can assume lowercase ASCII.

use super::WordError;
use std::fmt;

/// A single lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter, normalizing uppercase input to lowercase
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacter` for anything but an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub const fn new(ch: char) -> Result<Self, WordError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self((ch as u8).to_ascii_lowercase()))
        } else {
            Err(WordError::InvalidCharacter(ch))
        }
    }

    /// The letter as a lowercase `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// The letter as an uppercase `char`, the way tiles and keys display it
    #[inline]
    #[must_use]
    pub const fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = WordError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
