//! Word list loading utilities
//!
//! Reads candidate lists from files. Entries are returned as written so that
//! `GameState` can report exactly which one is invalid.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load candidate words from a file, one per line
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_clone::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Split word list text into entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Convert a string slice to valid Words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::words_from_slice;
/// use wordle_clone::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    slice.iter().filter_map(|s| Word::new(s).ok()).collect()
}
