//! Candidate word lists
//!
//! The built-in list is compiled into the binary. Custom lists are read from
//! disk by [`loader::load_from_file`]; either way `GameState` validates them.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn builtin_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid target");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_list_contents() {
        assert_eq!(WORDS, &["zebra", "debuz", "water", "piano", "house"]);
    }
}
