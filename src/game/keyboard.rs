//! Virtual keyboard status
//!
//! Folds every scored guess into one best-known status per letter. A status
//! only ever moves up: `Unknown < Miss < Present < Hit`.

use super::GuessRecord;
use crate::core::{Classification, Letter};
use rustc_hash::FxHashMap;

/// Letter rows of the on-screen keyboard, top to bottom
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known status of a letter across all submitted guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterStatus {
    /// Not guessed yet
    #[default]
    Unknown,
    Miss,
    Present,
    Hit,
}

impl From<Classification> for LetterStatus {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Miss => Self::Miss,
            Classification::Present => Self::Present,
            Classification::Hit => Self::Hit,
        }
    }
}

/// Per-letter status map for the virtual keyboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardAggregator {
    statuses: FxHashMap<Letter, LetterStatus>,
}

impl KeyboardAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every (letter, classification) pair of a scored guess
    pub fn record_guess(&mut self, record: &GuessRecord) {
        for (letter, classification) in record.letters() {
            self.record_letter(letter, classification);
        }
    }

    /// Raise a letter's status to `classification` if that is an upgrade
    ///
    /// Returns whether the stored status changed.
    pub fn record_letter(&mut self, letter: Letter, classification: Classification) -> bool {
        let incoming = LetterStatus::from(classification);
        let current = self.statuses.entry(letter).or_default();
        if incoming > *current {
            *current = incoming;
            true
        } else {
            false
        }
    }

    /// Status of a letter, `Unknown` if never guessed
    #[must_use]
    pub fn status_of(&self, letter: Letter) -> LetterStatus {
        self.statuses.get(&letter).copied().unwrap_or_default()
    }

    /// Forget every letter (fresh game)
    pub fn reset(&mut self) {
        self.statuses.clear();
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.statuses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};
    use proptest::prelude::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn record(row: usize, guess: &str, target: &str) -> GuessRecord {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new(target).unwrap());
        GuessRecord {
            row,
            guess,
            feedback,
        }
    }

    #[test]
    fn unknown_by_default() {
        let keyboard = KeyboardAggregator::new();
        assert!(Letter::alphabet().all(|l| keyboard.status_of(l) == LetterStatus::Unknown));
        assert_eq!(keyboard.known_count(), 0);
    }

    #[test]
    fn zebra_then_water_upgrades_a_to_hit() {
        let mut keyboard = KeyboardAggregator::new();

        keyboard.record_guess(&record(0, "zebra", "water"));
        assert_eq!(keyboard.status_of(letter('a')), LetterStatus::Present);
        assert_eq!(keyboard.status_of(letter('z')), LetterStatus::Miss);

        keyboard.record_guess(&record(1, "water", "water"));
        assert_eq!(keyboard.status_of(letter('a')), LetterStatus::Hit);
        assert_eq!(keyboard.status_of(letter('e')), LetterStatus::Hit);
        assert_eq!(keyboard.status_of(letter('w')), LetterStatus::Hit);
        assert_eq!(keyboard.status_of(letter('z')), LetterStatus::Miss);
    }

    #[test]
    fn hit_never_downgraded() {
        let mut keyboard = KeyboardAggregator::new();

        // 'h' hits in house vs house, then is a miss-position guess in "shout"
        keyboard.record_guess(&record(0, "house", "house"));
        keyboard.record_guess(&record(1, "shout", "house"));

        assert_eq!(keyboard.status_of(letter('h')), LetterStatus::Hit);
        assert_eq!(keyboard.status_of(letter('s')), LetterStatus::Hit);
    }

    #[test]
    fn record_letter_reports_upgrades_only() {
        let mut keyboard = KeyboardAggregator::new();
        let q = letter('q');

        assert!(keyboard.record_letter(q, Classification::Miss));
        assert!(!keyboard.record_letter(q, Classification::Miss));
        assert!(keyboard.record_letter(q, Classification::Hit));
        assert!(!keyboard.record_letter(q, Classification::Present));
        assert_eq!(keyboard.status_of(q), LetterStatus::Hit);
    }

    #[test]
    fn reset_clears_everything() {
        let mut keyboard = KeyboardAggregator::new();
        keyboard.record_guess(&record(0, "piano", "piano"));
        assert_eq!(keyboard.known_count(), 5);

        keyboard.reset();
        assert_eq!(keyboard.known_count(), 0);
        assert_eq!(keyboard.status_of(letter('p')), LetterStatus::Unknown);
    }

    #[test]
    fn status_ordering() {
        let ordered = [
            LetterStatus::Unknown,
            LetterStatus::Miss,
            LetterStatus::Present,
            LetterStatus::Hit,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(LetterStatus::default(), LetterStatus::Unknown);
    }

    #[test]
    fn qwerty_rows_cover_alphabet_once() {
        let mut all: Vec<char> = QWERTY_ROWS.concat().chars().collect();
        all.sort_unstable();
        let expected: Vec<char> = Letter::alphabet().map(Letter::as_char).collect();
        assert_eq!(all, expected);
    }

    fn classification_strategy() -> impl Strategy<Value = Classification> {
        prop_oneof![
            Just(Classification::Miss),
            Just(Classification::Present),
            Just(Classification::Hit),
        ]
    }

    proptest! {
        #[test]
        fn status_never_decreases(
            updates in prop::collection::vec((0u8..6, classification_strategy()), 0..60)
        ) {
            let mut keyboard = KeyboardAggregator::new();
            let mut best: FxHashMap<Letter, LetterStatus> = FxHashMap::default();

            for (offset, classification) in updates {
                let l = letter(char::from(b'a' + offset));
                let before = keyboard.status_of(l);
                keyboard.record_letter(l, classification);
                let after = keyboard.status_of(l);

                prop_assert!(after >= before);
                let entry = best.entry(l).or_default();
                *entry = (*entry).max(LetterStatus::from(classification));
                prop_assert_eq!(after, *entry);
            }
        }
    }
}
