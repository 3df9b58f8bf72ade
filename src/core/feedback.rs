//! Per-letter scoring of a guess against the target
//!
//! Each position is classified independently:
//! - Hit: same letter at the same position
//! - Present: the target contains the letter somewhere else
//! - Miss: the target does not contain the letter
//!
//! Present is a plain membership test. There is no duplicate-letter
//! bookkeeping, so guessing "eerie" against "water" marks every 'e' that is
//! not a Hit as Present.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of one guessed letter
///
/// Ordered by strength: `Miss < Present < Hit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Letter absent from the target
    Miss,
    /// Letter in the target, wrong position
    Present,
    /// Letter in the correct position
    Hit,
}

impl Classification {
    /// Single-character code: `G` hit, `Y` present, `-` miss
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Miss => '-',
        }
    }

    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }
}

/// Feedback for one submitted guess: one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All hits (the guess is the target)
    pub const PERFECT: Self = Self([Classification::Hit; WORD_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("zebra").unwrap();
    /// let target = Word::new("water").unwrap();
    ///
    /// // z(miss) e(present) b(miss) r(present) a(present)
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert_eq!(feedback.classifications(), &[Miss, Present, Miss, Present, Present]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Classification::Miss; WORD_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            *slot = if letter == target.letter_at(i) {
                Classification::Hit
            } else if target.contains(letter) {
                Classification::Present
            } else {
                Classification::Miss
            };
        }

        Self(result)
    }

    /// The five classifications in position order
    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Classification at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Classification {
        self.0[position]
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Hit)
    }

    /// Number of hits
    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&c| c == Classification::Hit).count()
    }

    /// Number of present-elsewhere letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Present)
            .count()
    }

    /// Render as an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Hit, Miss, Present};
    use super::*;
    use proptest::prelude::*;

    fn score(guess: &str, target: &str) -> [Classification; 5] {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        *Feedback::calculate(&guess, &target).classifications()
    }

    #[test]
    fn zebra_against_water() {
        assert_eq!(score("zebra", "water"), [Miss, Present, Miss, Present, Present]);
    }

    #[test]
    fn exact_match_is_perfect() {
        let word = Word::new("water").unwrap();
        let feedback = Feedback::calculate(&word, &word);
        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_hits(), 5);
    }

    #[test]
    fn no_shared_letters_all_miss() {
        assert_eq!(score("zebra", "piano"), [Miss, Miss, Miss, Miss, Present]);
        assert_eq!(score("fghij", "water"), [Miss; 5]);
    }

    #[test]
    fn mixed_hits_and_present() {
        // house vs horse: h, o hit; u miss; s, e hit
        assert_eq!(score("house", "horse"), [Hit, Hit, Miss, Hit, Hit]);
        // piano vs pains: p hit; i present; a present; n hit; o miss
        assert_eq!(score("piano", "pains"), [Hit, Present, Present, Hit, Miss]);
    }

    #[test]
    fn repeated_guess_letter_marks_every_copy_present() {
        // One 'e' in water (index 3); eerie has e at 0, 1, 4: all Present
        assert_eq!(score("eerie", "water"), [Present, Present, Present, Miss, Present]);
    }

    #[test]
    fn repeated_letter_with_one_hit_keeps_other_copy_present() {
        // 'a' is at index 1 of water; guessing it at 1 and 4 gives Hit and Present
        assert_eq!(score("aaxxa", "water"), [Present, Hit, Miss, Miss, Present]);
    }

    #[test]
    fn counts_and_display() {
        let guess = Word::new("zebra").unwrap();
        let target = Word::new("water").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(feedback.count_hits(), 0);
        assert_eq!(feedback.count_present(), 3);
        assert_eq!(feedback.to_string(), "-Y-YY");
        assert_eq!(feedback.to_emoji(), "⬜🟨⬜🟨🟨");
    }

    #[test]
    fn classification_order() {
        assert!(Hit > Present);
        assert!(Present > Miss);
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-f]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn each_position_follows_membership_rule(guess in word_strategy(), target in word_strategy()) {
            let feedback = Feedback::calculate(&guess, &target);

            for i in 0..WORD_LENGTH {
                let g = guess.letter_at(i);
                let expected = if g == target.letter_at(i) {
                    Hit
                } else if target.letters().contains(&g) {
                    Present
                } else {
                    Miss
                };
                prop_assert_eq!(feedback.get(i), expected);
            }
        }

        #[test]
        fn perfect_iff_words_equal(guess in word_strategy(), target in word_strategy()) {
            let feedback = Feedback::calculate(&guess, &target);
            prop_assert_eq!(feedback.is_perfect(), guess == target);
        }
    }
}
