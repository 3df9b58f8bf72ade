//! Guess scoring command
//!
//! Scores one guess against an arbitrary target, outside of any game.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let target = Word::new(target).with_context(|| format!("invalid target {target:?}"))?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
