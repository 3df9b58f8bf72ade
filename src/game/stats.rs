//! In-memory session statistics
//!
//! Nothing here outlives the process.

use super::{GameOutcome, GameState};
use std::collections::BTreeMap;

/// Results of every finished game this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins keyed by the number of guesses they took
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Record a finished game
    ///
    /// Returns `false` (and records nothing) while the game is still running.
    pub fn record(&mut self, game: &GameState) -> bool {
        match game.outcome() {
            GameOutcome::InProgress => false,
            GameOutcome::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                *self
                    .guess_distribution
                    .entry(game.records().len())
                    .or_insert(0) += 1;
                true
            }
            GameOutcome::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
                true
            }
        }
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
