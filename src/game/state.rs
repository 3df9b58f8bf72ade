//! Game state machine
//!
//! `InProgress` is the only state that accepts commands. `submit_guess` is the
//! only transition out of it, into `Won` or `Lost`, and both are terminal until
//! the game is restarted.

use super::{ConfigError, GameConfig, GameError, KeyboardAggregator, LetterStatus, Rejection};
use crate::core::{Classification, Feedback, Letter, WORD_LENGTH, Word};
use rand::Rng;
use std::fmt;
use tracing::{debug, info, trace};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    /// Won and Lost accept no further commands
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A submitted guess, its feedback, and the board row it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
}

impl GuessRecord {
    /// Each guessed letter paired with its classification
    pub fn letters(&self) -> impl Iterator<Item = (Letter, Classification)> + '_ {
        self.guess
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.classifications().iter().copied())
    }
}

/// Read-only view of the game for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub buffer: Vec<Letter>,
    pub row: usize,
    pub outcome: GameOutcome,
    /// The target, only once the game is over
    pub revealed: Option<Word>,
}

/// One game of Wordle: target, guess buffer, submitted rows, and keyboard
#[derive(Debug, Clone)]
pub struct GameState {
    candidates: Vec<Word>,
    config: GameConfig,
    target: Word,
    buffer: Vec<Letter>,
    row: usize,
    outcome: GameOutcome,
    records: Vec<GuessRecord>,
    keyboard: KeyboardAggregator,
}

impl GameState {
    /// Start a game with a target picked uniformly from `candidates`
    ///
    /// # Errors
    /// Returns `GameError::Config` if the list is empty, any entry is not a
    /// valid 5-letter word, or `config.max_guesses` is zero or above
    /// [`GameConfig::MAX_GUESSES_LIMIT`].
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::game::{GameConfig, GameOutcome, GameState};
    ///
    /// let game = GameState::new(&["water"], GameConfig::default()).unwrap();
    /// assert_eq!(game.outcome(), GameOutcome::InProgress);
    /// assert_eq!(game.row(), 0);
    ///
    /// assert!(GameState::new(&["pianos"], GameConfig::default()).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(candidates: &[S], config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(candidates, config, &mut rand::rng())
    }

    /// Like [`GameState::new`], drawing the target from `rng`
    ///
    /// # Errors
    /// Same as [`GameState::new`].
    pub fn with_rng<S, R>(
        candidates: &[S],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let candidates = validate_candidates(candidates)?;
        let target = pick_target(&candidates, rng);

        let game = Self {
            candidates,
            config,
            target,
            buffer: Vec::with_capacity(WORD_LENGTH),
            row: 0,
            outcome: GameOutcome::InProgress,
            records: Vec::new(),
            keyboard: KeyboardAggregator::new(),
        };
        debug!(
            candidates = game.candidates.len(),
            max_guesses = config.max_guesses,
            "new game"
        );
        Ok(game)
    }

    /// Begin a brand-new game from the same candidates and settings
    pub fn restart(&mut self) {
        self.restart_with_rng(&mut rand::rng());
    }

    /// Like [`GameState::restart`], drawing the target from `rng`
    pub fn restart_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.target = pick_target(&self.candidates, rng);
        self.buffer.clear();
        self.row = 0;
        self.outcome = GameOutcome::InProgress;
        self.records.clear();
        self.keyboard.reset();
        debug!(candidates = self.candidates.len(), "game restarted");
    }

    /// Append a letter to the guess buffer
    ///
    /// Returns whether the buffer changed. A full buffer or a finished game
    /// leaves it untouched.
    ///
    /// # Errors
    /// Under `Policy::Strict`, returns `GameError::InvalidTransition` instead of
    /// ignoring the letter.
    pub fn append_letter(&mut self, letter: Letter) -> Result<bool, GameError> {
        if self.outcome.is_terminal() {
            return self.reject(Rejection::GameOver(self.outcome));
        }
        if self.buffer.len() >= WORD_LENGTH {
            return self.reject(Rejection::BufferFull);
        }

        self.buffer.push(letter);
        Ok(true)
    }

    /// Remove the last letter of the guess buffer
    ///
    /// Returns whether the buffer changed. An empty buffer is always a no-op.
    ///
    /// # Errors
    /// Under `Policy::Strict`, returns `GameError::InvalidTransition` once the
    /// game is over.
    pub fn delete_letter(&mut self) -> Result<bool, GameError> {
        if self.outcome.is_terminal() {
            return self.reject(Rejection::GameOver(self.outcome));
        }
        Ok(self.buffer.pop().is_some())
    }

    /// Score the buffered guess and advance the game
    ///
    /// On success the buffer is cleared, the record is folded into the
    /// keyboard, and the outcome becomes `Won` on a perfect guess or `Lost`
    /// once every row is used.
    ///
    /// # Errors
    /// - `GameError::InvalidTransition` if the game is already over
    /// - `GameError::IncompleteGuess` if the buffer does not hold 5 letters
    ///
    /// The state is unchanged in both cases, whatever the policy.
    pub fn submit_guess(&mut self) -> Result<GuessRecord, GameError> {
        if self.outcome.is_terminal() {
            trace!(outcome = %self.outcome, "submit after game over");
            return Err(GameError::InvalidTransition(Rejection::GameOver(
                self.outcome,
            )));
        }

        let letters: [Letter; WORD_LENGTH] =
            self.buffer
                .as_slice()
                .try_into()
                .map_err(|_| GameError::IncompleteGuess {
                    len: self.buffer.len(),
                })?;

        let guess = Word::from_letters(letters);
        let feedback = Feedback::calculate(&guess, &self.target);
        let record = GuessRecord {
            row: self.row,
            guess,
            feedback,
        };

        if feedback.is_perfect() {
            self.outcome = GameOutcome::Won;
        } else {
            self.row += 1;
            if self.row == self.config.max_guesses {
                self.outcome = GameOutcome::Lost;
            }
        }

        self.buffer.clear();
        self.keyboard.record_guess(&record);
        self.records.push(record.clone());

        debug!(row = record.row, %feedback, outcome = %self.outcome, "guess scored");
        if self.outcome.is_terminal() {
            info!(
                outcome = %self.outcome,
                guesses = self.records.len(),
                target = %self.target,
                "game over"
            );
        }

        Ok(record)
    }

    /// Read-only snapshot of the buffer, row, outcome, and revealed target
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            buffer: self.buffer.clone(),
            row: self.row,
            outcome: self.outcome,
            revealed: self.revealed_target().cloned(),
        }
    }

    /// Letters typed so far for the current row
    #[must_use]
    pub fn buffer(&self) -> &[Letter] {
        &self.buffer
    }

    /// Current row index (0-based)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.config.max_guesses
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every submitted guess, in row order
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardAggregator {
        &self.keyboard
    }

    /// Keyboard status of a letter
    #[must_use]
    pub fn status_of(&self, letter: Letter) -> LetterStatus {
        self.keyboard.status_of(letter)
    }

    /// The target word, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.outcome.is_terminal().then_some(&self.target)
    }

    /// Rows still available for guessing
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        if self.outcome.is_terminal() {
            0
        } else {
            self.config.max_guesses - self.row
        }
    }

    fn reject(&self, rejection: Rejection) -> Result<bool, GameError> {
        trace!(%rejection, "command ignored");
        if self.config.is_strict() {
            Err(GameError::InvalidTransition(rejection))
        } else {
            Ok(false)
        }
    }
}

fn validate_candidates<S: AsRef<str>>(candidates: &[S]) -> Result<Vec<Word>, ConfigError> {
    if candidates.is_empty() {
        return Err(ConfigError::EmptyWordList);
    }

    candidates
        .iter()
        .map(|word| {
            let word = word.as_ref();
            Word::new(word).map_err(|source| ConfigError::InvalidWord {
                word: word.to_string(),
                source,
            })
        })
        .collect()
}

fn pick_target<R: Rng + ?Sized>(candidates: &[Word], rng: &mut R) -> Word {
    candidates[rng.random_range(0..candidates.len())].clone()
}
