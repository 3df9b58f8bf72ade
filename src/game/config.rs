//! Game settings

use super::ConfigError;

/// How commands that cannot apply are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Silently ignore them (state unchanged, `Ok(false)`)
    #[default]
    Lenient,
    /// Report them as `GameError::InvalidTransition`
    Strict,
}

/// Configuration for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub policy: Policy,
}

impl GameConfig {
    /// Standard Wordle allows six guesses
    pub const DEFAULT_MAX_GUESSES: usize = 6;
    /// Largest board the game accepts
    pub const MAX_GUESSES_LIMIT: usize = 20;

    #[must_use]
    pub const fn new(max_guesses: usize) -> Self {
        Self {
            max_guesses,
            policy: Policy::Lenient,
        }
    }

    /// Same settings, but rejected commands become errors
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.policy = Policy::Strict;
        self
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.policy, Policy::Strict)
    }

    pub(crate) const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }
        if self.max_guesses > Self::MAX_GUESSES_LIMIT {
            return Err(ConfigError::TooManyGuesses {
                requested: self.max_guesses,
                limit: Self::MAX_GUESSES_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_GUESSES)
    }
}
