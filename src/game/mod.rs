//! Game state machine and keyboard aggregation
//!
//! `GameState` accepts the three player commands (append, delete, submit),
//! scores each submitted guess, and feeds the result to its
//! `KeyboardAggregator`. Renderers only read from here.

mod config;
mod error;
mod keyboard;
mod state;
mod stats;

pub use config::{GameConfig, Policy};
pub use error::{ConfigError, GameError, Rejection};
pub use keyboard::{KeyboardAggregator, LetterStatus, QWERTY_ROWS};
pub use state::{GameOutcome, GameState, GuessRecord, Snapshot};
pub use stats::Statistics;
