//! Terminal output formatting
//!
//! Colored text rendering for the simple mode and the score command.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_keyboard, print_outcome, print_score_result, print_statistics,
};
