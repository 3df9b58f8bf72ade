//! Interactive TUI interface
//!
//! A ratatui front end over [`GameState`](crate::game::GameState): the input
//! adapter turns key presses and mouse clicks into commands, the renderer
//! paints the board and keyboard from the game's read accessors.

mod app;
pub mod input;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use input::Command;
pub use rendering::{status_style, ui};
