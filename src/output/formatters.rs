//! Formatting utilities for terminal output

use crate::core::Letter;
use crate::game::{GameOutcome, GameState, LetterStatus};
use colored::{ColoredString, Colorize};

/// Format a letter as a colored tile like " W "
#[must_use]
pub fn tile(letter: Letter, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match status {
        LetterStatus::Hit => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Miss => text.white().on_bright_black(),
        LetterStatus::Unknown => text.bold(),
    }
}

/// Placeholder tile for an empty board cell
#[must_use]
pub fn empty_tile() -> ColoredString {
    " · ".bright_black()
}

/// Shareable result grid, e.g. "Wordle 3/6" followed by emoji rows
///
/// A lost game shows "X" in place of the guess count.
#[must_use]
pub fn share_grid(game: &GameState) -> String {
    let score = match game.outcome() {
        GameOutcome::Won => game.records().len().to_string(),
        GameOutcome::Lost | GameOutcome::InProgress => "X".to_string(),
    };

    let mut grid = format!("Wordle {score}/{}\n", game.max_guesses());
    for record in game.records() {
        grid.push('\n');
        grid.push_str(&record.feedback.to_emoji());
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn play(target: &str, guesses: &[&str]) -> GameState {
        let mut game = GameState::new(&[target], GameConfig::default()).unwrap();
        for guess in guesses {
            for ch in guess.chars() {
                game.append_letter(Letter::new(ch).unwrap()).unwrap();
            }
            game.submit_guess().unwrap();
        }
        game
    }

    #[test]
    fn share_grid_won() {
        let game = play("water", &["zebra", "water"]);
        assert_eq!(share_grid(&game), "Wordle 2/6\n\n⬜🟨⬜🟨🟨\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_lost() {
        let game = play("house", &["piano"; 6]);
        let grid = share_grid(&game);

        assert!(grid.starts_with("Wordle X/6\n"));
        assert_eq!(grid.lines().count(), 8);
    }

    #[test]
    fn tile_text_is_uppercase() {
        colored::control::set_override(false);
        let letter = Letter::new('q').unwrap();
        assert_eq!(tile(letter, LetterStatus::Hit).to_string(), " Q ");
        assert_eq!(tile(letter, LetterStatus::Unknown).to_string(), " Q ");
    }
}
