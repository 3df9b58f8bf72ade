//! Display functions for the text-mode game and commands

use super::formatters::{empty_tile, share_grid, tile};
use crate::commands::ScoreResult;
use crate::core::{Letter, WORD_LENGTH};
use crate::game::{
    GameOutcome, GameState, KeyboardAggregator, LetterStatus, QWERTY_ROWS, Statistics,
};
use colored::Colorize;

/// Print the guess board: scored rows, the row being typed, then empty rows
pub fn print_board(game: &GameState) {
    println!();
    for record in game.records() {
        let tiles: Vec<String> = record
            .letters()
            .map(|(letter, classification)| tile(letter, classification.into()).to_string())
            .collect();
        println!("   {}", tiles.join(" "));
    }

    let mut rows_drawn = game.records().len();
    if !game.outcome().is_terminal() {
        let mut tiles: Vec<String> = game
            .buffer()
            .iter()
            .map(|&letter| tile(letter, LetterStatus::Unknown).to_string())
            .collect();
        tiles.resize_with(WORD_LENGTH, || empty_tile().to_string());
        println!("   {}", tiles.join(" "));
        rows_drawn += 1;
    }

    for _ in rows_drawn..game.max_guesses() {
        let tiles = vec![empty_tile().to_string(); WORD_LENGTH];
        println!("   {}", tiles.join(" "));
    }
    println!();
}

/// Print the virtual keyboard colored by best-known letter status
pub fn print_keyboard(keyboard: &KeyboardAggregator) {
    for (indent, row) in QWERTY_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .filter_map(|ch| Letter::new(ch).ok())
            .map(|letter| tile(letter, keyboard.status_of(letter)).to_string())
            .collect();
        println!("   {}{}", "  ".repeat(indent), keys.join(""));
    }
    println!();
}

/// Print the end-of-game banner and share grid
pub fn print_outcome(game: &GameState) {
    let Some(target) = game.revealed_target() else {
        return;
    };

    println!("{}", "═".repeat(40).bright_cyan());
    match game.outcome() {
        GameOutcome::Won => {
            let guesses = game.records().len();
            println!(
                "  {} Solved in {} {}",
                "🎉 You win!".bright_green().bold(),
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        GameOutcome::Lost => {
            println!(
                "  {} The word was: {}",
                "❌ You lose!".red().bold(),
                target.text().to_uppercase().bright_yellow().bold()
            );
        }
        GameOutcome::InProgress => {}
    }
    println!("{}", "═".repeat(40).bright_cyan());

    println!();
    for line in share_grid(game).lines() {
        println!("  {line}");
    }
    println!();
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:      {}", stats.games_played);
    println!("   Win rate:    {:.0}%", stats.win_rate());
    println!(
        "   Streak:      {} (max {})",
        stats.current_streak, stats.max_streak
    );

    if stats.games_won > 0 {
        for (&guesses, &count) in &stats.guess_distribution {
            let pct = count as f64 / stats.games_won as f64 * 100.0;
            let bar_width = (pct / 5.0) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(20_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {guesses}: {bar} {count}");
        }
    }
    println!();
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    let tiles: Vec<String> = result
        .guess
        .letters()
        .iter()
        .zip(result.feedback.classifications())
        .map(|(&letter, &classification)| tile(letter, classification.into()).to_string())
        .collect();

    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("   {}", tiles.join(" "));
    println!("   {}  ({})", result.feedback.to_emoji(), result.feedback);

    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match".green().bold());
    } else {
        println!(
            "   {} hit, {} present",
            result.feedback.count_hits(),
            result.feedback.count_present()
        );
    }
}
