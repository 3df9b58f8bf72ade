//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, and status widgets for the game.

use super::app::{App, MessageStyle};
use super::input::{KEY_HEIGHT, KEYBOARD_HEIGHT, KeyCap, keycap_layout};
use crate::core::{Letter, WORD_LENGTH};
use crate::game::LetterStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const TILE_WIDTH: u16 = 5;
const TILE_GAP: u16 = 1;

/// Main UI rendering function
///
/// Returns the area the on-screen keyboard was drawn in.
pub fn ui(f: &mut Frame, app: &App) -> Rect {
    let board_height = rows_height(app.game.max_guesses());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(board_height),       // Board
            Constraint::Length(3),               // Message
            Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
            Constraint::Length(3),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    chunks[3]
}

/// Terminal rows taken by `rows` stacked tiles, saturating at `u16::MAX`
fn rows_height(rows: usize) -> u16 {
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_mul(KEY_HEIGHT)
}

/// Tile style for a letter status
#[must_use]
pub fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Hit => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Miss => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tile(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let tile = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(tile, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let width = TILE_WIDTH * WORD_LENGTH as u16 + TILE_GAP * (WORD_LENGTH as u16 - 1);
    let x0 = area.x + area.width.saturating_sub(width) / 2;
    let game = &app.game;

    for row in 0..game.max_guesses() {
        let y = area.y.saturating_add(rows_height(row));
        if y.saturating_add(KEY_HEIGHT) > area.bottom() {
            break;
        }

        let record = game.records().get(row);
        let typing = record.is_none() && row == game.row() && !game.outcome().is_terminal();

        for col in 0..WORD_LENGTH {
            let rect = Rect::new(
                x0 + (TILE_WIDTH + TILE_GAP) * col as u16,
                y,
                TILE_WIDTH,
                KEY_HEIGHT,
            );
            if rect.right() > area.right() {
                break;
            }

            let (letter, status): (Option<Letter>, LetterStatus) = match record {
                Some(record) => (
                    Some(record.guess.letter_at(col)),
                    record.feedback.get(col).into(),
                ),
                None if typing => (game.buffer().get(col).copied(), LetterStatus::Unknown),
                None => (None, LetterStatus::Unknown),
            };

            let text = letter.map(|l| l.to_uppercase().to_string()).unwrap_or_default();
            let mut style = status_style(status);
            if typing && letter.is_none() {
                style = style.fg(Color::DarkGray);
            }
            render_tile(f, rect, &text, style);
        }
    }
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = app.latest_message().map_or((String::new(), Color::White), |msg| {
        let color = match msg.style {
            MessageStyle::Info => Color::White,
            MessageStyle::Success => Color::Green,
            MessageStyle::Error => Color::Red,
        };
        (msg.text.clone(), color)
    });

    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for (rect, key) in keycap_layout(area) {
        let style = match key {
            KeyCap::Letter(letter) => status_style(app.game.status_of(letter)),
            KeyCap::Enter | KeyCap::Delete => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        };
        render_tile(f, rect, &key.label(), style);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ])
        .split(area);

    let turn_text = if app.game_over() {
        format!("Game over: {}", app.game.outcome())
    } else {
        format!("Guess {}/{}", app.game.row() + 1, app.game.max_guesses())
    };
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats_text = format!(
        "Played: {} | Won: {:.0}% | Streak: {}",
        app.stats.games_played,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game_over() {
        "n/Enter: New Game | q: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
