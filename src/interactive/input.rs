//! Input adapter
//!
//! Maps physical key presses and clicks on the on-screen keyboard to game
//! commands. The renderer draws keys with [`keycap_layout`] and mouse clicks
//! are hit-tested against the same geometry.

use crate::core::Letter;
use crate::game::QWERTY_ROWS;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// Height of one key, borders included
pub const KEY_HEIGHT: u16 = 3;
/// Height of the whole on-screen keyboard
pub const KEYBOARD_HEIGHT: u16 = KEY_HEIGHT * QWERTY_ROWS.len() as u16;

const LETTER_KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const KEY_GAP: u16 = 1;

/// A player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(Letter),
    Delete,
    Submit,
    NewGame,
    Quit,
}

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(Letter),
    Enter,
    Delete,
}

impl KeyCap {
    /// Text printed on the key
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => letter.to_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => LETTER_KEY_WIDTH,
            Self::Enter | Self::Delete => WIDE_KEY_WIDTH,
        }
    }

    /// Command issued by clicking the key
    #[must_use]
    pub const fn command(self, game_over: bool) -> Command {
        match self {
            Self::Letter(letter) => Command::Letter(letter),
            Self::Delete => Command::Delete,
            Self::Enter if game_over => Command::NewGame,
            Self::Enter => Command::Submit,
        }
    }
}

/// Keys row by row: the QWERTY letters, last row flanked by ENTER and DEL
#[must_use]
pub fn keycap_rows() -> Vec<Vec<KeyCap>> {
    let last = QWERTY_ROWS.len() - 1;
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let letters = row
                .chars()
                .filter_map(|ch| Letter::new(ch).ok())
                .map(KeyCap::Letter);
            if i == last {
                std::iter::once(KeyCap::Enter)
                    .chain(letters)
                    .chain(std::iter::once(KeyCap::Delete))
                    .collect()
            } else {
                letters.collect()
            }
        })
        .collect()
}

/// Screen rectangle of every key that fits inside `area`
///
/// Rows are centered horizontally and stacked from the top of `area`.
#[must_use]
pub fn keycap_layout(area: Rect) -> Vec<(Rect, KeyCap)> {
    let mut layout = Vec::new();

    for (i, row) in keycap_rows().into_iter().enumerate() {
        let total: u16 = row.iter().map(|key| key.width()).sum::<u16>()
            + KEY_GAP * (row.len() as u16).saturating_sub(1);
        let y = area.y + KEY_HEIGHT * i as u16;
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for key in row {
            let rect = Rect::new(x, y, key.width(), KEY_HEIGHT);
            if rect.right() <= area.right() && rect.bottom() <= area.bottom() {
                layout.push((rect, key));
            }
            x += key.width() + KEY_GAP;
        }
    }

    layout
}

/// Key under a screen position, if any
#[must_use]
pub fn keycap_at(area: Rect, column: u16, row: u16) -> Option<KeyCap> {
    let position = Position::new(column, row);
    keycap_layout(area)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, key)| key)
}

/// Command for a physical key press
///
/// Letters type, Backspace deletes, Enter submits, Esc and Ctrl-C quit. Once
/// the game is over, `n` or Enter starts a new game and `q` quits.
#[must_use]
pub fn command_for_key(key: KeyEvent, game_over: bool) -> Option<Command> {
    // Only key presses (Windows also reports releases)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('q') if game_over => Some(Command::Quit),
        KeyCode::Char('n') | KeyCode::Enter if game_over => Some(Command::NewGame),
        KeyCode::Char(ch) => Letter::new(ch).ok().map(Command::Letter),
        KeyCode::Backspace | KeyCode::Delete => Some(Command::Delete),
        KeyCode::Enter => Some(Command::Submit),
        _ => None,
    }
}

/// Command for a left click on the on-screen keyboard drawn in `keyboard_area`
#[must_use]
pub fn command_for_mouse(
    mouse: MouseEvent,
    keyboard_area: Rect,
    game_over: bool,
) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    keycap_at(keyboard_area, mouse.column, mouse.row).map(|key| key.command(game_over))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn typing_keys_while_playing() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('W')), false),
            Some(Command::Letter(letter('w')))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Backspace), false),
            Some(Command::Delete)
        );
        assert_eq!(
            command_for_key(press(KeyCode::Enter), false),
            Some(Command::Submit)
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('q')), false),
            Some(Command::Letter(letter('q')))
        );
        assert_eq!(command_for_key(press(KeyCode::Char('1')), false), None);
        assert_eq!(command_for_key(press(KeyCode::Tab), false), None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(command_for_key(press(KeyCode::Esc), false), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(ctrl_c, false), Some(Command::Quit));
    }

    #[test]
    fn keys_after_game_over() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('n')), true),
            Some(Command::NewGame)
        );
        assert_eq!(
            command_for_key(press(KeyCode::Enter), true),
            Some(Command::NewGame)
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('q')), true),
            Some(Command::Quit)
        );
    }

    #[test]
    fn key_release_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key, false), None);
    }

    #[test]
    fn keycap_rows_shape() {
        let rows = keycap_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[2].first(), Some(&KeyCap::Enter));
        assert_eq!(rows[2].last(), Some(&KeyCap::Delete));
        assert_eq!(rows[2].len(), 9);
    }

    #[test]
    fn keycap_labels() {
        assert_eq!(KeyCap::Letter(letter('z')).label(), "Z");
        assert_eq!(KeyCap::Enter.label(), "ENTER");
        assert_eq!(KeyCap::Delete.label(), "DEL");
    }

    #[test]
    fn layout_fits_all_keys_in_wide_area() {
        let area = Rect::new(0, 0, 60, KEYBOARD_HEIGHT);
        assert_eq!(keycap_layout(area).len(), 28);
    }

    #[test]
    fn layout_drops_keys_outside_narrow_area() {
        let area = Rect::new(0, 0, 30, KEYBOARD_HEIGHT);
        let layout = keycap_layout(area);
        assert!(layout.len() < 28);
        assert!(layout.iter().all(|(rect, _)| rect.right() <= 30));
    }

    #[test]
    fn hit_testing() {
        // Row widths: 59, 53, 57; centered in 60 columns
        let area = Rect::new(0, 0, 60, KEYBOARD_HEIGHT);

        assert_eq!(keycap_at(area, 2, 1), Some(KeyCap::Letter(letter('q'))));
        assert_eq!(keycap_at(area, 6, 0), Some(KeyCap::Letter(letter('w'))));
        assert_eq!(keycap_at(area, 5, 1), None);
        assert_eq!(keycap_at(area, 3, 3), Some(KeyCap::Letter(letter('a'))));
        assert_eq!(keycap_at(area, 1, 6), Some(KeyCap::Enter));
        assert_eq!(keycap_at(area, 57, 8), Some(KeyCap::Delete));
        assert_eq!(keycap_at(area, 58, 8), None);
        assert_eq!(keycap_at(area, 10, 9), None);
    }

    #[test]
    fn hit_testing_offset_area() {
        let area = Rect::new(10, 20, 60, KEYBOARD_HEIGHT);
        assert_eq!(keycap_at(area, 12, 21), Some(KeyCap::Letter(letter('q'))));
        assert_eq!(keycap_at(area, 2, 1), None);
    }

    #[test]
    fn mouse_clicks() {
        let area = Rect::new(0, 0, 60, KEYBOARD_HEIGHT);

        assert_eq!(
            command_for_mouse(click(2, 1), area, false),
            Some(Command::Letter(letter('q')))
        );
        assert_eq!(command_for_mouse(click(1, 6), area, false), Some(Command::Submit));
        assert_eq!(command_for_mouse(click(1, 6), area, true), Some(Command::NewGame));
        assert_eq!(command_for_mouse(click(57, 8), area, false), Some(Command::Delete));

        let mut moved = click(2, 1);
        moved.kind = MouseEventKind::Moved;
        assert_eq!(command_for_mouse(moved, area, false), None);
    }
}
