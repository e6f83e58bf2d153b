//! Translating terminal input into game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dolphin_tictactoe::{BOARD_SIZE, Position};

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark on a cell.
    Select(Position),
    /// Place a mark under the keyboard cursor.
    SelectCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Start a new game after the current one ended.
    PlayAgain,
    /// Close the end-of-game summary.
    DismissModal,
    /// Leave the program.
    Exit,
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row() as i32, cursor.col() as i32);
    let (row, col) = match direction {
        Direction::Up => (row - 1, col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col - 1),
        Direction::Right => (row, col + 1),
    };
    Position::new(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action. `modal_open` changes what Enter and Esc do.
pub fn key_action(key: KeyEvent, modal_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Exit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Exit),
        KeyCode::Esc if modal_open => Some(Action::DismissModal),
        KeyCode::Esc => Some(Action::Exit),
        KeyCode::Enter | KeyCode::Char(' ') if modal_open => Some(Action::DismissModal),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::PlayAgain),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=(BOARD_SIZE * BOARD_SIZE) as u32).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Select),
        _ => None,
    }
}
