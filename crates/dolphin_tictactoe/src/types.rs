//! Core domain types for dolphin vs whale tic-tac-toe.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// One of the two identities taking turns on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// The dolphin (moves first).
    #[display("Dolphin")]
    Dolphin,
    /// The whale (moves second).
    #[display("Whale")]
    Whale,
}

impl Player {
    /// The player who moves first after a reset.
    pub const FIRST: Player = Player::Dolphin;

    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Dolphin => Player::Whale,
            Player::Whale => Player::Dolphin,
        }
    }

    /// Display label for this player.
    pub fn label(self) -> &'static str {
        match self {
            Player::Dolphin => "Dolphin",
            Player::Whale => "Whale",
        }
    }

    /// Single-letter mark for compact rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::Dolphin => "D",
            Player::Whale => "W",
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Claimed by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupant, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Only the game state writes to the board.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Every position paired with its cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, cell)| *cell != Cell::Empty).count()
    }

    /// True when no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE * BOARD_SIZE
    }

    /// Formats the board as text, `.` for empty cells.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.player().map_or(".", Player::symbol))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled up with no line.
    Tied,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        use strum::IntoEnumIterator;
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
        assert_eq!(Player::iter().count(), 2);
        assert_eq!(Player::FIRST.opponent(), Player::Whale);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Player::Whale.to_string(), "Whale");
        assert_eq!(Player::Dolphin.to_string(), Player::Dolphin.label());
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Position::CENTER, Cell::Occupied(Player::Dolphin));
        board.set(Position::TOP_RIGHT, Cell::Occupied(Player::Whale));
        assert_eq!(board.display(), ".|.|W\n-+-+-\n.|D|.\n-+-+-\n.|.|.");
        assert_eq!(board.occupied_count(), 2);
        assert!(!board.is_full());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        let players = [Player::Dolphin, Player::Whale].into_iter().cycle();
        for (pos, player) in Position::ALL.into_iter().zip(players) {
            board.set(pos, Cell::Occupied(player));
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Tied.is_over());
        assert_eq!(GameStatus::Won(Player::Whale).winner(), Some(Player::Whale));
        assert_eq!(GameStatus::Tied.winner(), None);
    }
}
