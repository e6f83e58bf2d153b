//! Board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::action::Rejection;
use super::types::{BOARD_SIZE, Board};

/// A cell coordinate on the board, always in range.
///
/// Callers that hold raw coordinates (a resolved pointer click, a typed
/// digit) go through [`Position::new`] or `TryFrom<(i32, i32)>`; anything
/// outside `0..3` never becomes a `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position { row: 0, col: 0 };
    /// Top edge, middle.
    pub const TOP_CENTER: Position = Position { row: 0, col: 1 };
    /// Top-right corner.
    pub const TOP_RIGHT: Position = Position { row: 0, col: 2 };
    /// Left edge, middle.
    pub const MIDDLE_LEFT: Position = Position { row: 1, col: 0 };
    /// Center of the board.
    pub const CENTER: Position = Position { row: 1, col: 1 };
    /// Right edge, middle.
    pub const MIDDLE_RIGHT: Position = Position { row: 1, col: 2 };
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Position = Position { row: 2, col: 0 };
    /// Bottom edge, middle.
    pub const BOTTOM_CENTER: Position = Position { row: 2, col: 1 };
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position { row: 2, col: 2 };

    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    /// Creates a position, or `None` if either coordinate is off the board.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|r| *r < BOARD_SIZE)?;
        let col = usize::try_from(col).ok().filter(|c| *c < BOARD_SIZE)?;
        Some(Self { row, col })
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "top-left",
            (0, 1) => "top-center",
            (0, 2) => "top-right",
            (1, 0) => "middle-left",
            (1, 1) => "center",
            (1, 2) => "middle-right",
            (2, 0) => "bottom-left",
            (2, 1) => "bottom-center",
            _ => "bottom-right",
        }
    }

    /// Positions still open on the board.
    ///
    /// A presentation layer uses this to decide which cells stay selectable.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Position> {
        Self::ALL
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = Rejection;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(Rejection::OutOfRange { row, col })
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        // Both coordinates are below BOARD_SIZE.
        (pos.row as i32, pos.col as i32)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Position::new(3, 0), None);
        assert_eq!(Position::new(-1, 2), None);
        assert_eq!(Position::new(0, 3), None);
        assert_eq!(Position::new(2, 2), Some(Position::BOTTOM_RIGHT));
    }

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_try_from_reports_coordinates() {
        let err = Position::try_from((5, -2)).unwrap_err();
        assert_eq!(err, Rejection::OutOfRange { row: 5, col: -2 });
    }

    #[test]
    fn test_empty_cells_on_empty_board() {
        assert_eq!(Position::empty_cells(&Board::new()).len(), 9);
    }
}
