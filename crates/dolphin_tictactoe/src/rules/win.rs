//! Win detection.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// The eight lines, in scan order: row i then column i for each i,
/// then the main diagonal, then the anti-diagonal.
const LINES: [[Position; 3]; 8] = [
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

/// Returns the player owning all three cells of some line, if any.
///
/// Every line is inspected regardless of who moved last, so this is safe
/// to call on arbitrary boards.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[first, _, _]| board.get(first).player())
}

/// Returns the first completed line in scan order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|[a, b, c]| {
        let cell = board.get(*a);
        cell != Cell::Empty && cell == board.get(*b) && cell == board.get(*c)
    })
}
