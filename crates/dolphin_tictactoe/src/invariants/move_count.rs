//! Move count invariant: the count matches the board and the history.

use super::super::GameState;
use super::Invariant;

/// Invariant: `move_count` equals the number of occupied cells and the
/// length of the move history.
pub struct MoveCountMatchesBoard;

impl Invariant<GameState> for MoveCountMatchesBoard {
    fn holds(game: &GameState) -> bool {
        let occupied = game.board().occupied_count();
        game.move_count() == occupied && game.history().len() == occupied
    }

    fn description() -> &'static str {
        "Move count matches occupied cells and history"
    }
}
