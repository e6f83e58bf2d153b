//! Terminal status invariant: the status agrees with the board.

use super::super::{GameState, GameStatus, find_winner, is_tie};
use super::Invariant;

/// Invariant: `Won(p)` exactly when `p` holds a line, `Tied` exactly when
/// the board is full with no line.
pub struct TerminalStatusMatchesBoard;

impl Invariant<GameState> for TerminalStatusMatchesBoard {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::Won(player) => find_winner(board) == Some(player),
            GameStatus::Tied => is_tie(board),
            GameStatus::InProgress => find_winner(board).is_none() && !is_tie(board),
        }
    }

    fn description() -> &'static str {
        "Status matches the board (winner holds a line, tie means full board)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_diagonal_win() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            game.apply_move(row, col);
        }
        assert!(game.status().is_over());
        assert!(TerminalStatusMatchesBoard::holds(&game));
    }
}
