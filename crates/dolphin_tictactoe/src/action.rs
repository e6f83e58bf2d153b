//! Moves and move outcomes.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::types::{GameStatus, Player};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who placed the mark.
    pub player: Player,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied.
///
/// Rejections are ordinary values: the state is untouched and the caller
/// may ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game already has a winner or is tied.
    #[display("Game is already over")]
    GameOver,
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),
    /// The coordinates are off the board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
}

/// Result of [`GameState::apply_move`](crate::GameState::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected(Rejection),
    /// The move was applied and play continues.
    InProgress,
    /// The move completed a line for this player.
    Won(Player),
    /// The move filled the board with no line.
    Tied,
}

impl MoveOutcome {
    /// Returns true if the move was not applied.
    pub fn is_rejected(self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }

    /// Returns true if this move ended the game.
    pub fn ends_game(self) -> bool {
        matches!(self, MoveOutcome::Won(_) | MoveOutcome::Tied)
    }
}

impl From<GameStatus> for MoveOutcome {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => MoveOutcome::InProgress,
            GameStatus::Won(player) => MoveOutcome::Won(player),
            GameStatus::Tied => MoveOutcome::Tied,
        }
    }
}
