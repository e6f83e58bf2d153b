//! Dolphin vs Whale tic-tac-toe rules engine.
//!
//! This crate owns the game state machine and nothing else: a 3x3 board,
//! the player to move, the move count and the game status. It performs no
//! I/O and knows nothing about how moves are presented; a presentation
//! layer drives it through [`GameState::apply_move`] and
//! [`GameState::reset`] and reacts to the returned [`MoveOutcome`].
//!
//! # Example
//!
//! ```
//! use dolphin_tictactoe::{GameState, MoveOutcome, Player};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.apply_move(1, 1), MoveOutcome::InProgress);
//! assert_eq!(game.current_player(), Player::Whale);
//!
//! // Occupied cells are rejected without touching the state.
//! assert!(game.apply_move(1, 1).is_rejected());
//! assert_eq!(game.move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

#[cfg(kani)]
mod verification;

pub use action::{Move, MoveOutcome, Rejection};
pub use game::{GameState, SnapshotError};
pub use invariants::{
    AlternatingTurns, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MoveCountMatchesBoard, TerminalStatusMatchesBoard,
};
pub use position::Position;
pub use rules::{find_winner, is_full, is_tie, winning_line};
pub use types::{BOARD_SIZE, Board, Cell, GameStatus, Player};
