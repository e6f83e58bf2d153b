//! The game state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use super::action::{Move, MoveOutcome, Rejection};
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::rules::find_winner;
use super::types::{BOARD_SIZE, Board, Cell, GameStatus, Player};

/// Complete state of one game of dolphin vs whale.
///
/// The board, turn, move count and status change only through
/// [`apply_move`](Self::apply_move), [`apply_at`](Self::apply_at) and
/// [`reset`](Self::reset). Status transitions are
/// `InProgress -> {InProgress, Won, Tied}`; a finished game accepts no
/// moves until it is reset.
///
/// Deserializing replays the snapshot's history, so a snapshot whose board,
/// turn, count or status disagree with its moves is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateSnapshot")]
pub struct GameState {
    board: Board,
    current_player: Player,
    move_count: usize,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a game in its initial configuration: empty board,
    /// dolphin to move, no moves, in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::FIRST,
            move_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is next.
    ///
    /// Once the game is won this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Marks placed since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves placed since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Coordinates off the board, occupied cells and finished games are
    /// rejected without changing anything; see [`apply_at`](Self::apply_at).
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> MoveOutcome {
        match Position::try_from((row, col)) {
            Ok(pos) => self.apply_at(pos),
            Err(rejection) => {
                debug!(%rejection, "Move rejected");
                MoveOutcome::Rejected(rejection)
            }
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success the move count goes up by one, then the board is checked
    /// for a winner (the mover keeps the turn if they won), then for a full
    /// board, and otherwise the turn passes to the other player.
    #[instrument(skip(self), fields(player = %self.current_player, position = %pos))]
    pub fn apply_at(&mut self, pos: Position) -> MoveOutcome {
        if let Some(rejection) = self.rejection(pos) {
            debug!(%rejection, "Move rejected");
            return MoveOutcome::Rejected(rejection);
        }

        let mover = self.current_player;
        self.board.set(pos, Cell::Occupied(mover));
        self.move_count += 1;
        self.history.push(Move::new(mover, pos));
        debug!(move_count = self.move_count, "Move applied");

        if let Some(winner) = find_winner(&self.board) {
            info!(%winner, move_count = self.move_count, "Game won");
            self.status = GameStatus::Won(winner);
        } else if self.move_count == BOARD_SIZE * BOARD_SIZE {
            info!("Game tied");
            self.status = GameStatus::Tied;
        } else {
            self.current_player = mover.opponent();
        }

        self.assert_invariants();
        MoveOutcome::from(self.status)
    }

    /// Returns the game to its initial configuration.
    #[instrument(skip(self), fields(move_count = self.move_count, status = ?self.status))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    fn rejection(&self, pos: Position) -> Option<Rejection> {
        if self.status.is_over() {
            Some(Rejection::GameOver)
        } else if !self.board.is_empty(pos) {
            Some(Rejection::CellOccupied(pos))
        } else {
            None
        }
    }

    fn assert_invariants(&self) {
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                error!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated: {violations:?}");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a [`GameState`], checked before it becomes one.
#[derive(Debug, Deserialize)]
struct GameStateSnapshot {
    board: Board,
    current_player: Player,
    move_count: usize,
    status: GameStatus,
    history: Vec<Move>,
}

/// A snapshot that does not describe a reachable game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// A recorded move was made by the wrong player.
    #[display("Move {} ({}) is out of turn", index, mv)]
    OutOfTurn {
        /// Zero-based position in the history.
        index: usize,
        /// The offending move.
        mv: Move,
    },
    /// A recorded move would not have been accepted.
    #[display("Move {} ({}) is illegal: {}", index, mv, rejection)]
    IllegalMove {
        /// Zero-based position in the history.
        index: usize,
        /// The offending move.
        mv: Move,
        /// Why it would be refused.
        rejection: Rejection,
    },
    /// Board, turn, count or status differ from the replayed history.
    #[display("Snapshot does not match its move history")]
    Mismatch,
}

impl TryFrom<GameStateSnapshot> for GameState {
    type Error = SnapshotError;

    #[instrument(skip(snapshot), fields(moves = snapshot.history.len()))]
    fn try_from(snapshot: GameStateSnapshot) -> Result<Self, Self::Error> {
        let mut replayed = GameState::new();
        for (index, &mv) in snapshot.history.iter().enumerate() {
            if mv.player != replayed.current_player {
                return Err(SnapshotError::OutOfTurn { index, mv });
            }
            if let MoveOutcome::Rejected(rejection) = replayed.apply_at(mv.position) {
                return Err(SnapshotError::IllegalMove { index, mv, rejection });
            }
        }

        let claimed = GameState {
            board: snapshot.board,
            current_player: snapshot.current_player,
            move_count: snapshot.move_count,
            status: snapshot.status,
            history: snapshot.history,
        };
        if claimed != replayed {
            debug!(?claimed, ?replayed, "Snapshot disagrees with history");
            return Err(SnapshotError::Mismatch);
        }
        Ok(replayed)
    }
}
