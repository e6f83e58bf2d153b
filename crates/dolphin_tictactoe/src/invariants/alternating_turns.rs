//! Alternating turn invariant: dolphin, whale, dolphin, ...

use super::super::{GameState, GameStatus, Player};
use super::Invariant;

/// Invariant: players alternate, dolphin first.
///
/// While the game is in progress the player to move is the one the
/// alternation predicts; after a win it is the winner.
pub struct AlternatingTurns;

impl Invariant<GameState> for AlternatingTurns {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| {
                let expected = if i % 2 == 0 { Player::FIRST } else { Player::FIRST.opponent() };
                mov.player == expected
            });
        if !alternates {
            return false;
        }

        match (game.status(), history.last()) {
            (GameStatus::InProgress, None) => game.current_player() == Player::FIRST,
            (GameStatus::InProgress, Some(last)) => game.current_player() == last.player.opponent(),
            (GameStatus::Won(winner), Some(last)) => {
                winner == last.player && game.current_player() == winner
            }
            (GameStatus::Won(_), None) => false,
            (GameStatus::Tied, Some(last)) => game.current_player() == last.player,
            (GameStatus::Tied, None) => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (Dolphin, Whale, Dolphin, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurns::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0), (2, 2)] {
            game.apply_move(row, col);
            assert!(AlternatingTurns::holds(&game));
        }
        assert_eq!(game.current_player(), Player::Whale);
    }
}
