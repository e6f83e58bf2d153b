//! Behavioral tests for the game state machine.

use dolphin_tictactoe::{
    Cell, GameInvariants, GameState, GameStatus, InvariantSet, Move, MoveOutcome, Player,
    Position, Rejection, find_winner, winning_line,
};

fn play(game: &mut GameState, moves: &[(i32, i32)]) -> Vec<MoveOutcome> {
    moves.iter().map(|&(row, col)| game.apply_move(row, col)).collect()
}

const TIE: [(i32, i32); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

#[test]
fn test_players_alternate_from_dolphin() {
    let mut game = GameState::new();
    let mut expected = Player::Dolphin;
    for &(row, col) in &TIE[..8] {
        assert_eq!(game.current_player(), expected);
        assert_eq!(game.apply_move(row, col), MoveOutcome::InProgress);
        expected = expected.opponent();
    }
    let players: Vec<Player> = game.history().iter().map(|m| m.player).collect();
    assert!(players.windows(2).all(|w| w[0] != w[1]));
    assert_eq!(players[0], Player::Dolphin);
}

#[test]
fn test_move_count_matches_occupied_cells() {
    let mut game = GameState::new();
    play(&mut game, &[(1, 1), (1, 1), (3, 0), (0, 0), (-1, 2), (2, 2)]);
    assert_eq!(game.move_count(), 3);
    assert_eq!(game.board().occupied_count(), 3);
}

#[test]
fn test_occupied_cell_is_never_overwritten() {
    let mut game = GameState::new();
    game.apply_move(1, 1);
    let before = game.clone();

    let outcome = game.apply_move(1, 1);
    assert_eq!(
        outcome,
        MoveOutcome::Rejected(Rejection::CellOccupied(Position::CENTER))
    );
    assert_eq!(game.board().get(Position::CENTER), Cell::Occupied(Player::Dolphin));
    assert_eq!(game, before);
}

#[test]
fn test_finished_game_is_stable_until_reset() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let finished = game.clone();

    for pos in Position::ALL {
        let outcome = game.apply_at(pos);
        assert!(outcome.is_rejected());
    }
    assert_eq!(game, finished);

    game.reset();
    assert_eq!(game.apply_move(2, 2), MoveOutcome::InProgress);
}

#[test]
fn test_reset_restores_initial_configuration() {
    let fresh = GameState::new();

    let mut mid_game = GameState::new();
    play(&mut mid_game, &[(0, 0), (2, 2), (1, 1)]);
    mid_game.reset();
    assert_eq!(mid_game, fresh);

    let mut tied = GameState::new();
    play(&mut tied, &TIE);
    tied.reset();
    assert_eq!(tied, fresh);

    let mut untouched = GameState::new();
    untouched.reset();
    untouched.reset();
    assert_eq!(untouched, fresh);
}

#[test]
fn test_row_win() {
    let mut game = GameState::new();
    let outcomes = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert!(outcomes[..4].iter().all(|o| *o == MoveOutcome::InProgress));
    assert_eq!(outcomes[4], MoveOutcome::Won(Player::Dolphin));
    assert_eq!(game.status(), GameStatus::Won(Player::Dolphin));
    assert_eq!(find_winner(game.board()), Some(Player::Dolphin));
    assert_eq!(
        game.board().rows()[0],
        [Cell::Occupied(Player::Dolphin); 3]
    );
}

#[test]
fn test_diagonal_win() {
    let mut game = GameState::new();
    let outcomes = play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    assert_eq!(outcomes[4], MoveOutcome::Won(Player::Dolphin));
    assert_eq!(
        winning_line(game.board()),
        Some([Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT])
    );
}

#[test]
fn test_full_board_without_line_is_tied() {
    let mut game = GameState::new();
    let outcomes = play(&mut game, &TIE);

    assert!(outcomes[..8].iter().all(|o| *o == MoveOutcome::InProgress));
    assert_eq!(outcomes[8], MoveOutcome::Tied);
    assert_eq!(game.status(), GameStatus::Tied);
    assert_eq!(game.move_count(), 9);
    assert!(GameInvariants::check_all(&game).is_ok());
}

#[test]
fn test_whale_anti_diagonal_ends_game_before_board_fills() {
    // Whale takes (0,2), (1,1), (2,0) on its third move.
    let mut game = GameState::new();
    let outcomes = play(
        &mut game,
        &[(0, 0), (0, 2), (0, 1), (1, 1), (1, 2), (2, 0), (1, 0), (2, 2), (2, 1)],
    );

    assert_eq!(outcomes[5], MoveOutcome::Won(Player::Whale));
    assert!(outcomes[6..].iter().all(|o| *o == MoveOutcome::Rejected(Rejection::GameOver)));
    assert_eq!(game.move_count(), 6);
}

#[test]
fn test_out_of_range_is_rejected() {
    let mut game = GameState::new();
    game.apply_move(1, 1);
    let before = game.clone();

    assert_eq!(
        game.apply_move(3, 0),
        MoveOutcome::Rejected(Rejection::OutOfRange { row: 3, col: 0 })
    );
    assert_eq!(
        game.apply_move(-1, 2),
        MoveOutcome::Rejected(Rejection::OutOfRange { row: -1, col: 2 })
    );
    assert_eq!(game, before);
}

#[test]
fn test_empty_cells_shrink_as_game_proceeds() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1)]);
    let open = Position::empty_cells(game.board());
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::TOP_LEFT));
    assert!(!open.contains(&Position::CENTER));
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (2, 1), (1, 1)]);

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
    assert_eq!(
        restored.last_move(),
        Some(Move::new(Player::Dolphin, Position::CENTER))
    );
}

#[test]
fn test_snapshot_with_inconsistent_counts_fails() {
    let empty_row = r#"["Empty","Empty","Empty"]"#;
    let json = format!(
        r#"{{"board":{{"cells":[{empty_row},{empty_row},{empty_row}]}},"current_player":"Dolphin","move_count":8,"status":"InProgress","history":[]}}"#
    );
    assert!(serde_json::from_str::<GameState>(&json).is_err());

    let consistent = serde_json::to_string(&GameState::new()).expect("serialize");
    assert_eq!(
        serde_json::from_str::<GameState>(&consistent).expect("deserialize"),
        GameState::new()
    );
}

#[test]
fn test_snapshot_with_tampered_status_fails() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1)]);
    let json = serde_json::to_string(&game)
        .expect("serialize")
        .replace(r#""status":"InProgress""#, r#""status":"Tied""#);
    assert!(serde_json::from_str::<GameState>(&json).is_err());
}

#[test]
fn test_snapshot_with_bad_position_fails() {
    let json = r#"{"player":"Whale","position":[4,0]}"#;
    assert!(serde_json::from_str::<Move>(json).is_err());
}
