//! Kani proof harnesses for the game invariants.
//!
//! Run with `cargo kani --features kani`.

use crate::{GameInvariants, GameState, InvariantSet, MoveOutcome};

/// Any bounded sequence of raw coordinates keeps every invariant.
#[kani::proof]
#[kani::unwind(10)]
fn verify_invariants_hold_for_arbitrary_moves() {
    let mut game = GameState::new();

    for _ in 0..9 {
        let row: i32 = kani::any();
        let col: i32 = kani::any();
        kani::assume((-1..=3).contains(&row) && (-1..=3).contains(&col));

        let before = game.clone();
        let outcome = game.apply_move(row, col);
        if outcome.is_rejected() {
            assert!(game == before, "Rejected move changed the state");
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}

/// A finished game rejects everything until reset.
#[kani::proof]
#[kani::unwind(10)]
fn verify_terminal_stability() {
    let mut game = GameState::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.apply_move(row, col);
    }

    let row: i32 = kani::any();
    let col: i32 = kani::any();
    assert!(matches!(game.apply_move(row, col), MoveOutcome::Rejected(_)));
}
