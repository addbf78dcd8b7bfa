//! Kani model-checking harnesses.
//!
//! Bounded proofs over the engine's invariants. Compiled only under
//! `cargo kani`; normal builds see none of this.

use crate::action::Move;
use crate::board::{Board, Cell, CellIndex};
use crate::game::{GameInProgress, GameResult};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::player::Player;
use crate::rules;

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Marked(kani::any())
        }
    }
}

impl kani::Arbitrary for CellIndex {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        CellIndex::new(index).unwrap()
    }
}

impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any())
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_cells(kani::any())
    }
}

mod proofs {
    use super::*;

    /// Any opening move preserves the full invariant set.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_opening_move_preserves_invariants() {
        let cell: CellIndex = kani::any();
        let game = GameInProgress::new();

        match game.make_move(Move::new(Player::X, cell)) {
            Ok(GameResult::InProgress(next)) => {
                assert!(GameInvariants::check_all(&next).is_ok());
            }
            Ok(GameResult::Finished(_)) => unreachable!("one move cannot finish a game"),
            Err(_) => unreachable!("every cell is legal on a fresh board"),
        }
    }

    /// Evaluation is deterministic for every board, reachable or not.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_evaluation_deterministic() {
        let board: Board = kani::any();
        assert_eq!(rules::evaluate(&board), rules::evaluate(&board));
    }
}
