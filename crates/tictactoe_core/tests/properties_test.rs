//! Property tests over arbitrary tap sequences.
//!
//! Drives the engine the way a presentation layer would: a stream of
//! taps, some of them invalid, with rejections discarded.

use proptest::prelude::*;
use tictactoe_core::{rules, CellIndex, GameView, Move, Player};

/// Applies a tap sequence, dropping rejected taps like a UI would.
fn apply_taps(taps: &[usize]) -> GameView {
    let mut view = GameView::new();
    for &tap in taps {
        let Some(cell) = CellIndex::new(tap) else {
            continue;
        };
        let Some(player) = view.to_move() else {
            break;
        };
        if let Ok(next) = view.make_move(Move::new(player, cell)) {
            view = next;
        }
    }
    view
}

proptest! {
    /// Accepted moves keep the mark counts balanced: X leads by 0 or 1.
    #[test]
    fn mark_count_difference_is_zero_or_one(taps in prop::collection::vec(0usize..9, 0..30)) {
        let view = apply_taps(&taps);
        let x = view.board().count_of(Player::X);
        let o = view.board().count_of(Player::O);
        prop_assert!(x == o || x == o + 1, "x={} o={}", x, o);
    }

    /// Board evaluation is idempotent.
    #[test]
    fn evaluation_is_idempotent(taps in prop::collection::vec(0usize..9, 0..30)) {
        let view = apply_taps(&taps);
        prop_assert_eq!(rules::evaluate(view.board()), rules::evaluate(view.board()));
    }

    /// The view's status always agrees with evaluating its board.
    #[test]
    fn status_agrees_with_evaluation(taps in prop::collection::vec(0usize..9, 0..30)) {
        let view = apply_taps(&taps);
        prop_assert_eq!(view.status(), rules::evaluate(view.board()));
    }

    /// Every history entry corresponds to one marked cell.
    #[test]
    fn history_matches_marked_cells(taps in prop::collection::vec(0usize..9, 0..30)) {
        let view = apply_taps(&taps);
        let marked = view.board().count_of(Player::X) + view.board().count_of(Player::O);
        prop_assert_eq!(view.history().len(), marked);
    }

    /// A finished game rejects every further move and stays unchanged.
    #[test]
    fn finished_games_reject_all_moves(taps in prop::collection::vec(0usize..9, 0..30)) {
        let view = apply_taps(&taps);
        if view.is_over() {
            let before = view.clone();
            for cell in CellIndex::ALL {
                for player in [Player::X, Player::O] {
                    prop_assert!(view.make_move(Move::new(player, cell)).is_err());
                }
            }
            prop_assert_eq!(view, before);
        }
    }
}
