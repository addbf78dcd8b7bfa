//! History consistency invariant: one history entry per marked cell.

use super::Invariant;
use crate::board::Cell;
use crate::game::GameInProgress;

/// Invariant: history length equals the number of marked cells.
///
/// Every move in the history corresponds to exactly one marked cell; no
/// moves are missing and no cell is marked without a move.
pub struct ConsistentHistory;

impl Invariant<GameInProgress> for ConsistentHistory {
    fn holds(game: &GameInProgress) -> bool {
        let marked = game
            .board()
            .cells()
            .iter()
            .filter(|cell| **cell != Cell::Empty)
            .count();

        game.history().len() == marked
    }

    fn description() -> &'static str {
        "history length matches the number of marked cells"
    }
}
