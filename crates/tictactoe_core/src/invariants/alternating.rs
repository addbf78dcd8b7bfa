//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::game::GameInProgress;
use crate::player::Player;

/// Invariant: players alternate turns.
///
/// The history must read X, O, X, O, ... and the turn marker must match
/// the parity of the history. This implies the mark-count property: the
/// number of X marks minus the number of O marks is always 0 or 1.
pub struct AlternatingTurns;

impl Invariant<GameInProgress> for AlternatingTurns {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        // First mover is always X
        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "players alternate turns (X, O, X, O, ...)"
    }
}
