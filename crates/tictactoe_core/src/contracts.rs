//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning over state transitions:
//! {P(state, action)} action {Q(before, after)}.

use crate::action::{Move, MoveError};
use crate::game::GameInProgress;
use crate::invariants::{GameInvariants, InvariantSet};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Validates the precondition for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.cell) {
            Err(MoveError::CellOccupied(mov.cell))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move must belong to the player on turn.
pub struct PlayerOnTurn;

impl PlayerOnTurn {
    /// Validates the precondition for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::NotYourTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: cell empty and player on turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, game)?;
        PlayerOnTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move application.
///
/// Precondition: [`LegalMove`]. Postcondition: the full invariant set
/// still holds on the resulting state.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "postcondition failed");
            MoveError::InvariantViolated(descriptions)
        })
    }
}
