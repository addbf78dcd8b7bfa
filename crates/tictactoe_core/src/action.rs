//! First-class move actions.
//!
//! Moves are domain events, not side effects: they carry the player's
//! intent and can be validated, logged, and replayed independently of
//! execution.

use crate::board::CellIndex;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell where the mark is placed.
    pub cell: CellIndex,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: CellIndex) -> Self {
        Self { player, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.player, self.cell)
    }
}

/// Rejection of a move, raised at validation or application time.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(CellIndex),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,

    /// The move is attributed to the player not on turn.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(Player),

    /// An invariant was violated (postcondition failure).
    #[display("invariant violated: {}", _0)]
    InvariantViolated(String),
}

impl std::error::Error for MoveError {}
