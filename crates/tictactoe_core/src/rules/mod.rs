//! Game rules: pure evaluation of board state.
//!
//! Rules are separated from board storage so they compose into the
//! contract system and stay independently testable.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, WIN_LINES};

use crate::board::Board;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Decided-or-undecided status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Evaluates the status of a board.
///
/// A board is won when some line is fully held by one player, drawn when
/// full with no winner, and in progress otherwise. Pure and idempotent:
/// evaluating the same board twice yields the same status.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
