//! Unified game state for the presentation layer.
//!
//! Typestate phases cannot be held in a single variable across
//! transitions, so the embedding layer owns a [`GameView`] instead: one
//! serializable value covering every phase, replaced wholesale on each
//! accepted move.

use crate::action::{Move, MoveError};
use crate::board::{Board, CellIndex};
use crate::game::{GameFinished, GameInProgress, GameResult};
use crate::outcome::Outcome;
use crate::player::Player;
use crate::rules::GameStatus;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Game state in any phase, owned by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameView {
    /// Game in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Player on turn.
        to_move: Player,
        /// Move history.
        history: Vec<Move>,
    },
    /// Game finished.
    Finished {
        /// The board state.
        board: Board,
        /// The outcome.
        outcome: Outcome,
        /// Move history.
        history: Vec<Move>,
    },
}

impl From<GameInProgress> for GameView {
    fn from(game: GameInProgress) -> Self {
        GameView::InProgress {
            to_move: game.to_move(),
            board: game.board,
            history: game.history,
        }
    }
}

impl From<GameFinished> for GameView {
    fn from(game: GameFinished) -> Self {
        GameView::Finished {
            board: game.board,
            outcome: game.outcome,
            history: game.history,
        }
    }
}

impl From<GameResult> for GameView {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(game) => game.into(),
            GameResult::Finished(game) => game.into(),
        }
    }
}

impl GameView {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        GameInProgress::new().into()
    }

    /// Discards the current game and returns a fresh one.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Applies a move, returning the next state.
    ///
    /// The current value is left untouched: on rejection the caller keeps
    /// displaying the same state, making an invalid tap a no-op.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] on a finished game; otherwise the
    /// rejections of [`GameInProgress::make_move`].
    #[instrument(skip(self), fields(player = %mov.player, cell = %mov.cell))]
    pub fn make_move(&self, mov: Move) -> Result<Self, MoveError> {
        match self {
            GameView::InProgress {
                board,
                to_move,
                history,
            } => {
                let game = GameInProgress {
                    board: board.clone(),
                    history: history.clone(),
                    to_move: *to_move,
                };
                match game.make_move(mov) {
                    Ok(result) => Ok(result.into()),
                    Err(error) => {
                        warn!(%error, "move rejected");
                        Err(error)
                    }
                }
            }
            GameView::Finished { .. } => {
                warn!("move rejected: game over");
                Err(MoveError::GameOver)
            }
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        match self {
            GameView::InProgress { board, .. } => board,
            GameView::Finished { board, .. } => board,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        match self {
            GameView::InProgress { history, .. } => history,
            GameView::Finished { history, .. } => history,
        }
    }

    /// Returns the player on turn, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GameView::InProgress { to_move, .. } => Some(*to_move),
            GameView::Finished { .. } => None,
        }
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameView::Finished { outcome, .. } => outcome.winner(),
            GameView::InProgress { .. } => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, GameView::Finished { .. })
    }

    /// Returns the displayable status.
    pub fn status(&self) -> GameStatus {
        match self {
            GameView::InProgress { .. } => GameStatus::InProgress,
            GameView::Finished { outcome, .. } => match outcome {
                Outcome::Winner(player) => GameStatus::Won(*player),
                Outcome::Draw => GameStatus::Draw,
            },
        }
    }

    /// Returns a status line for display.
    pub fn status_line(&self) -> String {
        match self {
            GameView::InProgress { to_move, .. } => {
                format!("In progress. Player {} to move.", to_move)
            }
            GameView::Finished { outcome, .. } => match outcome {
                Outcome::Winner(player) => format!("Game over. Player {} wins!", player),
                Outcome::Draw => "Game over. Draw!".to_string(),
            },
        }
    }

    /// Returns the cells a move may target; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<CellIndex> {
        match self {
            GameView::InProgress { board, .. } => board.empty_cells(),
            GameView::Finished { .. } => Vec::new(),
        }
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}
