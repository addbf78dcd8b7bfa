//! Typestate phase machine for the game.
//!
//! Each phase is its own type. A finished game has no move-accepting
//! method and always carries an outcome, so the terminal-state rules are
//! encoded at compile time rather than checked at runtime.

use crate::action::{Move, MoveError};
use crate::board::{Board, Cell, CellIndex};
use crate::contracts::{Contract, MoveContract};
use crate::outcome::Outcome;
use crate::player::Player;
use crate::rules::{self, GameStatus};
use tracing::{debug, instrument};

/// Game in progress: accepts moves.
///
/// Board, turn, and history always travel together and are replaced
/// wholesale on each transition, so they cannot drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Player::X,
        }
    }

    /// Makes a move, consuming self and transitioning to the next phase.
    ///
    /// Preconditions (cell empty, player on turn) are checked always;
    /// the invariant set is verified as a postcondition in debug builds.
    /// The turn flips only when the game continues.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] when the target cell holds a
    /// mark and [`MoveError::NotYourTurn`] when the move is attributed to
    /// the player not on turn.
    #[instrument(skip(self), fields(player = %mov.player, cell = %mov.cell))]
    pub fn make_move(self, mov: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &mov)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.set(mov.cell, Cell::Marked(mov.player));
        game.history.push(mov);

        match rules::evaluate(&game.board) {
            GameStatus::Won(winner) => Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner(winner),
            })),
            GameStatus::Draw => Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            })),
            GameStatus::InProgress => {
                game.to_move = game.to_move.opponent();

                #[cfg(debug_assertions)]
                MoveContract::post(&before, &game)?;

                Ok(GameResult::InProgress(game))
            }
        }
    }

    /// Returns the player on turn.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the cells a move may target.
    pub fn valid_moves(&self) -> Vec<CellIndex> {
        self.board.empty_cells()
    }

    /// Replays a move list from a fresh game.
    ///
    /// # Errors
    ///
    /// Fails like [`make_move`](Self::make_move) on the first illegal
    /// move, and with [`MoveError::GameOver`] when moves remain after the
    /// game has finished.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        debug!(move_count = moves.len(), "replaying move list");
        let mut game = GameInProgress::new();
        for (played, mov) in moves.iter().enumerate() {
            match game.make_move(*mov)? {
                GameResult::InProgress(next) => game = next,
                GameResult::Finished(done) => {
                    if played + 1 < moves.len() {
                        return Err(MoveError::GameOver);
                    }
                    return Ok(GameResult::Finished(done));
                }
            }
        }
        Ok(GameResult::InProgress(game))
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Game finished: outcome decided, no further moves.
///
/// There is no move-accepting method on this type, and the outcome is
/// always present. The turn marker is not carried over - no flip happens
/// on a terminal move, and the last mover is `history().last()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the winner, if the game was not a draw.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Discards the finished game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameInProgress {
        GameInProgress::new()
    }
}

/// Result of making a move: the next phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
