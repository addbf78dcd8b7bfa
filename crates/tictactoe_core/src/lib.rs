//! Pure tic-tac-toe rules engine.
//!
//! State-transition logic over a 3x3 grid: cell assignment, turn
//! alternation, win and draw detection, reset. No I/O, no async, no
//! global state - the embedding presentation layer owns the state and
//! forwards user input as [`Move`] values.
//!
//! # Architecture
//!
//! - **Typestate phases**: [`GameInProgress`] accepts moves and
//!   transitions into [`GameFinished`], which has no move-accepting
//!   method - terminal states reject moves at compile time.
//! - **Rules**: pure functions over [`Board`] ([`rules::evaluate`],
//!   [`rules::check_winner`]), separated from storage.
//! - **Contracts and invariants**: moves are validated against
//!   preconditions, and the invariant set is re-verified after each
//!   transition in debug builds.
//! - **View**: [`GameView`] wraps the phases into one serializable value
//!   for the presentation layer, where rejected moves are no-ops.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{CellIndex, GameView, Move};
//!
//! let game = GameView::new();
//! let player = game.to_move().expect("fresh game is in progress");
//! let cell = CellIndex::new(4).expect("4 is on the board");
//!
//! let game = game.make_move(Move::new(player, cell)).expect("legal move");
//! assert!(!game.is_over());
//!
//! // Tapping the same cell again is rejected; `game` is untouched.
//! let player = game.to_move().expect("still in progress");
//! assert!(game.make_move(Move::new(player, cell)).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod game;
mod invariants;
mod outcome;
mod player;
pub mod rules;
mod view;

#[cfg(kani)]
mod verify;

pub use action::{Move, MoveError};
pub use board::{Board, Cell, CellIndex, CellOutOfRange};
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, PlayerOnTurn};
pub use game::{GameFinished, GameInProgress, GameResult};
pub use invariants::{
    AlternatingTurns, ConsistentHistory, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoard,
};
pub use outcome::Outcome;
pub use player::Player;
pub use rules::GameStatus;
pub use view::GameView;
