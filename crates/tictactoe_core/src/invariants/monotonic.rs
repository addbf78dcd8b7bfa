//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::board::{Board, Cell};
use crate::game::GameInProgress;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to Marked it never changes.
/// Verified by replaying the move history and comparing the result to
/// the live board.
pub struct MonotonicBoard;

impl Invariant<GameInProgress> for MonotonicBoard {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.cell) {
                return false;
            }
            reconstructed.set(mov.cell, Cell::Marked(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::board::CellIndex;
    use crate::game::GameResult;
    use crate::player::Player;

    fn mov(player: Player, index: usize) -> Move {
        Move::new(player, CellIndex::new(index).unwrap())
    }

    #[test]
    fn test_fresh_game_holds() {
        assert!(MonotonicBoard::holds(&GameInProgress::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let moves = [
            mov(Player::X, 0),
            mov(Player::O, 4),
            mov(Player::X, 2),
            mov(Player::O, 6),
        ];

        let GameResult::InProgress(game) = GameInProgress::replay(&moves).unwrap() else {
            panic!("expected in-progress game");
        };
        assert!(MonotonicBoard::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let game = GameInProgress::new();
        let GameResult::InProgress(mut game) = game.make_move(mov(Player::X, 4)).unwrap() else {
            panic!("expected in-progress game");
        };

        // Overwrite the marked cell
        game.board
            .set(CellIndex::new(4).unwrap(), Cell::Marked(Player::O));

        assert!(!MonotonicBoard::holds(&game));
    }
}
