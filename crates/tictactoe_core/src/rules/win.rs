//! Win detection.

use crate::board::{Board, Cell};
use crate::player::Player;
use tracing::instrument;

/// The 8 winning lines as index triples: 3 rows, 3 columns, 2 diagonals.
///
/// [`check_winner`] scans them in this order, so the scan is
/// deterministic and reproducible.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`WIN_LINES`] order fully
/// held by one player, `None` otherwise. Under alternating play at most
/// one player can hold a completed line, so the order only fixes the scan,
/// not the result.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    for [a, b, c] in WIN_LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            return match cell {
                Cell::Marked(player) => Some(player),
                Cell::Empty => None,
            };
        }
    }
    None
}
