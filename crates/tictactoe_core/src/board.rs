//! Board storage: cells and validated cell addressing.

use crate::player::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Marked(Player),
}

/// Error returned when constructing a [`CellIndex`] outside `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("cell index {} is out of range (expected 0-8)", _0)]
pub struct CellOutOfRange(pub usize);

impl std::error::Error for CellOutOfRange {}

/// A validated board index in `0..=8`, row-major (index = row * 3 + col).
///
/// The only way to obtain one is through the checked constructors, so
/// downstream code never handles an out-of-range cell address. Serde
/// round-trips through `u8` with the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellIndex(u8);

impl CellIndex {
    /// All nine cells in row-major order.
    pub const ALL: [CellIndex; 9] = [
        CellIndex(0),
        CellIndex(1),
        CellIndex(2),
        CellIndex(3),
        CellIndex(4),
        CellIndex(5),
        CellIndex(6),
        CellIndex(7),
        CellIndex(8),
    ];

    /// Creates a cell index, returning `None` outside `0..=8`.
    pub const fn new(index: usize) -> Option<Self> {
        if index < 9 {
            Some(CellIndex(index as u8))
        } else {
            None
        }
    }

    /// Returns the row (0-2).
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Returns the column (0-2).
    pub const fn col(self) -> usize {
        self.0 as usize % 3
    }

    /// Returns the raw index (0-8).
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = CellOutOfRange;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        CellIndex::new(index).ok_or(CellOutOfRange(index))
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = CellOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        CellIndex::new(index as usize).ok_or(CellOutOfRange(index as usize))
    }
}

impl From<CellIndex> for u8 {
    fn from(index: CellIndex) -> u8 {
        index.0
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 3x3 board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from a raw cell array.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cell at the given index.
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.as_usize()]
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index.as_usize()] = cell;
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, index: CellIndex) -> bool {
        matches!(self.get(index), Cell::Empty)
    }

    /// Returns all cells as an array reference.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the indices of all empty cells, in row-major order.
    ///
    /// This is the valid-move enumeration: a move is legal exactly when
    /// its target appears here.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<CellIndex> {
        CellIndex::ALL
            .iter()
            .copied()
            .filter(|&index| self.is_empty(index))
            .collect()
    }

    /// Counts the marks placed by the given player.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with 1-9 placeholders on empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bounds() {
        assert!(CellIndex::new(0).is_some());
        assert!(CellIndex::new(8).is_some());
        assert!(CellIndex::new(9).is_none());
        assert_eq!(CellIndex::try_from(12usize), Err(CellOutOfRange(12)));
    }

    #[test]
    fn test_index_row_col() {
        let index = CellIndex::new(5).unwrap();
        assert_eq!(index.row(), 1);
        assert_eq!(index.col(), 2);
    }

    #[test]
    fn test_empty_cells_on_fresh_board() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_empty_cells_filters_marked() {
        let mut board = Board::new();
        board.set(CellIndex::new(0).unwrap(), Cell::Marked(Player::X));
        board.set(CellIndex::new(4).unwrap(), Cell::Marked(Player::O));

        let empty = board.empty_cells();
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&CellIndex::new(0).unwrap()));
        assert!(!empty.contains(&CellIndex::new(4).unwrap()));
        assert!(empty.contains(&CellIndex::new(8).unwrap()));
    }

    #[test]
    fn test_count_of() {
        let mut board = Board::new();
        board.set(CellIndex::new(0).unwrap(), Cell::Marked(Player::X));
        board.set(CellIndex::new(1).unwrap(), Cell::Marked(Player::X));
        board.set(CellIndex::new(4).unwrap(), Cell::Marked(Player::O));
        assert_eq!(board.count_of(Player::X), 2);
        assert_eq!(board.count_of(Player::O), 1);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.set(CellIndex::new(0).unwrap(), Cell::Marked(Player::X));
        board.set(CellIndex::new(4).unwrap(), Cell::Marked(Player::O));
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
