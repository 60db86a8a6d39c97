//! Row/column coordinates on the board.

use crate::Board;
use serde::{Deserialize, Serialize};

/// A position on the board, as seen by a presentation layer.
///
/// Renderers work in rows and columns; the core works in row-major cell
/// indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub column: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Checks that the position lies on `board`.
    pub fn is_on(self, board: &Board) -> bool {
        self.row < board.rows() && self.column < board.columns()
    }

    /// Cell index on `board`, or `None` if the position is off the board.
    pub fn index_on(self, board: &Board) -> Option<usize> {
        self.is_on(board)
            .then(|| board.cell_index_of(self.row, self.column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_on_is_row_major() {
        let board = Board::new(3);
        assert_eq!(Position::new(0, 0).index_on(&board), Some(0));
        assert_eq!(Position::new(1, 1).index_on(&board), Some(4));
        assert_eq!(Position::new(2, 1).index_on(&board), Some(7));
    }

    #[test]
    fn test_index_on_rejects_off_board() {
        let board = Board::new(3);
        assert!(!Position::new(3, 0).is_on(&board));
        assert_eq!(Position::new(3, 0).index_on(&board), None);
        assert_eq!(Position::new(0, 3).index_on(&board), None);
    }

    #[test]
    fn test_larger_board() {
        let board = Board::new(4);
        assert_eq!(Position::new(1, 2).index_on(&board), Some(6));
        assert!(Position::new(3, 3).is_on(&board));
    }
}
