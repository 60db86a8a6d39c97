//! Square game board holding the authoritative cell state.

use crate::rules;
use crate::{Cell, GameOutcome, Player};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 3;

/// N×N tic-tac-toe board.
///
/// Cells are stored in row-major order: `index = row * size + column`.
/// Indexed operations treat an out-of-range index as a caller bug and panic.
///
/// Search cost grows exponentially with the number of empty cells, so boards
/// larger than [`DEFAULT_SIZE`] are impractical against the computer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Creates a board from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `cells` does not hold `size * size` cells.
    pub fn from_cells(size: usize, cells: impl Into<Vec<Cell>>) -> Self {
        let cells = cells.into();
        assert!(size >= 1, "board size must be at least 1");
        assert_eq!(
            cells.len(),
            size * size,
            "a {size}x{size} board needs {} cells",
            size * size
        );
        Self { size, cells }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.size
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `index`.
    pub fn cell(&self, index: usize) -> Cell {
        self.check_index(index);
        self.cells[index]
    }

    /// Converts a row and column into a cell index.
    pub fn cell_index_of(&self, row: usize, column: usize) -> usize {
        row * self.columns() + column
    }

    /// Checks if the cell at `index` is empty.
    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.cell(index).is_empty()
    }

    /// Indices of the empty cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Places `player`'s mark at `index`.
    ///
    /// Returns `false` without touching the board if the cell is occupied or
    /// the game is already finished. Every mark on the board goes through
    /// this check.
    pub fn place(&mut self, index: usize, player: Player) -> bool {
        if !self.is_cell_empty(index) || self.is_finished() {
            return false;
        }
        self.cells[index] = Cell::Occupied(player);
        true
    }

    /// Empties the cell at `index`, whatever it holds.
    ///
    /// Only search uses this, to take back a hypothetical move.
    pub fn clear_cell(&mut self, index: usize) {
        self.check_index(index);
        self.cells[index] = Cell::Empty;
    }

    /// Empties every cell.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Returns the player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_complete(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the game on this board is over.
    pub fn is_finished(&self) -> bool {
        self.winner().is_some() || self.is_complete()
    }

    /// Derives the outcome from the current cells.
    pub fn outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(player) => GameOutcome::Won(player),
            None if self.is_complete() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.cells.len(),
            "cell index {index} out of range for a {0}x{0} board",
            self.size
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = vec!["-"; self.columns()].join("+");
        for (row, cells) in self.cells.chunks(self.columns()).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            for (column, cell) in cells.iter().enumerate() {
                if column > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, " ")?,
                    Cell::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
            }
        }
        Ok(())
    }
}
