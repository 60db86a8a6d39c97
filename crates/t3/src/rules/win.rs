//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player};

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then the main diagonal and
/// finally the anti-diagonal. The first complete line decides the result.
pub fn check_winner(board: &Board) -> Option<Player> {
    let size = board.size();
    (0..size)
        .find_map(|row| check_row(board, row))
        .or_else(|| (0..size).find_map(|column| check_column(board, column)))
        .or_else(|| check_main_diagonal(board))
        .or_else(|| check_anti_diagonal(board))
}

/// Returns the player owning every cell of `row`.
pub fn check_row(board: &Board, row: usize) -> Option<Player> {
    uniform_line(
        board,
        (0..board.columns()).map(|column| board.cell_index_of(row, column)),
    )
}

/// Returns the player owning every cell of `column`.
pub fn check_column(board: &Board, column: usize) -> Option<Player> {
    uniform_line(
        board,
        (0..board.rows()).map(|row| board.cell_index_of(row, column)),
    )
}

/// Returns the player owning the top-left to bottom-right diagonal.
pub fn check_main_diagonal(board: &Board) -> Option<Player> {
    uniform_line(board, (0..board.rows()).map(|row| board.cell_index_of(row, row)))
}

/// Returns the player owning the top-right to bottom-left diagonal.
pub fn check_anti_diagonal(board: &Board) -> Option<Player> {
    let last = board.columns() - 1;
    uniform_line(
        board,
        (0..board.rows()).map(|row| board.cell_index_of(row, last - row)),
    )
}

fn uniform_line(board: &Board, mut indices: impl Iterator<Item = usize>) -> Option<Player> {
    let first = board.cell(indices.next()?).player()?;
    indices
        .all(|index| board.cell(index) == Cell::Occupied(first))
        .then_some(first)
}
