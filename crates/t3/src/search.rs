//! Minimax search for the computer player.
//!
//! The search backtracks over the real board: every hypothetical move is
//! placed through a [`Trial`], which takes the mark back when it is dropped.
//! The board is therefore identical before and after any search, including
//! when a nested call unwinds.
//!
//! Scores are from the computer's point of view: [`WIN`] if it completes a
//! line, [`LOSS`] if the opponent does, [`DRAW`] for a full board. The cost is
//! exponential in the number of empty cells, which is fine on a 3×3 board and
//! hopeless much beyond it.

use crate::{Board, GameOutcome, Player};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a position the computer has won.
pub const WIN: i32 = 1;
/// Score of a drawn position.
pub const DRAW: i32 = 0;
/// Score of a position the opponent has won.
pub const LOSS: i32 = -1;

/// Algorithm used to score positions.
///
/// Both strategies compute the same minimax value and therefore select the
/// same move; alpha-beta skips branches that cannot change the result.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchStrategy {
    /// Plain minimax over the whole game tree.
    #[default]
    Exhaustive,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

/// A hypothetical mark on a board, removed again on drop.
///
/// Dereferences to the board so the search can recurse into the position.
#[derive(Debug)]
pub struct Trial<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Trial<'a> {
    /// Places `player` at `index` until the trial is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the board refuses the mark, i.e. the cell is occupied or the
    /// game is over.
    pub fn new(board: &'a mut Board, index: usize, player: Player) -> Self {
        let placed = board.place(index, player);
        assert!(placed, "trial move {player} -> {index} rejected by the board");
        Self { board, index }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.clear_cell(self.index);
    }
}

/// Picks the best cell for `ai` to play.
///
/// Each empty cell is tried in index order and scored with the opponent to
/// move. The first cell with the highest score wins.
///
/// # Panics
///
/// Panics if the game on `board` is already finished.
#[instrument(skip(board), fields(empty = board.empty_cells().count()))]
pub fn best_move(board: &mut Board, ai: Player, strategy: SearchStrategy) -> usize {
    assert!(
        !board.is_finished(),
        "cannot search for a move: the game is already over"
    );

    let mut search = Search::new(ai, strategy);
    let mut best: Option<(usize, i32)> = None;
    for index in 0..board.cells().len() {
        if !board.is_cell_empty(index) {
            continue;
        }
        let score = {
            let mut trial = Trial::new(board, index, ai);
            search.score(&mut trial, false)
        };
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let Some((index, score)) = best else {
        unreachable!("an unfinished board has an empty cell");
    };
    debug!(index, score, visited = search.visited, "Selected move");
    index
}

/// Minimax value of `board` for `ai`, with `ai_to_move` telling whose turn
/// it is.
pub fn minimax(board: &mut Board, ai: Player, ai_to_move: bool) -> i32 {
    Search::new(ai, SearchStrategy::Exhaustive).minimax(board, ai_to_move)
}

/// Same value as [`minimax`], computed with alpha-beta pruning.
pub fn alpha_beta(board: &mut Board, ai: Player, ai_to_move: bool) -> i32 {
    Search::new(ai, SearchStrategy::AlphaBeta).alpha_beta(board, ai_to_move, i32::MIN, i32::MAX)
}

struct Search {
    ai: Player,
    strategy: SearchStrategy,
    visited: u64,
}

impl Search {
    fn new(ai: Player, strategy: SearchStrategy) -> Self {
        Self {
            ai,
            strategy,
            visited: 0,
        }
    }

    fn score(&mut self, board: &mut Board, ai_to_move: bool) -> i32 {
        match self.strategy {
            SearchStrategy::Exhaustive => self.minimax(board, ai_to_move),
            SearchStrategy::AlphaBeta => self.alpha_beta(board, ai_to_move, i32::MIN, i32::MAX),
        }
    }

    fn terminal_score(&self, board: &Board) -> Option<i32> {
        match board.outcome() {
            GameOutcome::InProgress => None,
            GameOutcome::Won(player) if player == self.ai => Some(WIN),
            GameOutcome::Won(_) => Some(LOSS),
            GameOutcome::Draw => Some(DRAW),
        }
    }

    fn mover(&self, ai_to_move: bool) -> Player {
        if ai_to_move { self.ai } else { self.ai.opposite() }
    }

    fn minimax(&mut self, board: &mut Board, ai_to_move: bool) -> i32 {
        self.visited += 1;
        if let Some(score) = self.terminal_score(board) {
            return score;
        }

        let mover = self.mover(ai_to_move);
        let mut best = if ai_to_move { i32::MIN } else { i32::MAX };
        for index in 0..board.cells().len() {
            if !board.is_cell_empty(index) {
                continue;
            }
            let mut trial = Trial::new(board, index, mover);
            let score = self.minimax(&mut trial, !ai_to_move);
            best = if ai_to_move {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        ai_to_move: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.visited += 1;
        if let Some(score) = self.terminal_score(board) {
            return score;
        }

        let mover = self.mover(ai_to_move);
        let mut best = if ai_to_move { i32::MIN } else { i32::MAX };
        for index in 0..board.cells().len() {
            if !board.is_cell_empty(index) {
                continue;
            }
            let score = {
                let mut trial = Trial::new(board, index, mover);
                self.alpha_beta(&mut trial, !ai_to_move, alpha, beta)
            };
            if ai_to_move {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use strum::IntoEnumIterator;

    const A: Cell = Cell::Occupied(Player::Circle);
    const B: Cell = Cell::Occupied(Player::Cross);
    const E: Cell = Cell::Empty;

    fn board(cells: [Cell; 9]) -> Board {
        Board::from_cells(3, cells)
    }

    #[test]
    fn test_blocks_immediate_win() {
        let mut board = board([A, A, E, E, B, E, E, E, E]);
        for strategy in SearchStrategy::iter() {
            assert_eq!(best_move(&mut board, Player::Cross, strategy), 2);
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // B can win on the middle row; A threatens the top row.
        let mut board = board([A, A, E, B, B, E, A, E, E]);
        for strategy in SearchStrategy::iter() {
            assert_eq!(best_move(&mut board, Player::Cross, strategy), 5);
        }
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = board([A, E, E, E, B, E, E, E, A]);
        let before = board.clone();
        for strategy in SearchStrategy::iter() {
            best_move(&mut board, Player::Cross, strategy);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_terminal_scores() {
        let mut won = board([B, B, B, A, A, E, A, E, E]);
        assert_eq!(minimax(&mut won, Player::Cross, false), WIN);
        assert_eq!(minimax(&mut won, Player::Circle, true), LOSS);

        let mut drawn = board([B, A, B, A, B, B, A, B, A]);
        assert_eq!(minimax(&mut drawn, Player::Cross, true), DRAW);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new(3);
        assert_eq!(minimax(&mut board, Player::Cross, true), DRAW);
        assert_eq!(alpha_beta(&mut board, Player::Cross, false), DRAW);
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_strategies_agree_on_every_early_position() {
        for first in 0..9 {
            for second in 0..9 {
                let mut board = Board::new(3);
                board.place(first, Player::Circle);
                if !board.place(second, Player::Cross) {
                    continue;
                }
                for ai_to_move in [true, false] {
                    assert_eq!(
                        minimax(&mut board, Player::Cross, ai_to_move),
                        alpha_beta(&mut board, Player::Cross, ai_to_move),
                        "positions {first},{second}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_trial_clears_on_drop() {
        let mut board = Board::new(3);
        {
            let trial = Trial::new(&mut board, 4, Player::Cross);
            assert_eq!(trial.cell(4), B);
        }
        assert!(board.is_cell_empty(4));
    }

    #[test]
    fn test_trial_clears_on_unwind() {
        let mut board = Board::new(3);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _trial = Trial::new(&mut board, 0, Player::Circle);
            panic!("deeper search failed");
        }));
        assert!(result.is_err());
        assert_eq!(board, Board::new(3));
    }

    #[test]
    #[should_panic(expected = "already over")]
    fn test_finished_board_panics() {
        let mut board = board([A, A, A, B, B, E, E, E, E]);
        best_move(&mut board, Player::Cross, SearchStrategy::Exhaustive);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1);
        assert_eq!(best_move(&mut board, Player::Cross, SearchStrategy::AlphaBeta), 0);
    }
}
