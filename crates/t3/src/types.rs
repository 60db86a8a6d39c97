//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Player {
    /// The circle mark (moves first by default).
    Circle,
    /// The cross mark (the computer's mark by default).
    Cross,
}

impl Player {
    /// Returns the other player.
    pub fn opposite(self) -> Self {
        match self {
            Player::Circle => Player::Cross,
            Player::Cross => Player::Circle,
        }
    }

    /// Single-character symbol used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Player::Circle => 'O',
            Player::Cross => 'X',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns `true` for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// Status of a game, derived from the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// The player completed a line.
    Won(Player),
    /// Every cell is occupied and nobody completed a line.
    Draw,
}

impl GameOutcome {
    /// Returns `true` unless the game is still in progress.
    pub fn is_finished(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Returns the winner, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Won(player) => Some(player),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}
