//! t3 - tic-tac-toe with an unbeatable computer opponent
//!
//! The crate holds the game model and the decision engine. Rendering and
//! input handling belong to the host application, which reads board state
//! and forwards the cells the user picks.
//!
//! # Architecture
//!
//! - **Board**: N×N grid of cells, the single move-legality gate, and
//!   win/draw detection
//! - **Engine**: whose turn it is, and the computer's reply after each move
//! - **Search**: full-depth minimax (optionally alpha-beta pruned)
//! - **Session**: row/column taps and render snapshots for a UI
//!
//! # Example
//!
//! ```
//! use t3::{Board, Engine, Player};
//!
//! let mut engine = Engine::new(Board::new(3), Player::Circle);
//! let report = engine.play(4).expect("empty board accepts the centre");
//! assert!(report.reply.is_some());
//! assert!(!engine.is_finished());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod engine;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, DEFAULT_SIZE};
pub use config::{ConfigError, GameConfig};
pub use engine::{Engine, TurnReport};
pub use position::Position;
pub use search::SearchStrategy;
pub use session::{BoardSession, BoardSnapshot};
pub use types::{Cell, GameOutcome, Player};
