//! Presentation-facing view of a running game.
//!
//! A renderer owns a [`BoardSession`], forwards taps as rows and columns,
//! and redraws from [`BoardSession::snapshot`] whenever a tap was accepted.

use crate::{Cell, Engine, GameConfig, GameOutcome, Player, Position, TurnReport};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Everything a renderer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Cells in row-major order.
    pub cells: Vec<Cell>,
    /// Outcome at the time of the snapshot.
    pub outcome: GameOutcome,
    /// Player to move, or the last mover once the game is over.
    pub to_move: Player,
}

impl BoardSnapshot {
    /// Captures the current state of `engine`.
    pub fn capture(engine: &Engine) -> Self {
        let board = engine.board();
        Self {
            rows: board.rows(),
            columns: board.columns(),
            cells: board.cells().to_vec(),
            outcome: engine.outcome(),
            to_move: engine.current_player(),
        }
    }
}

/// A game plus the last snapshot handed to the renderer.
#[derive(Debug, Clone)]
pub struct BoardSession {
    engine: Engine,
    snapshot: BoardSnapshot,
    last_turn: Option<TurnReport>,
}

impl BoardSession {
    /// Wraps an engine.
    #[instrument(skip(engine))]
    pub fn new(engine: Engine) -> Self {
        let snapshot = BoardSnapshot::capture(&engine);
        Self {
            engine,
            snapshot,
            last_turn: None,
        }
    }

    /// Starts a session on a fresh board described by `config`.
    #[instrument]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(Engine::from_config(config))
    }

    /// Handles a tap on the cell at `row`, `column`.
    ///
    /// Returns `true` if the tap was played and the snapshot changed. Taps
    /// on occupied cells, off the board, or after the game ended are ignored.
    #[instrument(skip(self))]
    pub fn on_cell_tap(&mut self, row: usize, column: usize) -> bool {
        let Some(index) = Position::new(row, column).index_on(self.engine.board()) else {
            warn!("Ignoring tap outside the board");
            return false;
        };
        if !self.engine.board().is_cell_empty(index) {
            return false;
        }

        match self.engine.play(index) {
            Ok(report) => {
                self.last_turn = Some(report);
                self.refresh();
                true
            }
            Err(e) => {
                debug!(error = %e, "Tap rejected");
                false
            }
        }
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.engine.restart();
        self.last_turn = None;
        self.refresh();
    }

    /// State to render.
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Report of the last accepted tap since the game started.
    pub fn last_turn(&self) -> Option<&TurnReport> {
        self.last_turn.as_ref()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    fn refresh(&mut self) {
        self.snapshot = BoardSnapshot::capture(&self.engine);
    }
}
