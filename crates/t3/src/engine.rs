//! Turn controller and computer opponent.

use crate::search::{self, SearchStrategy};
use crate::{Board, GameConfig, GameOutcome, Move, MoveError, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// What happened during one call to [`Engine::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// The move requested by the caller.
    pub human: Move,
    /// The computer's answer, if it was the computer's turn next.
    pub reply: Option<Move>,
    /// Outcome after both moves.
    pub outcome: GameOutcome,
}

/// Tic-tac-toe game engine.
///
/// The engine owns the board and whose turn it is. A move from the caller is
/// validated by the board, and when the turn passes to the computer its
/// answer is searched and played before [`Engine::play`] returns. There is
/// no state in which the computer is "thinking".
///
/// When the game ends the current player is left on the player who made
/// the last move.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    initial_player: Player,
    current_player: Player,
    ai_player: Option<Player>,
    strategy: SearchStrategy,
}

impl Engine {
    /// Creates an engine where the computer plays [`Player::Cross`].
    ///
    /// If `initial_player` is the computer's mark, the computer opens
    /// immediately.
    #[instrument(skip(board))]
    pub fn new(board: Board, initial_player: Player) -> Self {
        Self::with_ai(
            board,
            initial_player,
            Some(Player::Cross),
            SearchStrategy::default(),
        )
    }

    /// Creates an engine with an explicit computer player, or none for two
    /// people sharing the board.
    #[instrument(skip(board))]
    pub fn with_ai(
        board: Board,
        initial_player: Player,
        ai_player: Option<Player>,
        strategy: SearchStrategy,
    ) -> Self {
        let mut engine = Self {
            board,
            initial_player,
            current_player: initial_player,
            ai_player,
            strategy,
        };
        engine.open_if_ai_starts();
        engine
    }

    /// Creates an engine on a fresh board described by `config`.
    ///
    /// # Panics
    ///
    /// Panics if the configured size is zero; use
    /// [`GameConfig::validate`] on untrusted input first.
    #[instrument]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_ai(
            Board::new(*config.size()),
            *config.first_player(),
            config.ai(),
            *config.search(),
        )
    }

    /// Plays `index` for the current player.
    ///
    /// Returns [`MoveError::GameOver`] or [`MoveError::SquareOccupied`]
    /// without touching the board or the turn. Otherwise the move is applied
    /// and, unless it ended the game, the turn passes on; if the computer
    /// is next, its reply is applied too.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a cell of the board.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, index: usize) -> Result<TurnReport, MoveError> {
        if self.board.is_finished() {
            debug!("Ignoring move on a finished game");
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        if !self.board.place(index, mover) {
            debug!("Ignoring move on an occupied cell");
            return Err(MoveError::SquareOccupied(index));
        }
        let human = Move::new(mover, index);

        let reply = if self.end_turn() && self.is_ai_turn() {
            Some(self.ai_move())
        } else {
            None
        };

        Ok(TurnReport {
            human,
            reply,
            outcome: self.outcome(),
        })
    }

    /// Clears the board and gives the first move back to the initial player.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.current_player = self.initial_player;
        info!(first = %self.initial_player, "Game restarted");
        self.open_if_ai_starts();
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Checks if the game is over.
    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    /// Derives the current outcome from the board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Player who moves first after every restart.
    pub fn initial_player(&self) -> Player {
        self.initial_player
    }

    /// The computer's mark, if the computer plays.
    pub fn ai_player(&self) -> Option<Player> {
        self.ai_player
    }

    /// Search algorithm used by the computer.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    fn is_ai_turn(&self) -> bool {
        self.ai_player == Some(self.current_player)
    }

    /// Passes the turn on after a move, returning `false` if the move ended
    /// the game.
    fn end_turn(&mut self) -> bool {
        match self.board.outcome() {
            GameOutcome::InProgress => {
                self.current_player = self.current_player.opposite();
                true
            }
            outcome => {
                info!(?outcome, last_mover = %self.current_player, "Game over");
                false
            }
        }
    }

    fn open_if_ai_starts(&mut self) {
        if self.is_ai_turn() && !self.board.is_finished() {
            self.ai_move();
        }
    }

    fn ai_move(&mut self) -> Move {
        let ai = self.current_player;
        let index = search::best_move(&mut self.board, ai, self.strategy);
        let placed = self.board.place(index, ai);
        assert!(placed, "search selected a cell the board rejected: {index}");
        info!(player = %ai, index, "Computer moved");
        self.end_turn();
        Move::new(ai, index)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Board::default(), Player::Circle)
    }
}
