//! Game configuration loaded from TOML.

use crate::{DEFAULT_SIZE, Player, SearchStrategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Largest board on which full-depth search stays interactive.
const MAX_SEARCHABLE_SIZE: usize = 3;

/// Settings for a new game.
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// size = 3
/// first_player = "circle"
/// computer_opponent = true
/// ai_player = "cross"
/// search = "exhaustive"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the board.
    size: usize,

    /// Player who moves first after every (re)start.
    first_player: Player,

    /// Whether one side is played by the computer.
    computer_opponent: bool,

    /// Mark played by the computer when `computer_opponent` is set.
    ai_player: Player,

    /// Search algorithm used by the computer.
    search: SearchStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            first_player: Player::Circle,
            computer_opponent: true,
            ai_player: Player::Cross,
            search: SearchStrategy::default(),
        }
    }
}

impl GameConfig {
    /// Creates a config for two people sharing one board.
    #[instrument]
    pub fn two_player(size: usize) -> Self {
        Self {
            size,
            computer_opponent: false,
            ..Self::default()
        }
    }

    /// Sets the board size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the player who moves first.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Lets the computer play `player`, or nobody when `None`.
    pub fn with_ai_player(mut self, player: Option<Player>) -> Self {
        self.computer_opponent = player.is_some();
        if let Some(player) = player {
            self.ai_player = player;
        }
        self
    }

    /// Sets the search algorithm.
    pub fn with_search(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }

    /// The computer's mark, if the computer plays.
    pub fn ai(&self) -> Option<Player> {
        self.computer_opponent.then_some(self.ai_player)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            size = config.size,
            first_player = %config.first_player,
            ai = ?config.ai(),
            search = %config.search,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks the values a TOML file cannot rule out by type alone.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::new("Board size must be at least 1"));
        }
        if self.computer_opponent && self.size > MAX_SEARCHABLE_SIZE {
            warn!(
                size = self.size,
                "Computer search is exhaustive and will be very slow on boards larger than {}x{}",
                MAX_SEARCHABLE_SIZE,
                MAX_SEARCHABLE_SIZE
            );
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
