//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to the rules. They read
//! cells through the board's public accessors and never mutate it, so the
//! board stays the single source of truth for the game outcome.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
