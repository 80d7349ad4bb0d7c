//! Tic-tac-toe with a rewindable move history.
//!
//! The game core is a reducer over an immutable timeline of board
//! snapshots: every accepted move appends a snapshot, and any snapshot
//! can be viewed again by jumping to its step. Making a move while
//! viewing an older step discards the snapshots after it.
//!
//! # Architecture
//!
//! - **Games**: [`GameState`] reducer and [`check_winner`] win detector
//! - **Replay**: headless driver rendering a [`GameView`]
//! - **TUI**: ratatui front-end over the same public API
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Mark};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     game.apply_move_at(cell);
//! }
//! assert_eq!(game.winner(), Some(Mark::X));
//! assert_eq!(game.status_line(), "Winner: X");
//!
//! game.jump_to(2);
//! assert_eq!(game.status_line(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod games;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Replay
pub use replay::{GameView, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, GameState, GameStatus, History, HistoryEntry, IgnoreReason, Mark, MoveDescriptor,
    Position, Square, Transition, check_winner, is_draw, is_full,
};
