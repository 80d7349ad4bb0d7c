//! Tic-tac-toe with a rewindable move history.
//!
//! [`GameState`] is the reducer, [`check_winner`] the win detector. Every
//! other type here exists to feed or describe those two.

pub mod action;
pub mod contracts;
pub mod history;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod state;
pub mod types;

pub use action::{Action, IgnoreReason, Transition};
pub use contracts::{Contract, GameNotWon, InvariantError, LegalMove, MoveContract, SquareIsEmpty};
pub use history::{History, HistoryEntry, MoveDescriptor};
pub use invariants::{
    AlternatingMarksInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicHistoryInvariant, StepInBoundsInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use rules::{LINES, check_winner, is_draw, is_full};
pub use state::GameState;
pub use types::{Board, GameStatus, Mark, Square};
