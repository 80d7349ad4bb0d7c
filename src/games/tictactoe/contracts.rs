//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! A failed precondition means the move is ignored; a failed postcondition
//! means the reducer itself is broken.

use super::action::IgnoreReason;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::check_winner;
use super::state::GameState;
use super::{Board, Position};
use derive_more::{Display, Error};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - decides whether the action applies
/// - Postcondition: {Q(before, after)} - must hold after applying it
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoreReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantError>;
}

/// A postcondition failed after a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Postcondition failed: {}", message)]
pub struct InvariantError {
    /// Description of every failed check.
    pub message: String,
}

impl InvariantError {
    /// Creates a new invariant error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The viewed board has no winner yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Checks the board for a completed line.
    #[instrument(level = "trace", skip(board))]
    pub fn check(board: &Board) -> Result<(), IgnoreReason> {
        match check_winner(board) {
            Some(winner) => Err(IgnoreReason::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that `pos` is free on the board.
    #[instrument(level = "trace", skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), IgnoreReason> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: no winner yet and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), IgnoreReason> {
        GameNotWon::check(board)?;
        SquareIsEmpty::check(pos, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Viewed board has no winner
/// - Square must be empty
///
/// Postconditions:
/// - Step advanced by one and is the last history entry
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), IgnoreReason> {
        LegalMove::check(*pos, game.current_board())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), InvariantError> {
        let mut failures = Vec::new();

        if after.current_step() != before.current_step() + 1 {
            failures.push("step advanced by exactly one".to_string());
        }
        if after.history_len() != after.current_step() + 1 {
            failures.push("new entry is the last history entry".to_string());
        }
        if let Err(violations) = TicTacToeInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            warn!(?failures, "Move postcondition violated");
            Err(InvariantError::new(failures.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{HistoryEntry, Mark, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);

        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(IgnoreReason::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_won_checked_first() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            game.apply_move(pos);
        }

        // Occupied and won: the win takes precedence
        assert_eq!(
            MoveContract::pre(&game, &Position::TopLeft),
            Err(IgnoreReason::GameOver(Mark::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(Position::Center);

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_unchanged_step() {
        let before = GameState::new();
        assert!(MoveContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(Position::Center);

        let mut board = after.current_board().clone();
        board.set(Position::TopLeft, Square::Occupied(Mark::O));
        after.history.entries_mut()[1] = HistoryEntry::new(board);

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(err.message.contains("exactly one mark"));
    }
}
