//! Game state reducer for tic-tac-toe with a rewindable timeline.
//!
//! [`GameState`] is a value: [`GameState::reduce`] consumes a state and an
//! [`Action`] and returns the next state together with the [`Transition`]
//! that produced it. The `&mut self` methods are thin wrappers for callers
//! that keep one state in place.

use super::action::{Action, IgnoreReason, Transition};
use super::contracts::{Contract, MoveContract};
use super::history::{History, HistoryEntry, MoveDescriptor};
use super::rules::{check_winner, is_full};
use super::types::{Board, GameStatus, Mark, Square};
use super::Position;
use serde::Serialize;
use tracing::{debug, instrument};

/// Full move history plus the step currently being viewed.
///
/// The mark to move is derived from the parity of the viewed step, so
/// jumping back also rewinds whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(super) history: History,
    pub(super) current_step: usize,
}

impl GameState {
    /// Creates a game at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
        }
    }

    /// Applies an action, returning the next state and what happened.
    #[instrument(skip(self), fields(step = self.current_step, history_len = self.history.len()))]
    pub fn reduce(self, action: Action) -> (Self, Transition) {
        let (next, transition) = match action {
            Action::Place(pos) => self.place(pos),
            Action::JumpTo(step) => self.jump(step),
        };
        debug!(%transition, step = next.current_step, "Reduced action");
        (next, transition)
    }

    fn place(mut self, pos: Position) -> (Self, Transition) {
        if let Err(reason) = MoveContract::pre(&self, &pos) {
            return (self, Transition::Ignored(reason));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.next_mark();
        let mut squares = self.current_board().clone();
        squares.set(pos, Square::Occupied(mark));
        self.current_step = self.history.branch(self.current_step, squares);

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, &self) {
            panic!("{err}");
        }

        let step = self.current_step;
        (self, Transition::Placed { mark, position: pos, step })
    }

    fn jump(mut self, step: usize) -> (Self, Transition) {
        debug_assert!(
            step < self.history.len(),
            "jump to step {} with only {} history entries",
            step,
            self.history.len()
        );
        if step >= self.history.len() {
            return (self, Transition::Ignored(IgnoreReason::StepOutOfRange(step)));
        }

        self.current_step = step;
        (self, Transition::Jumped { step })
    }

    /// Applies an action in place.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let (next, transition) = std::mem::take(self).reduce(action);
        *self = next;
        transition
    }

    /// Places the next mark at `pos`.
    ///
    /// Ignored, with no state change, if the viewed board already has a
    /// winner or the square is occupied. A move made after jumping back
    /// discards every later history entry.
    pub fn apply_move(&mut self, pos: Position) -> Transition {
        self.dispatch(Action::Place(pos))
    }

    /// Places the next mark at a raw cell index (0-8).
    ///
    /// Indices outside the board are a caller bug: they panic in debug
    /// builds and are ignored in release builds.
    pub fn apply_move_at(&mut self, index: usize) -> Transition {
        debug_assert!(index < 9, "cell index {} is outside the board", index);
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => Transition::Ignored(IgnoreReason::CellOutOfRange(index)),
        }
    }

    /// Views the board as it was after `step` moves. History is untouched.
    ///
    /// Steps beyond the end of history are a caller bug: they panic in
    /// debug builds and are ignored in release builds.
    pub fn jump_to(&mut self, step: usize) -> Transition {
        self.dispatch(Action::JumpTo(step))
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history
            .get(self.current_step)
            .unwrap_or_else(|| self.history.last())
            .board()
    }

    /// Index of the viewed history entry.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// All recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot at `step`, if recorded.
    pub fn entry(&self, step: usize) -> Option<&HistoryEntry> {
        self.history.get(step)
    }

    /// Number of history entries, i.e. the number of jump targets.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Mark to move at the current step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// Status of the current board, distinguishing a full-board draw.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_mark(),
            }
        }
    }

    /// Two-form status line: `Winner: <mark>` or `Next player: <mark>`.
    ///
    /// A full board without a winner still reports the next player; use
    /// [`GameState::status`] to tell a draw apart.
    pub fn status_line(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {}", winner),
            None => format!("Next player: {}", self.next_mark()),
        }
    }

    /// One descriptor per history entry, from game start.
    pub fn moves(&self) -> impl Iterator<Item = MoveDescriptor> + use<> {
        (0..self.history.len()).map(MoveDescriptor::new)
    }

    /// Positions a move would be accepted at on the current board.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.next_mark(), Mark::X);
        assert_eq!(game.current_board(), &Board::new());
    }

    #[test]
    fn test_reduce_is_pure() {
        let game = GameState::new();
        let (next, transition) = game.clone().reduce(Action::Place(Position::Center));

        assert_eq!(game, GameState::new());
        assert_eq!(
            transition,
            Transition::Placed {
                mark: Mark::X,
                position: Position::Center,
                step: 1,
            }
        );
        assert_eq!(next.current_board().get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        let before = game.clone();

        let transition = game.apply_move(Position::Center);
        assert_eq!(
            transition,
            Transition::Ignored(IgnoreReason::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_rewinds_turn() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::BottomRight);

        assert_eq!(game.jump_to(1), Transition::Jumped { step: 1 });
        assert_eq!(game.next_mark(), Mark::O);
        assert_eq!(game.history_len(), 4);
    }

    #[test]
    fn test_move_after_jump_truncates() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::BottomRight);
        game.jump_to(1);

        game.apply_move(Position::TopRight);
        assert_eq!(game.history_len(), 3);
        assert_eq!(game.current_step(), 2);
        assert_eq!(game.current_board().get(Position::TopLeft), Square::Empty);
        assert_eq!(game.current_board().get(Position::TopRight), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let mut game = GameState::new();
        for index in [0, 4, 1, 3, 2] {
            game.apply_move_at(index);
        }
        assert!(game.valid_moves().is_empty());

        game.jump_to(4);
        assert_eq!(game.valid_moves().len(), 5);
    }

    #[test]
    fn test_moves_descriptors() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        let labels: Vec<String> = game.moves().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["Go to game start", "Go to move #1"]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the board")]
    fn test_cell_out_of_range_panics_in_debug() {
        GameState::new().apply_move_at(9);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "history entries")]
    fn test_step_out_of_range_panics_in_debug() {
        GameState::new().jump_to(1);
    }
}
