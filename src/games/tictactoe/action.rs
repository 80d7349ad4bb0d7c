//! First-class action types for tic-tac-toe.
//!
//! Actions are the only way a game state changes. Each reduction reports
//! what happened as a [`Transition`], so a rejected click is a value the
//! caller can inspect rather than an error it must handle.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Input driving a game state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the next mark at a position.
    #[display("place {_0}")]
    Place(Position),
    /// View the board as it was after the given step.
    #[display("jump to step {_0}")]
    JumpTo(usize),
}

/// What a reduction did to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Transition {
    /// A mark was placed and appended as a new history entry.
    #[display("{mark} played {position} (move #{step})")]
    Placed {
        /// The mark placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// The new current step.
        step: usize,
    },
    /// The viewed step changed.
    #[display("jumped to step {step}")]
    Jumped {
        /// The new current step.
        step: usize,
    },
    /// The action was ignored; the state is unchanged.
    #[display("ignored: {_0}")]
    Ignored(IgnoreReason),
}

impl Transition {
    /// True if the state changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The viewed board already has a winner.
    #[display("game already won by {_0}")]
    GameOver(Mark),

    /// Cell index outside the board.
    #[display("cell {_0} is outside the board")]
    CellOutOfRange(usize),

    /// Step index beyond the end of history.
    #[display("step {_0} is beyond the end of history")]
    StepOutOfRange(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_display() {
        let placed = Transition::Placed {
            mark: Mark::X,
            position: Position::Center,
            step: 1,
        };
        assert_eq!(placed.to_string(), "X played Center (move #1)");
        assert!(placed.is_applied());

        let ignored = Transition::Ignored(IgnoreReason::GameOver(Mark::O));
        assert_eq!(ignored.to_string(), "ignored: game already won by O");
        assert!(!ignored.is_applied());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Place(Position::TopLeft).to_string(), "place Top-left");
        assert_eq!(Action::JumpTo(3).to_string(), "jump to step 3");
    }
}
