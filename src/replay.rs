//! Headless driver: feed actions to a game and render the result as text.

use crate::games::tictactoe::{Action, GameState, GameStatus, IgnoreReason, Mark, Square, Transition};
use serde::Serialize;
use tracing::{debug, instrument};

/// What a presentation layer shows for one game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Cell contents in row-major order.
    pub cells: [Option<Mark>; 9],
    /// Viewed history step.
    pub current_step: usize,
    /// `Winner: <mark>` or `Next player: <mark>`.
    pub status_line: String,
    /// Status distinguishing a draw.
    pub status: GameStatus,
    /// Move list labels, one per history entry.
    pub moves: Vec<String>,
}

impl GameView {
    /// Captures the view of a game state.
    pub fn of(game: &GameState) -> Self {
        let squares = *game.current_board().squares();
        Self {
            cells: squares.map(Square::mark),
            current_step: game.current_step(),
            status_line: game.status_line(),
            status: game.status(),
            moves: game.moves().map(|m| m.to_string()).collect(),
        }
    }

    /// Renders the view as plain text.
    pub fn render(&self, game: &GameState) -> String {
        let mut out = game.current_board().display();
        out.push_str("\n\n");
        out.push_str(&self.status_line);
        out.push('\n');
        for (step, label) in self.moves.iter().enumerate() {
            let marker = if step == self.current_step { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, step + 1, label));
        }
        out
    }
}

/// Applies `actions` to a fresh game, returning the final state and every
/// transition in order.
///
/// Jumps past the end of history are ignored rather than treated as
/// contract violations, since command-line input is untrusted.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn replay(actions: &[Action]) -> (GameState, Vec<Transition>) {
    let mut game = GameState::new();
    let mut transitions = Vec::with_capacity(actions.len());

    for action in actions {
        let transition = match *action {
            Action::JumpTo(step) if step >= game.history_len() => {
                Transition::Ignored(IgnoreReason::StepOutOfRange(step))
            }
            action => game.dispatch(action),
        };
        debug!(%action, %transition, "Replayed action");
        transitions.push(transition);
    }

    (game, transitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_replay_ignores_bad_jump() {
        let (game, transitions) = replay(&[Action::Place(Position::Center), Action::JumpTo(5)]);
        assert_eq!(game.current_step(), 1);
        assert_eq!(transitions[1], Transition::Ignored(IgnoreReason::StepOutOfRange(5)));
    }

    #[test]
    fn test_view_of_new_game() {
        let view = GameView::of(&GameState::new());
        assert_eq!(view.cells, [None; 9]);
        assert_eq!(view.status_line, "Next player: X");
        assert_eq!(view.moves, vec!["Go to game start"]);
    }

    #[test]
    fn test_render_marks_current_step() {
        let (game, _) = replay(&[
            Action::Place(Position::TopLeft),
            Action::Place(Position::Center),
            Action::JumpTo(1),
        ]);
        let text = GameView::of(&game).render(&game);
        assert!(text.starts_with("X|2|3\n-+-+-\n4|5|6"));
        assert!(text.contains("Next player: O"));
        assert!(text.contains("> 2. Go to move #1"));
        assert!(text.contains("  3. Go to move #2"));
    }

    #[test]
    fn test_view_serializes() {
        let (game, _) = replay(&[Action::Place(Position::Center)]);
        let json = serde_json::to_value(GameView::of(&game)).expect("serializable");
        assert_eq!(json["cells"][4], "X");
        assert_eq!(json["status_line"], "Next player: O");
    }
}
