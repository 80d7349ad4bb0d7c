//! Step bounds invariant: the viewed step always names a history entry.

use super::super::GameState;
use super::Invariant;

/// Invariant: history is non-empty and `current_step < history_len`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history().is_empty() && game.current_step() < game.history_len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_after_jump_back_holds() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.jump_to(0);
        assert!(StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_step_violates() {
        let mut game = GameState::new();
        game.current_step = 3;
        assert!(!StepInBoundsInvariant::holds(&game));
    }
}
