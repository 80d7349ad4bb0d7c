//! Alternating marks invariant: X, O, X, O, ... across every snapshot.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: entry `i` holds exactly `i` marks, and X leads O by 0 or 1.
///
/// Together these mean X moved first and the players alternated.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().all(|(step, entry)| {
            let board = entry.board();
            let x = board.count(Mark::X);
            let o = board.count(Mark::O);
            x + o == step && (x == o || x == o + 1)
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
