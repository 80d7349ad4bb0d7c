//! Monotonic history invariant: each snapshot extends the one before it.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: consecutive entries differ in exactly one square, which went
/// from Empty to Occupied.
///
/// Occupied squares are never overwritten or cleared along the timeline.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let entries: Vec<_> = game.history().iter().collect();

        entries.windows(2).all(|pair| {
            let before = pair[0].board();
            let after = pair[1].board();
            let mut changed = 0;

            for pos in Position::ALL {
                match (before.get(pos), after.get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(_)) => changed += 1,
                    _ => return false,
                }
            }

            changed == 1
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to the previous board"
    }
}
