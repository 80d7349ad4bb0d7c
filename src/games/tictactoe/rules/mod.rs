//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They never look at
//! history or whose turn it is, so the same rules apply to any entry
//! in the timeline.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
