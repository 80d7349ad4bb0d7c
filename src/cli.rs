//! Command-line interface for tictactoe_timeline.

use crate::games::tictactoe::{Action, Position};
use clap::{Parser, Subcommand};
use derive_more::{Display, Error};
use std::path::PathBuf;
use std::str::FromStr;

/// Tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show "Draw" once the board is full with no winner
        #[arg(long)]
        announce_draw: bool,
    },

    /// Apply a sequence of actions and print the resulting game
    Replay {
        /// Cell index 0-8 or label (e.g. center) to place a mark, or @N to jump to step N
        #[arg(required = true)]
        actions: Vec<ReplayAction>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// One action given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayAction(pub Action);

/// Malformed replay action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid action '{}': {}", input, reason)]
pub struct ActionParseError {
    /// The rejected argument.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl ActionParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for ReplayAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(step) = s.strip_prefix('@') {
            let step = step
                .parse::<usize>()
                .map_err(|_| ActionParseError::new(s, "expected @ followed by a step number"))?;
            return Ok(ReplayAction(Action::JumpTo(step)));
        }

        if let Ok(index) = s.parse::<usize>() {
            let pos = Position::from_index(index)
                .ok_or_else(|| ActionParseError::new(s, "cell index must be 0-8"))?;
            return Ok(ReplayAction(Action::Place(pos)));
        }

        Position::from_label_or_number(s)
            .map(|pos| ReplayAction(Action::Place(pos)))
            .ok_or_else(|| {
                ActionParseError::new(s, "expected a cell index 0-8, a position label or @STEP")
            })
    }
}
