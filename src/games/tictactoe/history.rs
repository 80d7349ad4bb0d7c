//! Board snapshots and the rewindable timeline that holds them.

use super::types::Board;
use serde::{Deserialize, Serialize};

/// A board snapshot recorded after a move (or the empty starting board).
///
/// Entries are never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    pub(super) fn new(board: Board) -> Self {
        Self { board }
    }

    /// The recorded board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Ordered board snapshots, starting with the empty board.
///
/// Never empty: entry 0 is always the game start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at the given step.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Most recent entry.
    pub fn last(&self) -> &HistoryEntry {
        // entries is never empty
        &self.entries[self.entries.len() - 1]
    }

    /// Iterates entries from game start.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Drops every entry after `step` and appends `board`.
    ///
    /// Returns the index of the new entry.
    pub(super) fn branch(&mut self, step: usize, board: Board) -> usize {
        self.entries.truncate(step + 1);
        self.entries.push(HistoryEntry::new(board));
        self.entries.len() - 1
    }

    #[cfg(test)]
    pub(super) fn entries_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Label for a history entry, as shown in a move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    step: usize,
}

impl MoveDescriptor {
    /// Descriptor for the given step.
    pub fn new(step: usize) -> Self {
        Self { step }
    }

    /// Step this descriptor jumps to.
    pub fn step(&self) -> usize {
        self.step
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.step {
            0 => write!(f, "Go to game start"),
            n => write!(f, "Go to move #{}", n),
        }
    }
}
