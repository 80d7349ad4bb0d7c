//! Application state and key handling.

use crate::games::tictactoe::{GameState, Position, Transition};
use crossterm::event::KeyCode;
use tracing::{debug, info};

use super::input::{digit_position, move_cursor, move_selection};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move list.
    History,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    announce_draw: bool,
    last_transition: Option<Transition>,
}

impl App {
    /// Creates a new application.
    pub fn new(announce_draw: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            announce_draw,
            last_transition: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Status shown under the board.
    pub fn status_text(&self) -> String {
        if self.announce_draw {
            self.game.status().to_string()
        } else {
            self.game.status_line()
        }
    }

    /// Feedback about the last key, if it was ignored.
    pub fn hint(&self) -> Option<String> {
        match self.last_transition {
            Some(Transition::Ignored(reason)) => Some(format!("Ignored: {}", reason)),
            _ => None,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Command {
        debug!(?key, focus = ?self.focus, "Handling key");

        if let Some(pos) = digit_position(key) {
            self.cursor = pos;
            self.place(pos);
            return Command::Continue;
        }

        match (key, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => return Command::Quit,
            (KeyCode::Char('r'), _) => self.restart(),
            (KeyCode::Tab, Focus::Board) => {
                self.focus = Focus::History;
                self.selected_step = self.game.current_step();
            }
            (KeyCode::Tab, Focus::History) => self.focus = Focus::Board,
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => self.place(self.cursor),
            (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => self.jump(self.selected_step),
            (code, Focus::Board) => self.cursor = move_cursor(self.cursor, code),
            (code, Focus::History) => {
                self.selected_step = move_selection(self.selected_step, self.game.history_len(), code)
            }
        }

        Command::Continue
    }

    fn place(&mut self, pos: Position) {
        let transition = self.game.apply_move(pos);
        debug!(%transition, "Move handled");
        self.selected_step = self.game.current_step();
        self.last_transition = Some(transition);
    }

    fn jump(&mut self, step: usize) {
        let transition = self.game.jump_to(step);
        debug!(%transition, "Jump handled");
        self.last_transition = Some(transition);
    }

    /// Starts a new game, discarding all history.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.cursor = Position::Center;
        self.selected_step = 0;
        self.last_transition = None;
    }
}
