//! Application state and logic.

use super::input::{Action, action_for};
use crate::status::status_line;
use crossterm::event::KeyCode;
use noughts_core::{GameMode, GameSession, OpponentPolicy, Position, WinningLine};
use tracing::{debug, info, warn};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    policy: Box<dyn OpponentPolicy + Send>,
}

impl App {
    /// Creates a new application.
    pub fn new(mode: GameMode, policy: Box<dyn OpponentPolicy + Send>) -> Self {
        Self {
            session: GameSession::new(mode),
            cursor: Position::default(),
            policy,
        }
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> String {
        status_line(&self.session)
    }

    /// Line to highlight, once someone has won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.session.check_winner()
    }

    /// True when the computer should reply next.
    pub fn awaiting_computer(&self) -> bool {
        self.session.awaiting_computer()
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        let Some(action) = action_for(self.cursor, key) else {
            return Control::Continue;
        };
        debug!(?action, "Handling key");

        match action {
            Action::Quit => return Control::Quit,
            Action::Cursor(pos) => self.cursor = pos,
            Action::PlayCursor => self.select(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::Reset => self.session.reset(),
            Action::Mode(mode) => self.session.set_mode(mode),
        }
        Control::Continue
    }

    /// Plays the human's mark at `pos`; a rejected move has no effect.
    fn select(&mut self, pos: Position) {
        match self.session.apply_human_move(pos.to_index()) {
            Ok(turn) => debug!(played = %turn.played, outcome = ?turn.outcome, "Human move"),
            Err(e) => debug!(position = %pos, error = %e, "Ignored move"),
        }
    }

    /// Lets the computer reply, if it is its turn.
    pub fn computer_move(&mut self) {
        if !self.session.awaiting_computer() {
            return;
        }
        match self.session.apply_computer_move(self.policy.as_mut()) {
            Ok(turn) => info!(played = %turn.played, outcome = ?turn.outcome, "Computer move"),
            Err(e) => warn!(error = %e, "Computer could not move"),
        }
    }
}
