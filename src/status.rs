//! Status line shown under the board.

use noughts_core::{GameMode, GameSession, GameStatus};

/// Shown while the computer's reply is pending.
pub const THINKING: &str = "Computer is thinking...";

/// Describes the session the way the status bar shows it.
pub fn status_line(session: &GameSession) -> String {
    match session.status() {
        GameStatus::Won { mark, .. }
            if session.mode() == GameMode::HumanVsComputer && mark == session.computer_mark() =>
        {
            "Computer wins! 🤖".to_string()
        }
        GameStatus::Won { mark, .. } => format!("Player {} wins! 🎉", mark),
        GameStatus::Drawn => "Game ended in a draw!".to_string(),
        GameStatus::Ended => "Game over".to_string(),
        GameStatus::InProgress if session.awaiting_computer() => THINKING.to_string(),
        GameStatus::InProgress => format!("Player {}'s turn", session.current_player()),
    }
}
