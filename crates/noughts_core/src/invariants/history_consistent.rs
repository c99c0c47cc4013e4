//! History consistency invariant: the history replays onto the board.

use super::Invariant;
use crate::{Board, GameSession, Square};

/// Invariant: Replaying the history onto an empty board reproduces the board.
///
/// Every move filled an empty square, and no square was filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();

        for mov in session.history() {
            if !replayed.is_empty(mov.index) {
                return false;
            }
            replayed.set(mov.index, Square::Occupied(mov.mark));
        }

        replayed == *session.board()
    }

    fn description() -> &'static str {
        "History replays onto the board"
    }
}
