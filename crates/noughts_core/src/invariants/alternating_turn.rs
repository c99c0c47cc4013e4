//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Mark};

/// Invariant: Marks alternate turns, X first.
///
/// While the game is active the current player is X after an even number of
/// moves and O after an odd number. Once it has ended the turn is not
/// advanced, so the current player is the one who made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        if session.is_active() {
            let expected = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
            session.current_player() == expected
        } else {
            history
                .last()
                .is_none_or(|last| last.mark == session.current_player())
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
