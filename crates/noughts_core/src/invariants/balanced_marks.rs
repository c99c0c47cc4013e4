//! Balanced marks invariant: X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::{GameSession, Mark};

/// Invariant: X count minus O count is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameSession> for BalancedMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        let x_count = session.board().count(Mark::X);
        let o_count = session.board().count(Mark::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one, X never behind"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Square};

    #[test]
    fn test_new_session_holds() {
        let session = GameSession::new(GameMode::HumanVsHuman);
        assert!(BalancedMarksInvariant::holds(&session));
    }

    #[test]
    fn test_full_game_holds_every_turn() {
        let mut session = GameSession::new(GameMode::HumanVsHuman);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.apply_human_move(index).unwrap();
            assert!(BalancedMarksInvariant::holds(&session));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut session = GameSession::new(GameMode::HumanVsHuman);
        session.board.set(4, Square::Occupied(Mark::O));
        assert!(!BalancedMarksInvariant::holds(&session));
    }
}
