//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Preconditions always run; the postcondition runs in
//! debug builds.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{Board, GameSession, InvalidMove, Move};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvalidMove>;
}

/// Precondition: The session has not ended.
pub struct GameActive;

impl GameActive {
    /// Rejects moves once the game is won or drawn.
    pub fn check(session: &GameSession) -> Result<(), InvalidMove> {
        if session.is_active() {
            Ok(())
        } else {
            Err(InvalidMove::GameOver)
        }
    }
}

/// Precondition: The index is on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects indices outside 0-8.
    pub fn check(mov: &Move) -> Result<(), InvalidMove> {
        if mov.index < Board::CELLS {
            Ok(())
        } else {
            Err(InvalidMove::OutOfBounds(mov.index))
        }
    }
}

/// Precondition: It must be the mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a mark that is not the current player.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), InvalidMove> {
        if mov.mark == session.current_player() {
            Ok(())
        } else {
            Err(InvalidMove::WrongPlayer(mov.mark))
        }
    }
}

/// Precondition: The square at the move's index must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), InvalidMove> {
        if session.board().is_empty(mov.index) {
            Ok(())
        } else {
            Err(InvalidMove::SquareOccupied(mov.index))
        }
    }
}

/// Composite precondition for a legal move.
///
/// Checked in order: active, in bounds, right turn, empty square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), InvalidMove> {
        GameActive::check(session)?;
        InBounds::check(mov)?;
        PlayersTurn::check(mov, session)?;
        SquareIsEmpty::check(mov, session)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// The postcondition holds after a completed turn (move applied, then the
/// game ended or the turn advanced), not between the two steps.
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), InvalidMove> {
        LegalMove::check(action, session)
    }

    fn post(_before: &GameSession, after: &GameSession) -> Result<(), InvalidMove> {
        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            InvalidMove::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
