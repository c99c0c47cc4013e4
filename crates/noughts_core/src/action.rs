//! Moves and move rejection.
//!
//! Moves are domain events recorded in the session history. A move that
//! breaks a precondition is rejected with [`InvalidMove`] and changes nothing.

use super::Mark;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Board index (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index is not on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The opponent policy found no empty square.
    #[display("No move available")]
    NoMoveAvailable,

    /// A postcondition failed after the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for InvalidMove {}
