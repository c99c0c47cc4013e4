//! Pure tic-tac-toe game logic.
//!
//! - [`GameSession`] owns the board, the turn, the mode and the active flag,
//!   and detects wins and draws.
//! - [`OpponentPolicy`] chooses the computer's square; [`HeuristicOpponent`]
//!   wins if it can, blocks if it must, and otherwise plays at random.
//!
//! Everything here is synchronous. Front ends own the session, forward cell
//! picks into it, and decide how long to wait before asking the computer
//! to reply.
//!
//! # Example
//!
//! ```
//! use noughts_core::{FirstAvailable, GameMode, GameSession, Mark, MoveOutcome};
//!
//! let mut session = GameSession::new(GameMode::HumanVsComputer);
//! let turn = session.apply_human_move(4)?;
//! assert_eq!(turn.outcome, MoveOutcome::Continue { next: Mark::O });
//!
//! assert!(session.awaiting_computer());
//! let reply = session.apply_computer_move(&mut FirstAvailable)?;
//! assert_eq!(reply.played.index, 0);
//! # Ok::<(), noughts_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
pub mod invariants;
mod opponent;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{InvalidMove, Move};
pub use opponent::{
    FirstAvailable, HeuristicOpponent, OpponentPolicy, find_completing_move, random_move,
    select_move,
};
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine, check_winner, is_draw, is_full};
pub use session::{GameMode, GameSession, GameStatus, MoveOutcome, Turn};
pub use types::{Board, BoardParseError, Mark, Square};
