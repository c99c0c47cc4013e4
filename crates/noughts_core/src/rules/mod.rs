//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The session and the
//! opponent both evaluate positions through these.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinningLine, check_winner};
