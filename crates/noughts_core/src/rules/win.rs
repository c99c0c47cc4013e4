//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A row, column or diagonal of three board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// The three indices of this line.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Returns true if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// The mark filling all three cells, if the line is complete.
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        match board.get(a)? {
            Square::Occupied(mark)
                if board.get(b) == Some(Square::Occupied(mark))
                    && board.get(c) == Some(Square::Occupied(mark)) =>
            {
                Some(mark)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

/// Every winning line, in scan order: rows, columns, then diagonals.
///
/// Scans that stop at the first match depend on this order.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Columns
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonals
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

/// Returns the first complete line in [`WINNING_LINES`] order, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    WINNING_LINES
        .into_iter()
        .find(|line| line.owner(board).is_some())
}
