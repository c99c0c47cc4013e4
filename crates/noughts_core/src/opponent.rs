//! Computer opponent move selection.
//!
//! The heuristic opponent tries three tiers in order, each a full scan of
//! the board before the next:
//!
//! 1. complete one of its own lines,
//! 2. block a line the human is about to complete,
//! 3. pick uniformly at random among the empty squares.
//!
//! Tiers 1 and 2 walk [`WINNING_LINES`] in table order and return the
//! first hit, so they are deterministic. Only tier 3 draws on the RNG.

use crate::rules::WINNING_LINES;
use crate::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Chooses the computer's next square.
pub trait OpponentPolicy {
    /// Returns a board index for `computer` to play, or `None` if the
    /// board has no empty square.
    fn select_move(&mut self, board: &Board, computer: Mark, human: Mark) -> Option<usize>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

/// Finds the empty square that would complete a line for `mark`.
///
/// A line qualifies when two of its squares hold `mark` and the third is
/// empty. Lines holding both marks never qualify.
#[instrument(skip(board))]
pub fn find_completing_move(board: &Board, mark: Mark) -> Option<usize> {
    let holds = |index: usize| board.get(index).is_some_and(|sq| sq.holds(mark));

    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        if holds(a) && holds(b) && board.is_empty(c) {
            Some(c)
        } else if holds(a) && holds(c) && board.is_empty(b) {
            Some(b)
        } else if holds(b) && holds(c) && board.is_empty(a) {
            Some(a)
        } else {
            None
        }
    })
}

/// Picks an empty square uniformly at random.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}

/// Win, then block, then random.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    human: Mark,
    rng: &mut R,
) -> Option<usize> {
    if let Some(index) = find_completing_move(board, computer) {
        debug!(index, "Completing own line");
        return Some(index);
    }

    if let Some(index) = find_completing_move(board, human) {
        debug!(index, "Blocking opponent line");
        return Some(index);
    }

    let choice = random_move(board, rng);
    debug!(?choice, "Random move");
    choice
}

/// The win/block/random heuristic with its own RNG.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent {
    rng: StdRng,
}

impl HeuristicOpponent {
    /// Creates an opponent seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an opponent whose random fallback is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for HeuristicOpponent {
    fn select_move(&mut self, board: &Board, computer: Mark, human: Mark) -> Option<usize> {
        select_move(board, computer, human, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Computer"
    }
}

/// Plays the first empty square. Deterministic; useful in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl OpponentPolicy for FirstAvailable {
    fn select_move(&mut self, board: &Board, _computer: Mark, _human: Mark) -> Option<usize> {
        board.empty_cells().first().copied()
    }

    fn name(&self) -> &str {
        "First available"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completing_move_each_gap() {
        assert_eq!(find_completing_move(&board("XX. ... ..."), Mark::X), Some(2));
        assert_eq!(find_completing_move(&board("X.X ... ..."), Mark::X), Some(1));
        assert_eq!(find_completing_move(&board(".XX ... ..."), Mark::X), Some(0));
    }

    #[test]
    fn test_completing_move_first_line_in_table_order() {
        // O can finish row 1 (index 5) or column 0 (index 6); rows come first.
        let b = board("OX. OO. .XX");
        assert_eq!(find_completing_move(&b, Mark::O), Some(5));
    }

    #[test]
    fn test_mixed_line_never_qualifies() {
        let b = board("XO. ... ...");
        assert_eq!(find_completing_move(&b, Mark::X), None);
        assert_eq!(find_completing_move(&b, Mark::O), None);
    }

    #[test]
    fn test_full_line_is_not_a_completing_move() {
        assert_eq!(find_completing_move(&board("XXX OO. ..."), Mark::X), None);
    }

    #[test]
    fn test_win_beats_block() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = board("OO. X.. X..");
        assert_eq!(select_move(&b, Mark::O, Mark::X, &mut rng), Some(2));
    }

    #[test]
    fn test_block_when_no_win() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = board("XX. ... ...");
        assert_eq!(select_move(&b, Mark::O, Mark::X, &mut rng), Some(2));
    }

    #[test]
    fn test_random_fallback_picks_empty_square() {
        let b = board("X.. ... ...");
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let index = select_move(&b, Mark::O, Mark::X, &mut rng).unwrap();
            assert!((1..9).contains(&index));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut opponent = HeuristicOpponent::seeded(1);
        assert_eq!(opponent.select_move(&board("XOX XOO OXX"), Mark::O, Mark::X), None);
        assert_eq!(FirstAvailable.select_move(&board("XOX XOO OXX"), Mark::O, Mark::X), None);
    }

    #[test]
    fn test_seeded_opponents_agree() {
        let b = Board::new();
        let mut first = HeuristicOpponent::seeded(42);
        let mut second = HeuristicOpponent::seeded(42);
        for _ in 0..8 {
            assert_eq!(
                first.select_move(&b, Mark::O, Mark::X),
                second.select_move(&b, Mark::O, Mark::X)
            );
        }
    }

    #[test]
    fn test_first_available() {
        let mut policy = FirstAvailable;
        assert_eq!(policy.select_move(&board("XO. ... ..."), Mark::O, Mark::X), Some(2));
    }
}
