//! Computer opponent move selection.

use noughts_core::{
    Board, FirstAvailable, HeuristicOpponent, Mark, OpponentPolicy, find_completing_move,
    random_move, select_move,
};
use rand::{SeedableRng, rngs::StdRng};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_takes_own_win() {
    let mut opponent = HeuristicOpponent::seeded(1);
    let b = board("OO_ X__ ___");
    assert_eq!(opponent.select_move(&b, Mark::O, Mark::X), Some(2));
}

#[test]
fn test_blocks_human_win() {
    let mut opponent = HeuristicOpponent::seeded(1);
    let b = board("XX_ ___ ___");
    assert_eq!(opponent.select_move(&b, Mark::O, Mark::X), Some(2));
}

#[test]
fn test_win_beats_block() {
    // X threatens the top row; O can finish the middle row instead.
    let b = board("XX_ OO_ X__");
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(select_move(&b, Mark::O, Mark::X, &mut rng), Some(5));
}

#[test]
fn test_completing_move_finds_gap_anywhere_in_line() {
    assert_eq!(find_completing_move(&board("X_X ___ ___"), Mark::X), Some(1));
    assert_eq!(find_completing_move(&board("_XX ___ ___"), Mark::X), Some(0));
    assert_eq!(find_completing_move(&board("O__ _O_ ___"), Mark::O), Some(8));
    assert_eq!(find_completing_move(&board("__X _X_ ___"), Mark::X), Some(6));
}

#[test]
fn test_completing_move_ignores_blocked_lines() {
    assert_eq!(find_completing_move(&board("XXO ___ ___"), Mark::X), None);
    assert_eq!(find_completing_move(&board("XOX ___ ___"), Mark::X), None);
    assert_eq!(find_completing_move(&Board::new(), Mark::O), None);
}

#[test]
fn test_random_move_picks_empty_square() {
    let b = board("XOX OX_ OXO");
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        assert_eq!(random_move(&b, &mut rng), Some(5));
    }
    assert_eq!(random_move(&board("XOX XOO OXX"), &mut rng), None);
}

#[test]
fn test_open_board_reply_is_empty_square() {
    let b = board("X__ ___ ___");
    for seed in 0..32 {
        let mut opponent = HeuristicOpponent::seeded(seed);
        let reply = opponent.select_move(&b, Mark::O, Mark::X).unwrap();
        assert!((1..=8).contains(&reply), "seed {seed} gave {reply}");
    }
}

#[test]
fn test_same_seed_same_choice() {
    let b = board("X__ _O_ ___");
    let first = HeuristicOpponent::seeded(7).select_move(&b, Mark::O, Mark::X);
    let second = HeuristicOpponent::seeded(7).select_move(&b, Mark::O, Mark::X);
    assert_eq!(first, second);
}

#[test]
fn test_full_board_has_no_move() {
    let full = board("XOX XOO OXX");
    assert_eq!(HeuristicOpponent::seeded(0).select_move(&full, Mark::O, Mark::X), None);
    assert_eq!(FirstAvailable.select_move(&full, Mark::O, Mark::X), None);
}

#[test]
fn test_policy_names() {
    assert_eq!(HeuristicOpponent::seeded(0).name(), "Computer");
    assert!(!FirstAvailable.name().is_empty());
}
