//! Scripted console games.

use noughts::{GameConfig, GameMode, run_console};
use noughts_core::{Board, FirstAvailable, HeuristicOpponent, Mark, OpponentPolicy};
use std::io::Cursor;

fn config(mode: GameMode) -> GameConfig {
    GameConfig::default().with_overrides(Some(mode), Some(0), Some(5))
}

async fn play(mode: GameMode, script: &str) -> String {
    let mut out = Vec::new();
    run_console(
        Cursor::new(script.to_string()),
        &mut out,
        &config(mode),
        &mut FirstAvailable,
    )
    .await
    .expect("console run");
    String::from_utf8(out).expect("utf8 output")
}

#[tokio::test]
async fn test_banner_and_first_turn() {
    let out = play(GameMode::HumanVsHuman, "").await;
    assert!(out.starts_with("Tic-tac-toe: Human vs Human\n"));
    assert!(out.contains("1|2|3"));
    assert!(out.trim_end().ends_with("Player X's turn"));
}

#[tokio::test]
async fn test_pvp_win() {
    let out = play(GameMode::HumanVsHuman, "1\n4\n2\n5\n3\n").await;
    assert!(out.contains("X|X|X"));
    assert!(out.trim_end().ends_with("Player X wins! 🎉"));
}

#[tokio::test]
async fn test_moves_after_win_are_rejected() {
    let out = play(GameMode::HumanVsHuman, "1\n4\n2\n5\n3\n6\n").await;
    assert!(out.contains("Player X wins!"));
    assert!(out.trim_end().ends_with("Invalid move: Game is already over"));
}

#[tokio::test]
async fn test_pvp_draw() {
    let out = play(GameMode::HumanVsHuman, "1\n2\n3\n5\n4\n6\n8\n7\n9\nquit\n").await;
    assert!(out.trim_end().ends_with("Game ended in a draw!"));
}

#[tokio::test]
async fn test_invalid_input_is_reported() {
    let out = play(GameMode::HumanVsHuman, "5\n5\n10\nchess\n").await;
    assert_eq!(out.matches("Invalid move:").count(), 2);
    assert!(out.contains("Invalid move: cell 5 is already taken"));
    assert!(out.contains("Invalid move: cell 10 is not on the board (choose 1-9)"));
    assert!(out.contains("Unknown command \"chess\""));
    assert!(out.contains("Player O's turn"));
    assert!(!out.contains("Player X wins!"));
}

#[tokio::test]
async fn test_computer_replies() {
    let out = play(GameMode::HumanVsComputer, "5\n").await;
    assert!(out.contains("Computer is thinking..."));
    assert!(out.contains("Computer plays 1"));
    assert!(out.contains("O|2|3"));
    assert!(out.trim_end().ends_with("Player X's turn"));
}

#[tokio::test]
async fn test_computer_can_win() {
    // FirstAvailable fills 1, 2, 3 while X plays elsewhere.
    let out = play(GameMode::HumanVsComputer, "5\n9\n6\n").await;
    assert!(out.contains("O|O|O"));
    assert!(out.trim_end().ends_with("Computer wins! 🤖"));
}

#[tokio::test]
async fn test_reset_and_mode_switch() {
    let out = play(GameMode::HumanVsHuman, "5\nreset\nmode pvc\n").await;
    assert!(out.contains("Mode: Human vs Computer"));
    assert!(out.trim_end().ends_with("Player X's turn"));
}

#[tokio::test]
async fn test_quit_stops_reading() {
    let out = play(GameMode::HumanVsHuman, "quit\n5\n").await;
    assert!(!out.contains("4|X|6"));
    assert!(!out.contains("Player O's turn"));
}

#[tokio::test]
async fn test_heuristic_opponent_blocks() {
    const SEED: u64 = 3;

    // Same seed, same first draw: the reply to a centre opening.
    let centre: Board = "....X....".parse().unwrap();
    let first_reply = HeuristicOpponent::seeded(SEED)
        .select_move(&centre, Mark::O, Mark::X)
        .unwrap();

    // A line through the centre the computer has not touched.
    let (threat, block) = [(0, 8), (2, 6), (1, 7), (3, 5)]
        .into_iter()
        .find(|&(a, b)| a != first_reply && b != first_reply)
        .unwrap();

    let mut out = Vec::new();
    let mut opponent = HeuristicOpponent::seeded(SEED);
    run_console(
        Cursor::new(format!("5\n{}\n", threat + 1)),
        &mut out,
        &config(GameMode::HumanVsComputer),
        &mut opponent,
    )
    .await
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains(&format!("Computer plays {}", first_reply + 1)));
    assert!(out.contains(&format!("Computer plays {}", block + 1)));
    assert!(out.trim_end().ends_with("Player X's turn"));
}
