//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::GameMode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe for two humans or against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: noughts.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Game mode: pvp (human vs human) or pvc (human vs computer)
    #[arg(short, long, global = true)]
    pub mode: Option<GameMode>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Front end to run (default: tui)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal UI
    #[default]
    Tui,

    /// Play by typing commands on stdin
    Console,
}
