//! Noughts - tic-tac-toe for two humans or against the computer
//!
//! Front ends and configuration around [`noughts_core`].
//!
//! # Architecture
//!
//! - **Core** (`noughts_core`): board, turns, win/draw detection, opponent
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: ratatui board with keyboard play
//! - **Console**: line-oriented play over any reader and writer
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameConfig, run_console};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load(None)?;
//! let mut opponent = config.opponent();
//! let stdin = std::io::stdin().lock();
//! run_console(stdin, std::io::stdout(), &config, &mut opponent).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
pub mod logging;
mod status;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use console::{ConsoleCommand, UnknownCommand, run_console};
pub use status::{THINKING, status_line};

pub use noughts_core::{GameMode, GameSession, Mark, MoveOutcome};
