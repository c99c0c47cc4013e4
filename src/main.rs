//! Noughts - unified CLI
//!
//! Tic-tac-toe in the terminal UI or on the console.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Command, GameConfig, logging, run_console, tui};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(
        cli.mode,
        cli.delay_ms,
        cli.seed,
    );

    match cli.command.unwrap_or_default() {
        Command::Tui => tui::run_tui(config).await,
        Command::Console => run_console_stdio(config).await,
    }
}

/// Run the console game on stdin/stdout
async fn run_console_stdio(config: GameConfig) -> Result<()> {
    logging::init_stderr();
    info!(mode = %config.mode(), "Starting console game");

    let mut opponent = config.opponent();
    let stdin = std::io::stdin().lock();
    run_console(stdin, std::io::stdout(), &config, &mut opponent).await
}
