//! Line-oriented console game.
//!
//! Reads one command per line and writes the board after every change.
//! Generic over its reader and writer so whole games can be scripted.

use crate::config::GameConfig;
use crate::status::{THINKING, status_line};
use anyhow::Result;
use derive_more::Display;
use noughts_core::{GameMode, GameSession, InvalidMove, OpponentPolicy};
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument, warn};

const HELP: &str = "Commands: 1-9 play a cell, reset, mode pvp|pvc, board, help, quit";

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play the given board index (typed as 1-9).
    Play(usize),
    /// Start a new game in the same mode.
    Reset,
    /// Switch mode and start a new game.
    Mode(GameMode),
    /// Print the board again.
    Board,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unknown command {:?}. Type help for commands.", _0)]
pub struct UnknownCommand(String);

impl std::error::Error for UnknownCommand {}

impl FromStr for ConsoleCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let unknown = || UnknownCommand(line.to_string());

        if let Ok(cell) = line.parse::<usize>() {
            // Cells are typed 1-based; anything past 9 is left for the session to reject.
            return cell.checked_sub(1).map(ConsoleCommand::Play).ok_or_else(unknown);
        }

        let mut words = line.split_whitespace();
        let command = match words.next().map(str::to_ascii_lowercase).as_deref() {
            Some("reset" | "r") => ConsoleCommand::Reset,
            Some("board" | "b") => ConsoleCommand::Board,
            Some("help" | "h" | "?") => ConsoleCommand::Help,
            Some("quit" | "q" | "exit") => ConsoleCommand::Quit,
            Some("mode" | "m") => {
                let mode = words.next().ok_or_else(unknown)?;
                ConsoleCommand::Mode(mode.parse().map_err(|_| unknown())?)
            }
            _ => return Err(unknown()),
        };

        if words.next().is_some() {
            return Err(unknown());
        }
        Ok(command)
    }
}

/// Plays games read from `input` until `quit` or end of input.
///
/// Against the computer, each human move is followed by the configured
/// pause and then the computer's reply.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub async fn run_console<R, W, P>(
    input: R,
    mut output: W,
    config: &GameConfig,
    policy: &mut P,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: OpponentPolicy + ?Sized,
{
    let mut session = GameSession::new(*config.mode());
    let delay = config.opponent_delay();

    writeln!(output, "Tic-tac-toe: {}", session.mode().label())?;
    writeln!(output, "{}", HELP)?;
    render(&mut output, &session)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Help => writeln!(output, "{}", HELP)?,
            ConsoleCommand::Board => render(&mut output, &session)?,
            ConsoleCommand::Reset => {
                session.reset();
                render(&mut output, &session)?;
            }
            ConsoleCommand::Mode(mode) => {
                session.set_mode(mode);
                writeln!(output, "Mode: {}", mode.label())?;
                render(&mut output, &session)?;
            }
            ConsoleCommand::Play(index) => {
                if let Err(e) = session.apply_human_move(index) {
                    writeln!(output, "Invalid move: {}", move_notice(&e))?;
                    continue;
                }
                if session.awaiting_computer() {
                    writeln!(output, "{}", THINKING)?;
                    pause(delay).await;
                    computer_turn(&mut output, &mut session, policy)?;
                }
                render(&mut output, &session)?;
            }
        }
    }

    info!("Console session finished");
    Ok(())
}

/// Describes a rejected move with cells numbered 1-9, as they are typed.
fn move_notice(e: &InvalidMove) -> String {
    match e {
        InvalidMove::OutOfBounds(index) => {
            format!("cell {} is not on the board (choose 1-9)", index + 1)
        }
        InvalidMove::SquareOccupied(index) => format!("cell {} is already taken", index + 1),
        other => other.to_string(),
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn computer_turn<W, P>(output: &mut W, session: &mut GameSession, policy: &mut P) -> Result<()>
where
    W: Write,
    P: OpponentPolicy + ?Sized,
{
    match session.apply_computer_move(policy) {
        Ok(turn) => writeln!(output, "Computer plays {}", turn.played.index + 1)?,
        Err(e) => warn!(error = %e, "Computer could not move"),
    }
    Ok(())
}

fn render<W: Write>(output: &mut W, session: &GameSession) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", session.board())?;
    writeln!(output)?;
    writeln!(output, "{}", status_line(session))?;
    Ok(())
}
