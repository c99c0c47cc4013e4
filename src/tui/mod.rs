//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

use app::{App, Control};

use crate::config::GameConfig;
use crate::logging;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so output doesn't interfere with the TUI
    logging::init_file(config.log_file())?;

    info!(mode = %config.mode(), "Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.mode(), Box::new(config.opponent()));
    let res = run_app(&mut terminal, &mut app, config.opponent_delay()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI closed");
    res
}

/// Event loop: draw, let the computer reply after `delay`, read keys.
#[instrument(skip_all, fields(delay_ms = delay.as_millis() as u64))]
async fn run_app(terminal: &mut Term, app: &mut App, delay: Duration) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.awaiting_computer() {
            // The status already reads "thinking"; keys during the pause are dropped.
            sleep(delay).await;
            app.computer_move();
            drain_pending_keys()?;
            continue;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}

fn drain_pending_keys() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}
