//! Terminal UI presentation layer.
//!
//! The event loop is synchronous: each key is handled to completion and
//! the screen is redrawn from the resulting state.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{error, info, instrument};

use crate::AppConfig;

/// Runs the interactive game until the player quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard::new(io::stdout());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Restores the terminal when dropped.
///
/// Covers early returns and panics once raw mode is on. Each teardown step
/// runs even if an earlier one fails.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            error!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Draws, waits for a key, handles it. Repeats until quit.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore key releases and repeats on platforms that report them
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == AppAction::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
