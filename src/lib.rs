//! Time-travel tic-tac-toe for the terminal.
//!
//! Game logic lives in [`timetravel_core`]; this crate is the
//! presentation layer around it.
//!
//! # Architecture
//!
//! - **TUI**: interactive ratatui front end owning one [`GameState`]
//! - **Replay**: applies a move list and prints the result
//! - **Config**: TOML settings for logging and move list display

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{parse_cells, render_text, replay};
pub use tui::{App, AppAction, Focus, run_tui};

pub use timetravel_core::{
    DisplayOrder, GameState, GameView, Mark, MoveListEntry, Outcome, Position, Status,
};
