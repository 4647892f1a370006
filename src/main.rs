//! Time-travel tic-tac-toe entry point.

use anyhow::{Context, Result};
use clap::Parser;
use timetravel_toe::{
    AppConfig, Cli, Command, DisplayOrder, init_file_logging, init_stderr_logging, parse_cells,
    render_text, replay, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(config.log_file(), config.log_filter())?;
            run_tui(&config)
        }
        Command::Replay {
            cells,
            jump,
            descending,
            json,
        } => {
            init_stderr_logging(config.log_filter());
            let config = if descending {
                config.with_initial_order(DisplayOrder::Descending)
            } else {
                config
            };
            run_replay(&config, &cells, jump, json)
        }
    }
}

fn run_replay(
    config: &AppConfig,
    cells: &[String],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    let positions = parse_cells(cells)?;
    info!(moves = positions.len(), "Replaying moves");

    let game = replay(&positions, jump, *config.initial_order()).context("Failed to replay game")?;

    if json {
        let view = serde_json::to_string_pretty(&game.view())?;
        println!("{}", view);
    } else {
        print!("{}", render_text(&game, *config.show_coordinates()));
    }
    Ok(())
}
