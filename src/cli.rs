//! Command-line interface for timetravel_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel_toe")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "timetravel_toe.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Cells to play in order: index 0-8 or a label such as "center"
        cells: Vec<String>,

        /// Step to view after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the game view as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults() {
        let cli = Cli::try_parse_from(["timetravel_toe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("timetravel_toe.toml"));
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "timetravel_toe",
            "replay",
            "4",
            "center",
            "--jump",
            "1",
            "--descending",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                cells: vec!["4".to_string(), "center".to_string()],
                jump: Some(1),
                descending: true,
                json: false,
            })
        );
    }
}
