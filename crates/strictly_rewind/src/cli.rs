//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Rewind - N×N tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe on an N×N board with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board side length N, overriding the config file
    #[arg(short, long, global = true)]
    pub size: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Log file, overriding the config file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a sequence of cell indices and print every history step
    Replay {
        /// Print the history as JSON instead of boards
        #[arg(long)]
        json: bool,

        /// Cell indices in play order (row-major, starting at 0)
        cells: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["strictly_rewind", "replay", "--size", "3", "0", "4", "8"])
            .unwrap();
        assert_eq!(cli.size, Some(3));
        match cli.command {
            Command::Replay { json, cells } => {
                assert!(!json);
                assert_eq!(cells, vec![0, 4, 8]);
            }
            Command::Play { .. } => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::try_parse_from(["strictly_rewind", "-c", "game.toml", "play"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert!(matches!(cli.command, Command::Play { log_file: None }));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
