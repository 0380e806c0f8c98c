//! Strictly Rewind - Unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_rewind::cli::{Cli, Command};
use strictly_rewind::{AppConfig, logging, render_text, replay, report, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?.with_board_size(cli.size);
    let size = config.size()?;

    match cli.command {
        Command::Play { log_file } => {
            let config = config.with_log_file(log_file);
            logging::init_file(config.log_file(), config.log_filter())?;
            info!(%size, "Starting interactive game");
            run_tui(size)
        }
        Command::Replay { json, cells } => {
            logging::init_stderr(config.log_filter());
            let (game, moves) = replay(size, &cells);
            if json {
                let out = serde_json::to_string_pretty(&report(&game, moves))
                    .context("Failed to serialize replay")?;
                println!("{out}");
            } else {
                print!("{}", render_text(&game));
            }
            Ok(())
        }
    }
}
