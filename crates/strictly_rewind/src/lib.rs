//! Strictly Rewind - N×N tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **TUI**: ratatui front end forwarding cell and history selections to the game
//! - **Replay**: non-interactive playback of a move sequence
//!
//! Game rules and history live in [`strictly_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use replay::{MoveReport, ReplayReport, StepReport, render_text, replay, report};
pub use tui::{App, AppAction, Focus, run_tui};
