//! Application configuration.
//!
//! Settings come from an optional TOML file, then command-line overrides.
//! A missing default file is not an error; a missing explicit file is.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_tictactoe::BoardSize;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_rewind.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board side length N.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// File receiving log output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter directives used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_board_size() -> usize {
    BoardSize::default().get()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_rewind.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if present,
    /// else defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the board size when one was given on the command line.
    #[instrument(skip(self))]
    pub fn with_board_size(mut self, board_size: Option<usize>) -> Self {
        if let Some(n) = board_size {
            self.board_size = n;
        }
        self
    }

    /// Overrides the log file when one was given on the command line.
    #[instrument(skip(self))]
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    /// Validated board size.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn size(&self) -> Result<BoardSize, ConfigError> {
        BoardSize::new(self.board_size).map_err(|e| ConfigError::new(e.to_string()))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
