//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file with
//! ANSI colours off. Non-interactive commands log to stderr.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` wins over the configured directives.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Routes logs to `path`.
pub fn init_file(path: &Path, fallback_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Routes logs to stderr.
pub fn init_stderr(fallback_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::io::stderr)
        .try_init();
}
