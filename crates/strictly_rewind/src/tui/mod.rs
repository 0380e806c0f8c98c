//! Terminal UI for Strictly Rewind.
//!
//! One synchronous loop: draw the current snapshot, wait for a key or
//! click, apply it to the game to completion, repeat.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use ui::{ScreenLayout, draw};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use strictly_tictactoe::BoardSize;
use tracing::{debug, error, info, instrument, warn};

/// Raw mode, alternate screen, and mouse capture for the game's lifetime.
///
/// Dropping the session restores the terminal, so early returns and panics
/// leave it usable.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let terminal = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")
            .and_then(|()| {
                Terminal::new(CrosstermBackend::new(io::stdout()))
                    .context("Failed to create terminal")
            });
        match terminal {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(err) => {
                if let Err(restore_err) = restore_terminal() {
                    warn!(error = %restore_err, "Terminal restore failed");
                }
                Err(err)
            }
        }
    }

    /// Restores the terminal, reporting the first failed step.
    fn restore(&mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            let _ = restore_terminal();
        }
    }
}

/// Runs every restore step even when an earlier one fails.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Restores the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// Runs the interactive game until the user quits.
#[instrument]
pub fn run_tui(size: BoardSize) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    install_panic_hook();
    let mut session = TerminalSession::new()?;
    let res = run_app(&mut session.terminal, App::new(size));
    let restored = session.restore();
    finish(res, restored)
}

/// Combines the game loop result with the restore result.
///
/// A game loop error is returned as is; a restore failure only surfaces
/// when the loop itself succeeded.
fn finish(res: Result<()>, restored: io::Result<()>) -> Result<()> {
    match res {
        Err(err) => {
            error!(error = ?err, "Game loop error");
            if let Err(restore_err) = restored {
                error!(error = %restore_err, "Terminal restore failed");
            }
            Err(err)
        }
        Ok(()) => restored.context("Failed to restore terminal"),
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut layout = ScreenLayout::default();
    loop {
        terminal.draw(|f| {
            layout = draw(f, &app);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key) == AppAction::Quit {
                    debug!(
                        steps = app.game().history().len(),
                        status = %app.game().status(),
                        "Leaving game loop"
                    );
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
            _ => {}
        }
    }
}
