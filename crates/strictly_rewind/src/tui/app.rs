//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use strictly_tictactoe::{BoardSize, GameState, MoveOutcome};
use tracing::{debug, info, instrument};

use super::input::{move_cursor, move_selection};
use super::ui::ScreenLayout;

/// Panel receiving arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: usize,
    focus: Focus,
    selected_step: usize,
}

impl App {
    /// Creates an application with a fresh game.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            game: GameState::new(size),
            cursor: 0,
            focus: Focus::default(),
            selected_step: 0,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history step.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Forwards a cell selection to the game.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.game.apply_move(index);
        debug!(?outcome, "Cell clicked");
        self.selected_step = self.game.current_step();
        outcome
    }

    /// Forwards a history selection to the game.
    #[instrument(skip(self))]
    pub fn navigate(&mut self, step: usize) {
        self.game.jump_to(step);
        self.selected_step = self.game.current_step();
    }

    /// Handles a left click on a board square or a history row.
    #[instrument(skip(self, mouse, layout), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(index) = layout.cell_at(self.game.size().get(), mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = index;
            self.click_cell(index);
        } else if let Some(step) = layout.step_at(mouse.column, mouse.row)
            && step < self.game.history().len()
        {
            self.focus = Focus::History;
            self.navigate(step);
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::Continue;
        }

        let last_step = self.game.history().len() - 1;
        match (key.code, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => {
                info!("User quit");
                return AppAction::Quit;
            }
            (KeyCode::Tab, focus) => {
                self.focus = match focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected_step = self.game.current_step();
            }
            (KeyCode::Char('['), _) => {
                self.navigate(self.game.current_step().saturating_sub(1));
            }
            (KeyCode::Char(']'), _) => {
                self.navigate((self.game.current_step() + 1).min(last_step));
            }
            (KeyCode::Home, _) => self.navigate(0),
            (KeyCode::End, _) => self.navigate(last_step),
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
                self.click_cell(self.cursor);
            }
            (KeyCode::Enter, Focus::History) => self.navigate(self.selected_step),
            (code, Focus::Board) => {
                self.cursor = move_cursor(self.cursor, self.game.size(), code);
            }
            (code, Focus::History) => {
                self.selected_step = move_selection(self.selected_step, last_step + 1, code);
            }
        }
        AppAction::Continue
    }
}
