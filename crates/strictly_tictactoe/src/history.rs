//! Snapshot history with time travel.
//!
//! [`GameState`] keeps every board reached so far. Jumping to an earlier
//! step only moves the cursor; the entries after it are discarded when a
//! new move is made from that point.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{WinLines, is_full};
use crate::types::{Board, BoardSize, Player, Square};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument, warn};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum IgnoreReason {
    /// The current board already has a winner.
    #[strum(serialize = "game is over")]
    GameOver,
    /// The target square is occupied.
    #[strum(serialize = "square is occupied")]
    Occupied,
    /// The index is past the last cell.
    #[strum(serialize = "index out of bounds")]
    OutOfBounds,
}

/// What [`GameState::apply_move`] did.
///
/// Purely informational: an ignored move leaves the state untouched either
/// way, and callers may drop the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The mark was placed and appended to history.
    Placed {
        /// Player who moved.
        player: Player,
        /// Cell index.
        index: usize,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// A mark that produced a history snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedMark {
    /// Player who moved.
    pub player: Player,
    /// Cell index.
    pub index: usize,
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
}

/// Status line for the board at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Nobody has won and empty squares remain.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A line is complete.
    Won(Player),
    /// The board is full without a winner.
    Draw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {next}"),
            GameStatus::Won(winner) => write!(f, "Winner: {winner}"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Label for a history step as shown in the move list.
pub fn step_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step}")
    }
}

/// Move history and turn order.
///
/// `history[0]` is the empty board and `history[k]` the board after move
/// `k`. `current_step` always indexes into `history`, and `next_player`
/// always follows its parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_step: usize,
    pub(crate) next_player: Player,
    pub(crate) lines: WinLines,
}

impl GameState {
    /// Creates a game on an empty board with X to move.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            history: vec![Board::new(size)],
            current_step: 0,
            next_player: Player::X,
            lines: WinLines::new(size),
        }
    }

    /// Board side length.
    pub fn size(&self) -> BoardSize {
        self.lines.size()
    }

    /// All snapshots, including any ahead of the current step.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Player whose turn it is at the current step.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Precomputed winning lines for this board size.
    pub fn lines(&self) -> &WinLines {
        &self.lines
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.lines.winner(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = self.lines.winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player,
            }
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// Ignored without any state change when the current board has a
    /// winner, the square is occupied, or `index` is past the last cell.
    /// Otherwise history after the current step is dropped, the new
    /// snapshot is appended, and the turn passes.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let board = self.current_board();

        let rejected = if self.lines.winner(board).is_some() {
            Some(IgnoreReason::GameOver)
        } else {
            match board.get(index) {
                None => Some(IgnoreReason::OutOfBounds),
                Some(Square::Occupied(_)) => Some(IgnoreReason::Occupied),
                Some(Square::Empty) => None,
            }
        };
        if let Some(reason) = rejected {
            debug!(%reason, "Move ignored");
            return MoveOutcome::Ignored(reason);
        }

        let player = self.next_player;
        let mut next = board.clone();
        if next.set(index, Square::Occupied(player)).is_err() {
            return MoveOutcome::Ignored(IgnoreReason::OutOfBounds);
        }

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(next);
        self.current_step = self.history.len() - 1;
        self.next_player = player.opponent();
        debug!(
            discarded,
            new_step = self.current_step,
            "Move placed"
        );

        self.debug_check();
        MoveOutcome::Placed { player, index }
    }

    /// Moves the displayed snapshot to `step` without touching history.
    ///
    /// Steps past the end of history are a caller error; they are logged
    /// and leave the state unchanged.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            warn!(step, "Jump past end of history ignored");
            return;
        }
        self.current_step = step;
        self.next_player = Player::for_step(step);
        debug!(next = %self.next_player, "Jumped");
        self.debug_check();
    }

    /// The mark that produced snapshot `step`.
    ///
    /// `None` for step 0 and for steps past the end of history.
    pub fn move_at(&self, step: usize) -> Option<PlacedMark> {
        let before = self.history.get(step.checked_sub(1)?)?;
        let after = self.history.get(step)?;
        let index = before
            .squares()
            .iter()
            .zip(after.squares())
            .position(|(a, b)| a != b)?;
        let player = after.get(index)?.player()?;
        let (row, col) = after.row_col(index);
        Some(PlacedMark {
            player,
            index,
            row,
            col,
        })
    }

    /// Move-list entry for `step`: its label plus the mark placed there.
    pub fn describe_step(&self, step: usize) -> String {
        match self.move_at(step) {
            Some(mark) => format!(
                "{} ({} at row {}, col {})",
                step_label(step),
                mark.player,
                mark.row,
                mark.col
            ),
            None => step_label(step),
        }
    }

    /// Asserts the state invariants in debug builds.
    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            let checked = GameInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "game state invariants violated: {checked:?}");
        }
    }
}
