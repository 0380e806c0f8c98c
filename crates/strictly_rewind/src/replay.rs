//! Non-interactive replay of a move sequence.

use serde::Serialize;
use strictly_tictactoe::{Board, BoardSize, GameState, GameStatus, MoveOutcome, PlacedMark};
use tracing::{info, instrument, warn};

/// Result of feeding one cell index to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Cell index requested.
    pub cell: usize,
    /// What the game did with it.
    pub outcome: MoveOutcome,
}

/// One history step as printed by `replay`.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport<'a> {
    /// History index.
    pub step: usize,
    /// Move-list label.
    pub label: String,
    /// Mark that produced this snapshot.
    pub mark: Option<PlacedMark>,
    /// The snapshot.
    pub board: &'a Board,
}

/// Full replay output.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport<'a> {
    /// Board side length.
    pub size: usize,
    /// Every cell fed in, with its outcome.
    pub moves: Vec<MoveReport>,
    /// Every history step.
    pub steps: Vec<StepReport<'a>>,
    /// Status of the final board.
    pub status: GameStatus,
}

/// Applies `cells` in order to a fresh game.
///
/// Ignored moves are logged and recorded; they never stop the replay.
#[instrument(skip(cells), fields(moves = cells.len()))]
pub fn replay(size: BoardSize, cells: &[usize]) -> (GameState, Vec<MoveReport>) {
    let mut game = GameState::new(size);
    let reports = cells
        .iter()
        .map(|&cell| {
            let outcome = game.apply_move(cell);
            if let MoveOutcome::Ignored(reason) = outcome {
                warn!(cell, %reason, "Move ignored during replay");
            }
            MoveReport { cell, outcome }
        })
        .collect();
    info!(steps = game.history().len(), status = %game.status(), "Replay finished");
    (game, reports)
}

/// Builds the serializable report for a replayed game.
pub fn report<'a>(game: &'a GameState, moves: Vec<MoveReport>) -> ReplayReport<'a> {
    let steps = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, board)| StepReport {
            step,
            label: game.describe_step(step),
            mark: game.move_at(step),
            board,
        })
        .collect();
    ReplayReport {
        size: game.size().get(),
        moves,
        steps,
        status: game.status(),
    }
}

/// Renders every step as a text board followed by the final status.
pub fn render_text(game: &GameState) -> String {
    let mut out = String::new();
    for (step, board) in game.history().iter().enumerate() {
        out.push_str(&game.describe_step(step));
        out.push('\n');
        out.push_str(&board.to_string());
        out.push_str("\n\n");
    }
    out.push_str(&game.status().to_string());
    out.push('\n');
    out
}
