//! Step bounds invariant: the current step indexes into a rooted history.

use super::Invariant;
use crate::history::GameState;

/// Invariant: history is non-empty, starts from the empty board, holds
/// boards of one size, and `current_step` indexes into it.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let rooted = history
            .first()
            .is_some_and(|first| first.occupied_count() == 0);
        let same_size = history.iter().all(|board| board.size() == state.size());

        rooted && same_size && state.current_step() < history.len()
    }

    fn description() -> &'static str {
        "Current step indexes into a history rooted at the empty board"
    }
}
