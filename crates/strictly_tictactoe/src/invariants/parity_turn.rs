//! Turn parity invariant: the next player follows from the current step.

use super::Invariant;
use crate::history::GameState;
use crate::types::Player;

/// Invariant: X moves on even steps, O on odd steps.
pub struct ParityTurnInvariant;

impl Invariant<GameState> for ParityTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.next_player() == Player::for_step(state.current_step())
    }

    fn description() -> &'static str {
        "Next player matches the parity of the current step"
    }
}
