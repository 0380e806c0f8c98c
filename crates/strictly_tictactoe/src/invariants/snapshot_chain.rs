//! Snapshot chain invariant: each snapshot is its predecessor plus one mark.

use super::Invariant;
use crate::history::GameState;
use crate::types::{Player, Square};

/// Invariant: snapshot `k` differs from snapshot `k - 1` in exactly one
/// square, which went from empty to the mark of the player on turn at
/// step `k - 1`. No snapshot follows a board that already had a winner.
pub struct SnapshotChainInvariant;

impl Invariant<GameState> for SnapshotChainInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                if state.lines().winner(before).is_some() {
                    return false;
                }
                let mut changed = before
                    .squares()
                    .iter()
                    .zip(after.squares())
                    .filter(|(a, b)| a != b);
                let expected = Square::Occupied(Player::for_step(step));
                matches!(
                    (changed.next(), changed.next()),
                    (Some((Square::Empty, mark)), None) if *mark == expected
                )
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark by the player on turn"
    }
}
