//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules never touch history,
//! so any snapshot can be evaluated independently.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinLines, evaluate};
