//! Pure N×N tic-tac-toe logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`BoardSize`], and the row-major [`Board`]
//! - **Rules**: pure win and draw evaluation over a single snapshot
//! - **History**: [`GameState`] owns every snapshot reached so far and the turn order
//! - **Invariants**: properties of [`GameState`] checked after each mutation in debug builds
//!
//! A win is a complete row, column, or full diagonal, so a 4×4 board needs
//! four in a line.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{BoardSize, GameState, Player};
//!
//! let mut game = GameState::new(BoardSize::new(3)?);
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//!
//! game.jump_to(0);
//! assert_eq!(game.next_player(), Player::X);
//! assert_eq!(game.history().len(), 6);
//! # Ok::<(), strictly_tictactoe::SizeError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
pub mod invariants;
pub mod rules;
mod types;

pub use history::{GameState, GameStatus, IgnoreReason, MoveOutcome, PlacedMark, step_label};
pub use rules::{WinLines, evaluate, is_full};
pub use types::{Board, BoardError, BoardSize, Player, SizeError, Square};
