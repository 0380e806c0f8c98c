//! Core domain types for N×N tic-tac-toe.

use derive_more::{Display, Error};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is at the given history step.
    ///
    /// Even steps belong to X, odd steps to O.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Board size N was outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("board size {requested} outside supported range {min}..={max}")]
pub struct SizeError {
    /// The rejected size.
    pub requested: usize,
    /// Smallest supported size.
    pub min: usize,
    /// Largest supported size.
    pub max: usize,
}

/// Side length N of an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported side length.
    pub const MIN: usize = 1;
    /// Largest supported side length.
    pub const MAX: usize = 9;

    /// Validates a side length.
    #[instrument]
    pub fn new(n: usize) -> Result<Self, SizeError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(SizeError {
                requested: n,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Side length N.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells, N².
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(4)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Errors from direct board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index past the last cell.
    #[display("index {index} out of bounds for board with {cells} cells")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },
}

/// N×N board, squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Board side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square at `index`, or `None` past the last cell.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at `index`.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let cells = self.squares.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds { index, cells })?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Maps a cell index to `(row, column)`.
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        let n = self.size.get();
        (index / n, index % n)
    }

    /// Maps `(row, column)` to a cell index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size.get() + col
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.get();
        let separator = vec!["-"; n].join("+");
        for (row, cells) in self.squares.chunks(n).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let line: Vec<String> = cells.iter().map(|s| s.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
