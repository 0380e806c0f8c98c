//! Draw detection for N×N boards.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::evaluate;
    use super::*;
    use crate::types::{BoardSize, Player};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && evaluate(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(BoardSize::new(4).unwrap());
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(BoardSize::new(3).unwrap());
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let marks = "XOXOXXOXO";
        let mut board = Board::new(BoardSize::new(3).unwrap());
        for (i, c) in marks.chars().enumerate() {
            let player = if c == 'X' { Player::X } else { Player::O };
            board.set(i, Square::Occupied(player)).unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(BoardSize::new(2).unwrap());
        for i in 0..4 {
            board.set(i, Square::Occupied(Player::for_step(i / 2))).unwrap();
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
