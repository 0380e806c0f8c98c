//! Win detection for N×N boards.
//!
//! A win is a complete row, column, or full diagonal held by one player.
//! There is no shorter winning run on boards larger than 3×3.

use crate::types::{Board, BoardSize, Player, Square};
use tracing::instrument;

/// The complete set of winning lines for one board size.
///
/// Lines are stored rows first, then columns, then the main diagonal and
/// the anti-diagonal. Each line holds exactly N cell indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLines {
    size: BoardSize,
    lines: Vec<Vec<usize>>,
}

impl WinLines {
    /// Builds the line set for `size`.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        let mut lines: Vec<Vec<usize>> = Vec::with_capacity(2 * n + 2);

        for row in 0..n {
            lines.push((0..n).map(|col| row * n + col).collect());
        }
        for col in 0..n {
            lines.push((0..n).map(|row| row * n + col).collect());
        }
        lines.push((0..n).map(|i| i * n + i).collect());
        lines.push((0..n).map(|i| i * n + (n - i - 1)).collect());

        Self { size, lines }
    }

    /// Board size these lines were built for.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// All lines in evaluation order.
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }

    /// Returns the first line fully held by one player.
    pub fn winning_line(&self, board: &Board) -> Option<(Player, &[usize])> {
        self.lines.iter().find_map(|line| {
            let player = board.get(*line.first()?)?.player()?;
            line.iter()
                .all(|&i| board.get(i) == Some(Square::Occupied(player)))
                .then_some((player, line.as_slice()))
        })
    }

    /// Returns the winner, if any line is complete.
    #[instrument(skip(self, board))]
    pub fn winner(&self, board: &Board) -> Option<Player> {
        self.winning_line(board).map(|(player, _)| player)
    }
}

/// Evaluates a board for a winner.
///
/// Builds the line set for the board's size on every call; hold a
/// [`WinLines`] to evaluate repeatedly.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn evaluate(board: &Board) -> Option<Player> {
    WinLines::new(board.size()).winner(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(n: usize, marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(BoardSize::new(n).unwrap());
        for &(i, p) in marks {
            board.set(i, Square::Occupied(p)).unwrap();
        }
        board
    }

    #[test]
    fn test_line_set_for_three() {
        let lines = WinLines::new(BoardSize::new(3).unwrap());
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
            vec![0, 3, 6],
            vec![1, 4, 7],
            vec![2, 5, 8],
            vec![0, 4, 8],
            vec![2, 4, 6],
        ];
        assert_eq!(lines.lines(), expected.as_slice());
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = board_with(4, &[]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_winner_row() {
        let board = board_with(
            4,
            &[(4, Player::O), (5, Player::O), (6, Player::O), (7, Player::O)],
        );
        assert_eq!(evaluate(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            4,
            &[(3, Player::X), (6, Player::X), (9, Player::X), (12, Player::X)],
        );
        assert_eq!(evaluate(&board), Some(Player::X));
    }

    #[test]
    fn test_three_in_a_row_is_not_enough_on_four() {
        let board = board_with(4, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_mixed_line_no_winner() {
        let board = board_with(
            3,
            &[(0, Player::X), (1, Player::O), (2, Player::X)],
        );
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_matching_line_wins() {
        // Unreachable in play, but fixes the evaluation order.
        let board = board_with(
            3,
            &[
                (0, Player::O),
                (1, Player::O),
                (2, Player::O),
                (6, Player::X),
                (7, Player::X),
                (8, Player::X),
            ],
        );
        let lines = WinLines::new(board.size());
        assert_eq!(lines.winning_line(&board), Some((Player::O, &[0, 1, 2][..])));
    }

    #[test]
    fn test_single_cell_board() {
        let board = board_with(1, &[(0, Player::O)]);
        assert_eq!(evaluate(&board), Some(Player::O));
    }
}
