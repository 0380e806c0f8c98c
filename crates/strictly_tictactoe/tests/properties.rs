//! Property-based tests for win evaluation and history.

use proptest::prelude::*;
use strictly_tictactoe::invariants::{GameInvariants, InvariantSet};
use strictly_tictactoe::{Board, BoardSize, GameState, MoveOutcome, Player, Square, WinLines, evaluate};

/// Generate a board size small enough to enumerate lines quickly.
fn arb_size() -> impl Strategy<Value = BoardSize> {
    (1usize..=6).prop_map(|n| BoardSize::new(n).expect("in range"))
}

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

/// Generate an arbitrary (not necessarily reachable) board.
fn arb_board() -> impl Strategy<Value = Board> {
    arb_size().prop_flat_map(|size| {
        prop::collection::vec(arb_square(), size.cells()).prop_map(move |squares| {
            let mut board = Board::new(size);
            for (i, square) in squares.into_iter().enumerate() {
                board.set(i, square).expect("index within board");
            }
            board
        })
    })
}

fn line_owner(board: &Board, line: &[usize]) -> Option<Player> {
    let player = board.get(line[0])?.player()?;
    line.iter()
        .all(|&i| board.get(i) == Some(Square::Occupied(player)))
        .then_some(player)
}

#[derive(Debug, Clone)]
enum Action {
    Move(usize),
    Jump(usize),
}

fn arb_actions() -> impl Strategy<Value = (BoardSize, Vec<Action>)> {
    arb_size().prop_flat_map(|size| {
        let action = prop_oneof![
            3 => (0..size.cells()).prop_map(Action::Move),
            1 => (0usize..20).prop_map(Action::Jump),
        ];
        (Just(size), prop::collection::vec(action, 0..40))
    })
}

proptest! {
    #[test]
    fn line_set_has_two_n_plus_two_lines(size in arb_size()) {
        let lines = WinLines::new(size);
        prop_assert_eq!(lines.lines().len(), 2 * size.get() + 2);
        for line in lines.lines() {
            prop_assert_eq!(line.len(), size.get());
            prop_assert!(line.iter().all(|&i| i < size.cells()));
        }
    }

    #[test]
    fn evaluate_agrees_with_first_complete_line(board in arb_board()) {
        let lines = WinLines::new(board.size());
        let expected = lines.lines().iter().find_map(|line| line_owner(&board, line));
        prop_assert_eq!(evaluate(&board), expected);
    }

    #[test]
    fn filled_line_wins(
        board in arb_board(),
        line_pick in any::<prop::sample::Index>(),
        x_wins in any::<bool>(),
    ) {
        let player = if x_wins { Player::X } else { Player::O };
        let lines = WinLines::new(board.size());
        let line = line_pick.get(lines.lines()).clone();

        // Clear the opponent so only `player` can own a line.
        let mut board = board;
        for i in 0..board.size().cells() {
            if board.get(i) == Some(Square::Occupied(player.opponent())) {
                board.set(i, Square::Empty).expect("index within board");
            }
        }
        for &i in &line {
            board.set(i, Square::Occupied(player)).expect("index within board");
        }
        prop_assert_eq!(evaluate(&board), Some(player));
    }

    #[test]
    fn history_invariants_hold((size, actions) in arb_actions()) {
        let mut game = GameState::new(size);
        for action in actions {
            let before = game.clone();
            match action {
                Action::Move(i) => match game.apply_move(i) {
                    MoveOutcome::Placed { player, index } => {
                        prop_assert_eq!(player, before.next_player());
                        prop_assert_eq!(index, i);
                        prop_assert_eq!(game.history().len(), before.current_step() + 2);
                        prop_assert_eq!(&game.history()[..=before.current_step()], &before.history()[..=before.current_step()]);
                    }
                    MoveOutcome::Ignored(_) => prop_assert_eq!(&game, &before),
                },
                Action::Jump(step) => {
                    game.jump_to(step);
                    prop_assert_eq!(game.history(), before.history());
                }
            }
            prop_assert!(GameInvariants::check_all(&game).is_ok());
        }
    }
}
