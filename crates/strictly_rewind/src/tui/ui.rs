//! Stateless UI rendering for the board and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_tictactoe::{Player, Square};

use super::app::{App, Focus};

const HISTORY_WIDTH: u16 = 38;
const KEY_HELP: &str = " click or arrows · enter play · tab history · [ ] step · q quit ";

/// Where the clickable parts of the last frame were drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Board grid, without its border.
    pub board: Rect,
    /// History rows, without the list border.
    pub history: Rect,
    /// History step shown on the first visible row.
    pub history_offset: usize,
}

impl ScreenLayout {
    /// Cell index under a screen position, if it lands on a square of an
    /// `n`×`n` grid rather than on a separator.
    pub fn cell_at(&self, n: usize, column: u16, row: u16) -> Option<usize> {
        if !self.board.contains(Position::new(column, row)) {
            return None;
        }
        let dx = usize::from(column - self.board.x);
        let dy = usize::from(row - self.board.y);
        if dx % 4 == 3 || dy % 2 == 1 {
            return None;
        }
        let (r, c) = (dy / 2, dx / 4);
        (r < n && c < n).then_some(r * n + c)
    }

    /// History step under a screen position. May be past the last step.
    pub fn step_at(&self, column: u16, row: u16) -> Option<usize> {
        self.history
            .contains(Position::new(column, row))
            .then(|| self.history_offset + usize::from(row - self.history.y))
    }
}

/// First visible history row that keeps `selected` on screen.
fn history_offset(selected: usize, visible: u16) -> usize {
    (selected + 1).saturating_sub(usize::from(visible))
}

/// Renders the whole screen and reports where its clickable parts went.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board and history
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new(format!(
        "Strictly Rewind - Tic Tac Toe {}",
        app.game().size()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(HISTORY_WIDTH)])
        .split(chunks[1]);

    let board = draw_board(frame, body[0], app);
    let (history, history_offset) = draw_history(frame, body[1], app);

    let status = Paragraph::new(app.game().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(KEY_HELP));
    frame.render_widget(status, chunks[2]);

    ScreenLayout {
        board,
        history,
        history_offset,
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let game = app.game();
    let board = game.current_board();
    let n = game.size().get();
    let winning: &[usize] = game
        .lines()
        .winning_line(board)
        .map(|(_, line)| line)
        .unwrap_or(&[]);
    let show_cursor = app.focus() == Focus::Board;

    let separator = vec!["───"; n].join("┼");
    let mut lines = Vec::with_capacity(2 * n);
    for row in 0..n {
        if row > 0 {
            lines.push(Line::from(Span::styled(
                separator.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let mut spans = Vec::with_capacity(2 * n);
        for col in 0..n {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let index = board.index_of(row, col);
            let square = board.get(index).unwrap_or(Square::Empty);
            spans.push(cell_span(
                square,
                winning.contains(&index),
                show_cursor && index == app.cursor(),
            ));
        }
        lines.push(Line::from(spans));
    }

    let width = (4 * n - 1) as u16;
    let height = (2 * n - 1) as u16;
    let block = Block::default().borders(Borders::ALL).title(" Board ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let grid = center_rect(inner, width, height);
    frame.render_widget(Paragraph::new(lines), grid);
    grid
}

fn cell_span(square: Square, winning: bool, under_cursor: bool) -> Span<'static> {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };
    Span::styled(symbol, style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) -> (Rect, usize) {
    let game = app.game();
    let items: Vec<ListItem> = (0..game.history().len())
        .map(|step| {
            let style = if step == game.current_step() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(game.describe_step(step)).style(style)
        })
        .collect();

    // The board-focused list still tracks the current step so it scrolls.
    let (selected, border_style, highlight_style) = match app.focus() {
        Focus::History => (
            app.selected_step(),
            Style::default().fg(Color::Cyan),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Focus::Board => (
            game.current_step(),
            Style::default().fg(Color::DarkGray),
            Style::default(),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" History ");
    let rows = block.inner(area);
    let offset = history_offset(selected, rows.height);

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");
    let mut state = ListState::default()
        .with_offset(offset)
        .with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);

    (rows, offset)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_tictactoe::BoardSize;

    fn render_with_layout(app: &App) -> (String, ScreenLayout) {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        let mut layout = ScreenLayout::default();
        terminal
            .draw(|f| {
                layout = draw(f, app);
            })
            .unwrap();
        let screen = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (screen, layout)
    }

    fn render(app: &App) -> String {
        render_with_layout(app).0
    }

    /// 20 moves on 5×5 with no complete line: row-major order alternates
    /// marks along every row and column, and both diagonals miss cell 24 or 20.
    fn long_game() -> App {
        let mut app = App::new(BoardSize::new(5).unwrap());
        for cell in 0..20 {
            app.click_cell(cell);
        }
        app
    }

    #[test]
    fn test_renders_status_and_move_list() {
        let mut app = App::new(BoardSize::new(4).unwrap());
        app.click_cell(0);
        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #1"));
        assert!(screen.contains(" X "));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(BoardSize::new(4).unwrap());
        for cell in [0, 1, 4, 5, 8, 9, 12] {
            app.click_cell(cell);
        }
        assert!(render(&app).contains("Winner: X"));
    }

    #[test]
    fn test_renders_largest_board() {
        let app = App::new(BoardSize::new(BoardSize::MAX).unwrap());
        assert!(render(&app).contains("Next player: X"));
    }

    #[test]
    fn test_long_history_scrolls_to_current_step_with_board_focus() {
        let app = long_game();
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.game().current_step(), 20);

        let (screen, layout) = render_with_layout(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to move #20"));
        assert!(!screen.contains("Go to game start"));
        // 16 visible rows for 21 steps.
        assert_eq!(layout.history.height, 16);
        assert_eq!(layout.history_offset, 5);
    }

    #[test]
    fn test_history_scrolls_back_with_selection() {
        let mut app = long_game();
        app.navigate(0);
        let screen = render(&app);
        assert!(screen.contains("Go to game start"));
        assert!(!screen.contains("Go to move #20"));
    }

    #[test]
    fn test_history_offset() {
        assert_eq!(history_offset(0, 16), 0);
        assert_eq!(history_offset(15, 16), 0);
        assert_eq!(history_offset(16, 16), 1);
        assert_eq!(history_offset(3, 0), 4);
    }

    #[test]
    fn test_layout_hit_testing() {
        let mut app = App::new(BoardSize::new(3).unwrap());
        app.click_cell(4);
        let (_, layout) = render_with_layout(&app);
        let (x, y) = (layout.board.x, layout.board.y);
        assert_eq!(layout.board.width, 11);
        assert_eq!(layout.board.height, 5);

        assert_eq!(layout.cell_at(3, x, y), Some(0));
        assert_eq!(layout.cell_at(3, x + 6, y + 2), Some(4));
        assert_eq!(layout.cell_at(3, x + 10, y + 4), Some(8));
        // Separators and outside the grid.
        assert_eq!(layout.cell_at(3, x + 3, y), None);
        assert_eq!(layout.cell_at(3, x, y + 1), None);
        assert_eq!(layout.cell_at(3, x + 11, y), None);

        let (hx, hy) = (layout.history.x, layout.history.y);
        assert_eq!(layout.step_at(hx, hy), Some(0));
        assert_eq!(layout.step_at(hx + 4, hy + 1), Some(1));
        assert_eq!(layout.step_at(x, y), None);
    }
}
