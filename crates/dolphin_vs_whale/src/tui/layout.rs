//! Screen geometry and pointer hit testing.

use dolphin_tictactoe::Position;
use ratatui::layout::{Constraint, Direction, Layout, Position as Point, Rect};
use tracing::instrument;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 15;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 5;

const PLAY_AGAIN_WIDTH: u16 = 16;
const EXIT_WIDTH: u16 = 10;
const BUTTON_GAP: u16 = 3;

/// Something the pointer can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The "Play Again" button.
    PlayAgain,
    /// The "Exit" button.
    Exit,
}

/// Where everything sits for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// The whole board.
    pub board: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// "Play Again" button.
    pub play_again: Rect,
    /// "Exit" button.
    pub exit: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out a frame of the given size.
    #[instrument]
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Status
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Buttons
                Constraint::Length(1), // Help
            ])
            .split(area);

        let board = center_rect(chunks[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(board);
        let mut cells = [Rect::default(); 9];
        for (r, row) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 3); 3])
                .split(*row);
            for (c, cell) in cols.iter().enumerate() {
                cells[r * 3 + c] = *cell;
            }
        }

        let buttons = center_rect(chunks[3], PLAY_AGAIN_WIDTH + BUTTON_GAP + EXIT_WIDTH, 3);
        let button_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PLAY_AGAIN_WIDTH),
                Constraint::Length(BUTTON_GAP),
                Constraint::Length(EXIT_WIDTH),
            ])
            .split(buttons);

        Self {
            title: chunks[0],
            status: chunks[1],
            board,
            cells,
            play_again: button_cols[0],
            exit: button_cols[2],
            help: chunks[4],
        }
    }

    /// Rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.index()]
    }

    /// Resolves a pointer location to whatever is under it.
    #[instrument(skip(self))]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        let point = Point::new(column, row);
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cell(*pos).contains(point))
        {
            return Some(Target::Cell(pos));
        }
        if self.play_again.contains(point) {
            return Some(Target::PlayAgain);
        }
        if self.exit.contains(point) {
            return Some(Target::Exit);
        }
        None
    }
}

/// Centers a `width` x `height` rectangle inside `area`, shrinking it to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 80, 30))
    }

    #[test]
    fn test_board_is_centered_and_full_size() {
        let layout = layout();
        assert_eq!(layout.board.width, CELL_WIDTH * 3);
        assert_eq!(layout.board.height, CELL_HEIGHT * 3);
        assert_eq!(layout.board.x, (80 - CELL_WIDTH * 3) / 2);
    }

    #[test]
    fn test_cells_tile_the_board() {
        let layout = layout();
        for pos in Position::ALL {
            let cell = layout.cell(pos);
            assert_eq!(cell.width, CELL_WIDTH);
            assert_eq!(cell.height, CELL_HEIGHT);
            assert_eq!(cell.x, layout.board.x + CELL_WIDTH * pos.col() as u16);
            assert_eq!(cell.y, layout.board.y + CELL_HEIGHT * pos.row() as u16);
        }
    }

    #[test]
    fn test_hit_test_resolves_each_cell_center() {
        let layout = layout();
        for pos in Position::ALL {
            let cell = layout.cell(pos);
            let hit = layout.hit_test(cell.x + cell.width / 2, cell.y + cell.height / 2);
            assert_eq!(hit, Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_hit_test_buttons_and_misses() {
        let layout = layout();
        assert_eq!(
            layout.hit_test(layout.play_again.x, layout.play_again.y + 1),
            Some(Target::PlayAgain)
        );
        assert_eq!(layout.hit_test(layout.exit.x + 1, layout.exit.y), Some(Target::Exit));
        assert_eq!(layout.hit_test(0, 0), None);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 10, 4));
        assert!(layout.board.width <= 10);
    }
}
