//! Colour palette for the sea-themed board.

use ratatui::style::{Color, Modifier, Style};

/// Colours used across the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Background behind everything.
    pub sea: Color,
    /// Normal status text.
    pub status_fg: Color,
    /// Status text once the game has ended.
    pub announce_fg: Color,
    /// Cell borders.
    pub cell_border: Color,
    /// Border of the keyboard cursor cell.
    pub cursor_border: Color,
    /// Background of a winning line.
    pub winning_cell: Color,
    /// "Play Again" button.
    pub play_again_bg: Color,
    /// "Exit" button.
    pub exit_bg: Color,
    /// Button labels.
    pub button_fg: Color,
    /// Help text.
    pub hint_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            sea: Color::Rgb(0xcf, 0xef, 0xff),
            status_fg: Color::Rgb(0x0b, 0x29, 0x4a),
            announce_fg: Color::Rgb(0x09, 0x21, 0x3b),
            cell_border: Color::Rgb(0x00, 0x3a, 0x8c),
            cursor_border: Color::Rgb(0xff, 0xb3, 0x00),
            winning_cell: Color::Rgb(0x79, 0xb9, 0xff),
            play_again_bg: Color::Rgb(0x4d, 0xa3, 0xff),
            exit_bg: Color::Rgb(0xff, 0x69, 0xb4),
            button_fg: Color::White,
            hint_fg: Color::Rgb(0x3a, 0x5a, 0x7a),
        }
    }
}

impl Theme {
    /// Base style painted over the whole frame.
    pub fn base(&self) -> Style {
        Style::default().bg(self.sea).fg(self.status_fg)
    }

    /// Style for a button with the given background.
    pub fn button(&self, bg: Color) -> Style {
        Style::default()
            .bg(bg)
            .fg(self.button_fg)
            .add_modifier(Modifier::BOLD)
    }
}
