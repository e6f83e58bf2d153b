//! Stateless UI rendering.

use dolphin_tictactoe::{Cell, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::app::App;
use super::layout::{ScreenLayout, center_rect};

const TITLE: &str = "Tic Tac Toe — Dolphin vs Whale";
const HELP: &str = "Click a cell or use arrows + Enter | 1-9: place | R: play again | Q: exit";

/// Draws a full frame and returns the layout it used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let screen = frame.area();
    let layout = ScreenLayout::compute(screen);
    let theme = app.theme();

    frame.render_widget(Block::default().style(theme.base()), screen);

    let title = Paragraph::new(TITLE)
        .style(theme.base().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    draw_status(frame, layout.status, app);
    draw_board(frame, &layout, app);
    draw_buttons(frame, &layout, app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(theme.hint_fg))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    if let Some(spin) = app.celebration().overlay_frame() {
        draw_good_job(frame, layout.board, app, spin);
    }
    if let Some(message) = app.modal() {
        draw_modal(frame, screen, app, message);
    }

    layout
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let (text, style) = if app.game().status().is_over() {
        let twirl = app.celebration().twirl_frame();
        let text = match twirl {
            Some(spin) => format!("{spin} {} {spin}", app.status_message()),
            None => app.status_message().to_string(),
        };
        (
            text,
            theme
                .base()
                .fg(theme.announce_fg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (app.status_message().to_string(), theme.base())
    };
    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(status, center_rect(area, area.width, 1));
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let winning = app.winning_cells();
    for pos in Position::ALL {
        let highlight = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, layout.cell(pos), app, pos, highlight);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, highlight: bool) {
    let theme = app.theme();
    let on_cursor = pos == app.cursor() && !app.game().status().is_over() && app.modal().is_none();

    let mut style = theme.base();
    if highlight {
        style = style.bg(theme.winning_cell);
    }
    let border_style = if on_cursor {
        Style::default().fg(theme.cursor_border).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.cell_border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if on_cursor { BorderType::Thick } else { BorderType::Plain })
        .border_style(border_style)
        .style(style);

    let lines: Vec<Line> = match app.game().board().get(pos) {
        Cell::Empty => vec![
            Line::default(),
            Line::from(Span::styled(
                format!("{}", pos.index() + 1),
                Style::default().fg(theme.hint_fg),
            )),
        ],
        Cell::Occupied(player) => {
            let resources = app.resources().get(player);
            let mark = Style::default()
                .fg(*resources.color())
                .add_modifier(Modifier::BOLD);
            resources
                .art()
                .iter()
                .map(|line| Line::from(Span::styled(line.clone(), mark)))
                .collect()
        }
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_buttons(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let theme = app.theme();
    if app.can_play_again() {
        let play_again = Paragraph::new("Play Again")
            .style(theme.button(theme.play_again_bg))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        frame.render_widget(play_again, layout.play_again);
    }
    let exit = Paragraph::new("Exit")
        .style(theme.button(theme.exit_bg))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    frame.render_widget(exit, layout.exit);
}

fn draw_good_job(frame: &mut Frame, board: Rect, app: &App, spin: &str) {
    let theme = app.theme();
    let area = center_rect(board, 21, 5);
    let text = vec![
        Line::from(format!("{spin}   {spin}   {spin}")),
        Line::from(Span::styled("Good job!", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!("{spin}   {spin}   {spin}")),
    ];
    let overlay = Paragraph::new(text)
        .style(theme.button(theme.play_again_bg))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Double));
    frame.render_widget(Clear, area);
    frame.render_widget(overlay, area);
}

fn draw_modal(frame: &mut Frame, screen: Rect, app: &App, message: &str) {
    let theme = app.theme();
    let area = center_rect(screen, 36, 7);
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "[ OK ]  Enter / click to close",
            Style::default().fg(theme.hint_fg),
        )),
    ];
    let modal = Paragraph::new(text)
        .style(theme.base().fg(theme.announce_fg))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Game Over")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.cell_border)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}
