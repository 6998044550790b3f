//! Stateless UI rendering.

use super::app::App;
use gridtac_core::{GameSnapshot, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "arrows/hjkl move  enter place  u undo  r restart  +/- size  m mode  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let session = app.session();
    let mode = if session.single_player() {
        "vs Computer"
    } else {
        "Two players"
    };
    let title = Paragraph::new(format!("gridtac - {} - {}", app.size(), mode))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let snapshot = session.snapshot();
    draw_board(frame, chunks[1], &snapshot, app.cursor());

    let (status, style) = match app.announcement() {
        Some(message) => (
            format!("{} Press any key for a new game.", message),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => (app.message().to_string(), Style::default().fg(Color::Yellow)),
    };
    let status = Paragraph::new(status)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Board as styled text lines, one per row plus separators.
pub fn board_lines(snapshot: &GameSnapshot, cursor: usize) -> Vec<Line<'static>> {
    let n = snapshot.size;
    let winning = snapshot.winning_line.as_deref().unwrap_or(&[]);
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
            let index = row * n + col;
            spans.push(cell_span(
                snapshot.cells[index],
                index == cursor,
                winning.contains(&index),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span(cell: Option<Player>, is_cursor: bool, is_winning: bool) -> Span<'static> {
    let (symbol, base_style) = match cell {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if is_winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: usize) {
    let n = snapshot.size as u16;
    let width = n * 4 - 1;
    let height = n * 2 - 1;
    let board = Paragraph::new(board_lines(snapshot, cursor)).alignment(Alignment::Left);
    frame.render_widget(board, center_rect(area, width, height));
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
