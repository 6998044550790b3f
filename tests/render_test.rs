//! Rendering tests against an in-memory terminal.

use gridtac::App;
use gridtac::tui::{board_lines, draw};
use gridtac_core::StartRequest;
use ratatui::{Terminal, backend::TestBackend};
use std::time::Duration;

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_draw_shows_marks_and_status() {
    let mut app = App::new(StartRequest::default(), Duration::ZERO, Duration::ZERO);
    app.handle_key(crossterm::event::KeyCode::Char('5'));

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("Failed to create terminal");
    terminal.draw(|f| draw(f, &app)).expect("Failed to draw");

    let text = buffer_text(&terminal);
    assert!(text.contains("X"));
    assert!(text.contains("Current Player: Player O"));
    assert!(text.contains("gridtac - 3x3"));
}

#[test]
fn test_board_lines_has_separators() {
    let app = App::new(StartRequest::default(), Duration::ZERO, Duration::ZERO);
    let lines = board_lines(&app.session().snapshot(), 0);
    // Three rows plus two separators.
    assert_eq!(lines.len(), 5);
}
