//! Tests for the terminal app state, driven without a terminal.

use crossterm::event::KeyCode;
use gridtac::{App, Effect, MAX_BOARD_SIZE, UiEvent};
use gridtac::tui::{Action, Direction};
use gridtac_core::{BoardSize, Player, StartRequest};
use std::time::Duration;

const COMPUTER_DELAY: Duration = Duration::from_millis(500);
const ANNOUNCE_DELAY: Duration = Duration::from_millis(100);

fn app(request: StartRequest) -> App {
    App::new(request, COMPUTER_DELAY, ANNOUNCE_DELAY)
}

fn single_event(effects: Vec<Effect>) -> (Duration, UiEvent) {
    assert_eq!(effects.len(), 1, "expected one effect, got {:?}", effects);
    let Effect::Schedule { after, event } = effects.into_iter().next().unwrap();
    (after, event)
}

#[test]
fn test_two_player_moves_schedule_nothing() {
    let mut app = app(StartRequest::default());
    assert!(app.handle_key(KeyCode::Char('5')).is_empty());
    assert_eq!(app.session().game().current_player(), Player::O);
    assert_eq!(app.message(), "Current Player: Player O");
}

#[test]
fn test_cursor_placement() {
    let mut app = app(StartRequest::default());
    app.handle_key(KeyCode::Right);
    app.handle_key(KeyCode::Down);
    assert_eq!(app.cursor(), 4);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.session().snapshot().cells[4], Some(Player::X));
}

#[test]
fn test_computer_reply_is_scheduled_and_applied() {
    let mut app = app(StartRequest::default().with_single_player(true));
    let (after, event) = single_event(app.handle_key(KeyCode::Char('5')));
    assert_eq!(after, COMPUTER_DELAY);
    assert!(matches!(event, UiEvent::ComputerTurn { .. }));

    assert!(app.handle_ui_event(event).is_empty());
    let snapshot = app.session().snapshot();
    assert_eq!(snapshot.cells[0], Some(Player::O));
    assert_eq!(snapshot.current_player, Player::X);
    assert_eq!(app.cursor(), 0);
}

#[test]
fn test_undo_discards_pending_computer_reply() {
    let mut app = app(StartRequest::default().with_single_player(true));
    let (_, event) = single_event(app.handle_key(KeyCode::Char('5')));

    app.handle_key(KeyCode::Char('u'));
    assert!(app.handle_ui_event(event).is_empty());
    assert!(app.session().game().history().is_empty());
}

#[test]
fn test_win_announces_after_delay() {
    let mut app = app(StartRequest::default().with_player_x_name("Ada"));
    let mut effects = Vec::new();
    for key in ['1', '5', '2', '6', '3'] {
        effects = app.handle_key(KeyCode::Char(key));
    }
    let (after, event) = single_event(effects);
    assert_eq!(after, ANNOUNCE_DELAY);
    assert_eq!(app.announcement(), None);

    app.handle_ui_event(event);
    assert_eq!(app.announcement(), Some("Ada wins!"));

    // Any key starts a fresh game.
    app.handle_key(KeyCode::Char('x'));
    assert_eq!(app.announcement(), None);
    assert!(app.session().game().history().is_empty());
}

#[test]
fn test_undo_before_announcement_cancels_it() {
    let mut app = app(StartRequest::default());
    let mut effects = Vec::new();
    for key in ['1', '5', '2', '6', '3'] {
        effects = app.handle_key(KeyCode::Char(key));
    }
    let (_, event) = single_event(effects);

    app.handle_key(KeyCode::Char('u'));
    app.handle_ui_event(event);
    assert_eq!(app.announcement(), None);
    assert!(!app.session().game().is_over());
}

#[test]
fn test_computer_can_win_and_announce() {
    // X plays 8, 7, 3 while the computer fills 0, 1, 2.
    let mut app = app(StartRequest::default().with_single_player(true));

    for index in [8, 7] {
        let (_, event) = single_event(app.apply(Action::PlaceAt(index)));
        assert!(app.handle_ui_event(event).is_empty());
    }
    let (_, event) = single_event(app.apply(Action::PlaceAt(3)));
    let (after, announce) = single_event(app.handle_ui_event(event));
    assert_eq!(after, ANNOUNCE_DELAY);

    app.handle_ui_event(announce);
    assert_eq!(app.announcement(), Some("Computer wins!"));
}

#[test]
fn test_clicks_ignored_while_computer_pending() {
    let mut app = app(StartRequest::default().with_single_player(true));
    app.handle_key(KeyCode::Char('5'));
    assert!(app.handle_key(KeyCode::Char('1')).is_empty());
    assert_eq!(app.session().game().history().len(), 1);
}

#[test]
fn test_resize_and_mode_toggle_restart() {
    let mut app = app(StartRequest::default());
    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('+'));
    assert_eq!(app.size().get(), 4);
    assert!(app.session().game().history().is_empty());

    app.handle_key(KeyCode::Char('m'));
    assert!(app.session().single_player());
    assert_eq!(app.session().roster().name(Player::O), "Computer");
}

#[test]
fn test_shrink_stops_at_one() {
    let request = StartRequest::default().with_size(BoardSize::new(1).unwrap());
    let mut app = app(request);
    app.apply(Action::Shrink);
    assert_eq!(app.size().get(), 1);
    assert!(app.message().contains("Board size"));
}

#[test]
fn test_grow_stops_at_screen_limit() {
    let request = StartRequest::default().with_size(BoardSize::new(MAX_BOARD_SIZE).unwrap());
    let mut app = app(request);
    app.apply(Action::Grow);
    assert_eq!(app.size().get(), MAX_BOARD_SIZE);
    assert!(app.message().contains("to fit on screen"));
}

#[test]
fn test_cursor_action_and_quit() {
    let mut app = app(StartRequest::default());
    app.apply(Action::Cursor(Direction::Right));
    assert_eq!(app.cursor(), 1);
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}
