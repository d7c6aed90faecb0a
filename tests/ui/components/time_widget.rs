use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, style::Color, Terminal};
use std::cell::RefCell;
use std::rc::Rc;
use timedit::timestamp::{EditIntent, TimestampBuffer, TimestampError};
use timedit::ui::components::time_widget::{error_suffix, intent_for_key};
use timedit::ui::components::TimeWidget;
use timedit::ui::core::{Action, Component};

type Seen = Rc<RefCell<Vec<Result<DateTime<Utc>, TimestampError>>>>;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn widget_at(text: &str) -> (TimeWidget, Seen) {
    let seen: Seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let widget = TimeWidget::from_buffer(TimestampBuffer::from_text(text).unwrap())
        .set_changed_fn(move |result| sink.borrow_mut().push(result.clone()));
    (widget, seen)
}

/// Render into a one-line terminal and return the line text
fn render_line(widget: &mut TimeWidget, width: u16) -> (String, Terminal<TestBackend>) {
    let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            widget.render(f, area);
        })
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    let line: String = (0..width).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
    (line.trim_end().to_string(), terminal)
}

#[test]
fn test_new_formats_start_time() {
    let start = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let widget = TimeWidget::new(start).unwrap();
    assert_eq!(widget.text(), "2024-01-15T10:30:00Z");
    assert_eq!(widget.cursor().offset(), 0);
    assert_eq!(widget.parse().unwrap(), start);
    assert!(!widget.is_focused());
}

#[test]
fn test_key_mapping() {
    assert_eq!(intent_for_key(&key(KeyCode::Left)), Some(EditIntent::StepLeft));
    assert_eq!(intent_for_key(&key(KeyCode::Right)), Some(EditIntent::StepRight));
    assert_eq!(intent_for_key(&key(KeyCode::Tab)), Some(EditIntent::NextSegment));
    assert_eq!(intent_for_key(&key(KeyCode::BackTab)), Some(EditIntent::PrevSegment));
    assert_eq!(
        intent_for_key(&KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
        Some(EditIntent::PrevSegment)
    );
    assert_eq!(intent_for_key(&key(KeyCode::Up)), Some(EditIntent::Increment));
    assert_eq!(intent_for_key(&key(KeyCode::Down)), Some(EditIntent::Decrement));
    assert_eq!(intent_for_key(&key(KeyCode::Char('7'))), Some(EditIntent::Digit(7)));
    assert_eq!(intent_for_key(&key(KeyCode::Char('x'))), None);
    assert_eq!(intent_for_key(&key(KeyCode::Enter)), None);
    assert_eq!(
        intent_for_key(&KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL)),
        None
    );
}

#[test]
fn test_typing_digit_notifies() {
    let (mut widget, seen) = widget_at("2024-01-15T10:30:00Z");

    let action = widget.handle_key_events(key(KeyCode::Char('1')));

    assert_eq!(action, Action::TimeEdited);
    assert_eq!(widget.text(), "1024-01-15T10:30:00Z");
    assert_eq!(widget.cursor().offset(), 1);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], Ok(Utc.with_ymd_and_hms(1024, 1, 15, 10, 30, 0).unwrap()));
}

#[test]
fn test_navigation_does_not_notify() {
    let (mut widget, seen) = widget_at("2024-01-15T10:30:00Z");

    for code in [KeyCode::Right, KeyCode::Tab, KeyCode::BackTab, KeyCode::Left, KeyCode::Char('q')] {
        assert_eq!(widget.handle_key_events(key(code)), Action::None);
    }

    assert_eq!(widget.text(), "2024-01-15T10:30:00Z");
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_rejected_digit_does_not_notify() {
    let (mut widget, seen) = widget_at("2024-01-15T10:30:00Z");
    widget.handle_key_events(key(KeyCode::Tab));

    assert_eq!(widget.handle_key_events(key(KeyCode::Char('2'))), Action::None);

    assert_eq!(widget.cursor().offset(), 5);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_up_on_month() {
    let (mut widget, seen) = widget_at("2024-01-15T10:30:00Z");
    widget.handle_key_events(key(KeyCode::Tab));

    widget.handle_key_events(key(KeyCode::Up));

    assert_eq!(widget.text(), "2024-02-15T10:30:00Z");
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_invalid_edit_passes_error_through() {
    let (mut widget, seen) = widget_at("2024-02-15T10:30:00Z");
    widget.handle_key_events(key(KeyCode::Tab));
    widget.handle_key_events(key(KeyCode::Tab));

    // Day tens 1 -> 3 gives Feb 35
    widget.handle_key_events(key(KeyCode::Char('3')));
    assert_eq!(widget.text(), "2024-02-35T10:30:00Z");

    let seen = seen.borrow();
    let err = seen[0].as_ref().unwrap_err();
    assert_eq!(err.reason, "day out of range");
}

#[test]
fn test_up_down_ignored_while_invalid() {
    let (mut widget, seen) = widget_at("2024-00-15T10:30:00Z");
    widget.handle_key_events(key(KeyCode::Tab));

    assert_eq!(widget.handle_key_events(key(KeyCode::Up)), Action::None);
    assert_eq!(widget.handle_key_events(key(KeyCode::Down)), Action::None);

    assert_eq!(widget.text(), "2024-00-15T10:30:00Z");
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_render_valid_text() {
    let (mut widget, _) = widget_at("2024-01-15T10:30:00Z");
    let (line, _) = render_line(&mut widget, 40);
    assert_eq!(line, "2024-01-15T10:30:00Z");
}

#[test]
fn test_render_appends_highlighted_error() {
    let (widget, _) = widget_at("2024-00-15T10:30:00Z");
    let mut widget = widget.with_error_color(Color::Red);

    let (line, terminal) = render_line(&mut widget, 50);

    assert_eq!(line, "2024-00-15T10:30:00Z month out of range");
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(21, 0)].fg, Color::Red);
    assert_eq!(buffer[(0, 0)].fg, Color::Reset);
}

#[test]
fn test_render_is_idempotent() {
    let (mut widget, _) = widget_at("2024-02-35T10:30:00Z");
    let (first, _) = render_line(&mut widget, 50);
    let (second, _) = render_line(&mut widget, 50);
    assert_eq!(first, second);
}

#[test]
fn test_cursor_shown_only_when_focused() {
    let (mut widget, _) = widget_at("2024-01-15T10:30:00Z");
    let area = Rect::new(3, 2, 30, 1);
    assert_eq!(widget.cursor_position(area), None);

    widget.on_focus();
    widget.handle_key_events(key(KeyCode::Tab));
    let position = widget.cursor_position(area).unwrap();
    assert_eq!((position.x, position.y), (8, 2));

    widget.on_blur();
    assert_eq!(widget.cursor_position(area), None);
}

#[test]
fn test_error_suffix_after_quoted_input() {
    let input = "2024-00-15T10:30:00Z";
    let message = format!("parsing time \"{input}\": month out of range");
    assert_eq!(error_suffix(&message, input), "month out of range");
}

#[test]
fn test_error_suffix_falls_back_to_message() {
    assert_eq!(error_suffix("input is out of range", "2024-00-15T10:30:00Z"), "input is out of range");
    let bare = "parsing time \"2024-00-15T10:30:00Z\"";
    assert_eq!(error_suffix(bare, "2024-00-15T10:30:00Z"), bare);
}
