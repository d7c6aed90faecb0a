//! Editable timestamp field.
//!
//! Wraps the [`TimestampBuffer`] and [`Cursor`] with key handling, rendering
//! and a change notification for the host.

use crate::timestamp::{apply, Cursor, EditIntent, TimestampBuffer, TimestampError};
use crate::ui::core::{Action, Component};
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Result handed to the change callback after every edit of the text
pub type ParseResult = Result<DateTime<Utc>, TimestampError>;

/// Callback invoked synchronously after each edit
pub type ChangedFn = Box<dyn FnMut(&ParseResult)>;

pub struct TimeWidget {
    buffer: TimestampBuffer,
    cursor: Cursor,
    focused: bool,
    error_style: Style,
    changed: Option<ChangedFn>,
}

impl TimeWidget {
    /// Create a widget showing `time`, with the cursor on the first year digit
    pub fn new(time: DateTime<Utc>) -> Result<Self, TimestampError> {
        Ok(Self::from_buffer(TimestampBuffer::from_time(&time)?))
    }

    pub fn from_buffer(buffer: TimestampBuffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            focused: false,
            error_style: Style::default().fg(Color::Yellow),
            changed: None,
        }
    }

    /// Register the callback fired after every edit of the text
    pub fn set_changed_fn(mut self, handler: impl FnMut(&ParseResult) + 'static) -> Self {
        self.changed = Some(Box::new(handler));
        self
    }

    pub fn with_error_color(mut self, color: Color) -> Self {
        self.error_style = Style::default().fg(color);
        self
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Parse the current text
    pub fn parse(&self) -> ParseResult {
        self.buffer.parse()
    }

    /// Apply one editing intent. Returns whether the text changed.
    pub fn edit(&mut self, intent: EditIntent) -> bool {
        let segment = self.cursor.segment();
        let outcome = apply(intent, self.cursor, &self.buffer);
        self.cursor = outcome.cursor;

        let Some(buffer) = outcome.buffer else {
            return false;
        };
        self.buffer = buffer;
        log::debug!("TimeWidget: {:?} on {} -> {}", intent, segment.name(), self.buffer);

        let result = self.parse();
        if let Some(changed) = self.changed.as_mut() {
            changed(&result);
        }
        true
    }

    /// Buffer text followed by the highlighted parse error, if any
    pub fn line(&self) -> Line<'_> {
        let mut spans = vec![Span::raw(self.buffer.as_str())];
        if let Err(e) = self.parse() {
            let message = e.to_string();
            let suffix = error_suffix(&message, self.buffer.as_str()).to_string();
            spans.push(Span::raw(" "));
            spans.push(Span::styled(suffix, self.error_style));
        }
        Line::from(spans)
    }

    /// Terminal cursor position inside `area`, shown only while focused
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || area.is_empty() {
            return None;
        }
        let column = u16::try_from(self.cursor.offset()).unwrap_or(u16::MAX);
        Some(Position::new(
            area.x.saturating_add(column.min(area.width - 1)),
            area.y,
        ))
    }
}

/// The part of a parse error message after the quoted input.
///
/// Falls back to the whole message when the input is not quoted in it.
pub fn error_suffix<'a>(message: &'a str, input: &str) -> &'a str {
    let quoted = format!("\"{input}\"");
    let tail = message
        .find(&quoted)
        .map(|idx| message[idx + quoted.len()..].trim_start_matches(':').trim_start());

    match tail {
        Some(tail) if !tail.is_empty() => tail,
        _ => message,
    }
}

/// Map a key press to an editing intent
pub fn intent_for_key(key: &KeyEvent) -> Option<EditIntent> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    let intent = match key.code {
        KeyCode::Left => EditIntent::StepLeft,
        KeyCode::Right => EditIntent::StepRight,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => EditIntent::PrevSegment,
        KeyCode::Tab => EditIntent::NextSegment,
        KeyCode::BackTab => EditIntent::PrevSegment,
        KeyCode::Up => EditIntent::Increment,
        KeyCode::Down => EditIntent::Decrement,
        KeyCode::Char(c) => EditIntent::Digit(u8::try_from(c.to_digit(10)?).ok()?),
        _ => return None,
    };
    Some(intent)
}

impl Component for TimeWidget {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match intent_for_key(&key) {
            Some(intent) if self.edit(intent) => Action::TimeEdited,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(Paragraph::new(self.line()), rect);

        if let Some(position) = self.cursor_position(rect) {
            f.set_cursor_position(position);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
