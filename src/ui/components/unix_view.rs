//! Read-only view of the UNIX epoch seconds of the edited time.

use super::time_widget::ParseResult;
use crate::ui::core::{Action, Component};
use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::cell::Cell;
use std::rc::Rc;

pub struct UnixView {
    seconds: Rc<Cell<i64>>,
}

impl UnixView {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            seconds: Rc::new(Cell::new(time.timestamp())),
        }
    }

    pub fn seconds(&self) -> i64 {
        self.seconds.get()
    }

    pub fn text(&self) -> String {
        self.seconds().to_string()
    }

    /// Change callback that keeps this view in step with a [`TimeWidget`].
    ///
    /// Parse errors leave the last valid value on screen.
    ///
    /// [`TimeWidget`]: super::TimeWidget
    pub fn follower(&self) -> impl FnMut(&ParseResult) + 'static {
        let seconds = Rc::clone(&self.seconds);
        move |result: &ParseResult| {
            if let Ok(time) = result {
                seconds.set(time.timestamp());
            }
        }
    }
}

impl Component for UnixView {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(Paragraph::new(self.text()), rect);
    }
}
