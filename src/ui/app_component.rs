use crate::config::UiConfig;
use crate::constants::{LABEL_ISO_TIME, LABEL_UNIX_TIMESTAMP};
use crate::timestamp::TimestampError;
use crate::ui::components::{create_label, TimeWidget, UnixView};
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// The whole screen: labels, the time editor and the UNIX view
pub struct AppComponent {
    time_widget: TimeWidget,
    unix_view: UnixView,
    ui: UiConfig,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(start: DateTime<Utc>, ui: UiConfig) -> Result<Self, TimestampError> {
        let unix_view = UnixView::new(start);
        let mut time_widget = TimeWidget::new(start)?
            .with_error_color(ui.error_color())
            .set_changed_fn(unix_view.follower());
        time_widget.on_focus();

        Ok(Self {
            time_widget,
            unix_view,
            ui,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn time_widget(&self) -> &TimeWidget {
        &self.time_widget
    }

    pub fn unix_view(&self) -> &UnixView {
        &self.unix_view
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Esc => {
                log::info!("Global key: Esc - quitting application");
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        if action == Action::Quit {
            self.should_quit = true;
        }
        action
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.handle_global_key(key) {
            Action::None => self.time_widget.handle_key_events(key),
            action => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let borders = self.ui.borders;
        let grid = LayoutManager::grid(rect, self.ui.label_width, borders);

        for cell in [grid.iso_label, grid.iso_value, grid.unix_label, grid.unix_value] {
            f.render_widget(LayoutManager::cell_block(borders), cell);
        }

        let label_color = self.ui.label_color();
        f.render_widget(
            create_label(LABEL_ISO_TIME, label_color),
            LayoutManager::cell_inner(grid.iso_label, borders),
        );
        f.render_widget(
            create_label(LABEL_UNIX_TIMESTAMP, label_color),
            LayoutManager::cell_inner(grid.unix_label, borders),
        );

        self.time_widget
            .render(f, LayoutManager::cell_inner(grid.iso_value, borders));
        self.unix_view
            .render(f, LayoutManager::cell_inner(grid.unix_value, borders));
    }
}
