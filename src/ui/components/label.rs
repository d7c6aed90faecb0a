use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
};

/// Create a field label, rendered as `text:`
#[must_use]
pub fn create_label(text: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(format!("{text}:")).style(Style::default().fg(color))
}
