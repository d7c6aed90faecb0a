//! Reusable UI components

pub mod label;
pub mod time_widget;
pub mod unix_view;

// Component exports
pub use label::create_label;
pub use time_widget::TimeWidget;
pub use unix_view::UnixView;
