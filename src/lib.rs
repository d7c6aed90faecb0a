//! timedit - a terminal editor for a single ISO-8601 timestamp
//!
//! The screen shows one editable `YYYY-MM-DDTHH:MM:SSZ` field next to its
//! UNIX epoch value. The cursor moves between the date and time segments;
//! digits overwrite in place and the arrow keys step the segment under the
//! cursor with calendar-aware arithmetic.
//!
//! # Modules
//!
//! * [`timestamp`] - The fixed-width buffer, segment cursor and edit engine
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Free-form time parsing and other helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup writing to a file while the UI owns the terminal
pub mod logger;

/// Timestamp buffer, segment cursor and edit engine
pub mod timestamp;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;
