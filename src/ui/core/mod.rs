//! Core UI functionality for timedit.
//!
//! # Module Components
//!
//! - [`actions`] - Results of handling input, passed up to the application
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling with a periodic tick
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** tell the application what a key press amounted to
//! 3. **Events** are read through the [`EventHandler`]

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
