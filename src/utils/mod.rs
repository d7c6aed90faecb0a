//! Utility modules for timedit.
//!
//! # Available Utilities
//!
//! - [`color`] - Color names used by the configuration file
//! - [`datetime`] - Free-form parsing of the starting time

pub mod color;
pub mod datetime;
