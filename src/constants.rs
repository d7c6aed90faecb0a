//! Constants used throughout the application
//!
//! This module centralizes UI text, file names and configuration limits.

// Application identity
pub const APP_NAME: &str = "timedit";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "timedit.toml";
pub const LOG_FILE_NAME: &str = "timedit.log";

// Grid labels
pub const LABEL_ISO_TIME: &str = "ISO time";
pub const LABEL_UNIX_TIMESTAMP: &str = "UNIX timestamp";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
/// Positional arguments shown in the usage line
pub const USAGE_ARGS: &str = "[TIME]";

// UI Layout Constants
/// Minimum label column width in columns
pub const LABEL_MIN_WIDTH: u16 = 8;
/// Maximum label column width in columns
pub const LABEL_MAX_WIDTH: u16 = 40;
/// Default label column width in columns
pub const LABEL_DEFAULT_WIDTH: u16 = 15;

// Event loop
/// Default delay between ticks when no input is pending
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
