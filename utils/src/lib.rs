//! Shared utilities for the native-auth crates.

pub mod config;
pub mod logging;
pub mod time;

pub use config::{load_toml_file, parse_toml, ConfigError};
pub use logging::init_tracing;
pub use time::format_duration;
