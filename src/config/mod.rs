//! Configuration: TOML file with defaults for every key.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig};
