//! Configuration: optional TOML file with output defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CheckConfig, Config, OutputConfig};
