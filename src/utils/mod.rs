/// Environment helpers for configuration loading
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use config::{get_env_or_default, get_env_or_none};
pub use logger::setup_logger;
