//! Configuration management module

pub mod parser;
pub mod validation;
pub mod env;

pub use parser::{ConfigParser, load_config, display_config_summary};
pub use validation::{ConfigValidator, ValidationLevel, ValidationWarning, validate_config};
pub use env::EnvManager;

pub use crate::models::Config;

/// Serializes tests that mutate process environment variables
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
