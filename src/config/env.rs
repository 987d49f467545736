//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load the given .env file if it exists; returns whether it was loaded
    pub fn load_env_file_from(path: &Path, debug: bool) -> Result<bool> {
        if !path.exists() {
            if debug {
                eprintln!("No .env file found at {}, using defaults and CLI arguments", path.display());
            }
            return Ok(false);
        }

        dotenv::from_path(path)
            .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;

        if debug {
            eprintln!("Loaded configuration from {}", path.display());
        }

        Ok(true)
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Speed Analytics Configuration
#
# Values here are picked up at startup and can be overridden by
# environment variables and command-line arguments.

# Enable colored output (true/false)
# ENABLE_COLOR=true

# Tab shown when --tab is not given (table, analytics, settings, help, export)
# DEFAULT_TAB=table

# JSON file with measurement records to use instead of the sample data
# SPEED_DATA_FILE=./speeds.json

# Log output format (console, json, compact)
# LOG_FORMAT=console

# Minimum log level (trace, debug, info, warn, error, fatal)
# LOG_LEVEL=warn
"#.to_string()
    }

    /// Supported environment variables as (name, description, example)
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("ENABLE_COLOR", "Enable colored output", "true"),
            ("DEFAULT_TAB", "Tab shown when --tab is not given", "analytics"),
            ("SPEED_DATA_FILE", "JSON dataset to load instead of the sample data", "./speeds.json"),
            ("LOG_FORMAT", "Log output format (console, json, compact)", "json"),
            ("LOG_LEVEL", "Minimum log level (trace..fatal)", "debug"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<16} {}\n", var, description));
            help.push_str(&format!("  {:<16} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }
}
