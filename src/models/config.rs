//! Configuration data model and validation

use crate::dashboard::{DisplaySettings, ExportSettings, NotificationSettings, Tab};
use crate::logging::{LogFormat, LogLevel};
use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,

    /// Tab rendered when none is requested explicitly
    #[serde(default = "default_tab")]
    pub default_tab: Tab,

    /// JSON dataset to load instead of the built-in sample records
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Log output format
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    /// Explicit log level; derived from verbose/debug when unset
    #[serde(default)]
    pub log_level: Option<LogLevel>,

    /// Initial state of the display toggles on the settings tab
    #[serde(default)]
    pub display: DisplaySettings,

    /// Initial state of the notification toggles on the settings tab
    #[serde(default)]
    pub notifications: NotificationSettings,

    /// Initial state of the export panel toggles
    #[serde(default)]
    pub export: ExportSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
            default_tab: default_tab(),
            data_file: None,
            log_format: default_log_format(),
            log_level: None,
            display: DisplaySettings::default(),
            notifications: NotificationSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.data_file {
            if path.as_os_str().is_empty() {
                return Err(AppError::config("Dataset path cannot be empty"));
            }

            if !path.is_file() {
                return Err(AppError::config(format!(
                    "Dataset file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Minimum log level implied by this configuration
    pub fn effective_log_level(&self) -> LogLevel {
        if let Some(level) = self.log_level {
            level
        } else if self.debug {
            LogLevel::Debug
        } else if self.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        }
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        if let Ok(tab) = std::env::var("DEFAULT_TAB") {
            self.default_tab = tab.parse()
                .map_err(|e| AppError::config(format!("Invalid DEFAULT_TAB value '{}': {}", tab, e)))?;
        }

        if let Ok(data_file) = std::env::var("SPEED_DATA_FILE") {
            let trimmed = data_file.trim();
            if !trimmed.is_empty() {
                self.data_file = Some(PathBuf::from(trimmed));
            }
        }

        if let Ok(format) = std::env::var("LOG_FORMAT") {
            self.log_format = format.parse()
                .map_err(|e| AppError::config(format!("Invalid LOG_FORMAT value '{}': {}", format, e)))?;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.log_level = Some(level.parse()
                .map_err(|e| AppError::config(format!("Invalid LOG_LEVEL value '{}': {}", level, e)))?);
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

fn default_tab() -> Tab {
    crate::defaults::DEFAULT_TAB
}

fn default_log_format() -> LogFormat {
    crate::defaults::DEFAULT_LOG_FORMAT
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_tab, Tab::Table);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_missing_data_file_invalid() {
        let mut config = Config::default();
        config.data_file = Some(PathBuf::from("/no/such/dataset.json"));
        let error = config.validate().unwrap_err();
        assert_eq!(error.category(), "CONFIG");
        assert!(error.to_string().contains("Dataset file not found"));
    }

    #[test]
    fn test_existing_data_file_valid() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.data_file = Some(file.path().to_path_buf());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_log_level() {
        let mut config = Config::default();
        assert_eq!(config.effective_log_level(), LogLevel::Warn);

        config.verbose = true;
        assert_eq!(config.effective_log_level(), LogLevel::Info);

        config.debug = true;
        assert_eq!(config.effective_log_level(), LogLevel::Debug);

        config.log_level = Some(LogLevel::Error);
        assert_eq!(config.effective_log_level(), LogLevel::Error);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_tab": "analytics"}"#).unwrap();
        assert_eq!(config.default_tab, Tab::Analytics);
        assert!(config.enable_color);
        assert!(config.display.show_status_colors);
        assert!(!config.display.compact_mode);
    }
}
