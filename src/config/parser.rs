//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::Result,
    models::Config,
};
use std::path::PathBuf;

/// Configuration parser that layers defaults, .env, environment and CLI arguments
pub struct ConfigParser {
    cli: Cli,
    env_file: PathBuf,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            env_file: PathBuf::from(".env"),
        }
    }

    /// Read the .env layer from `path` instead of the current directory
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.env_file = path.into();
        self
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        let mut config = Config::default();

        EnvManager::load_env_file_from(&self.env_file, self.cli.debug)?;

        config.merge_from_env()?;

        self.apply_cli_overrides(&mut config)?;

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) -> Result<()> {
        if self.cli.color {
            config.enable_color = true;
        }
        if self.cli.no_color {
            config.enable_color = false;
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if let Some(tab) = self.cli.selected_tab()? {
            config.default_tab = tab;
        }

        if let Some(ref path) = self.cli.data {
            config.data_file = Some(path.clone());
        }

        if let Some(format) = self.cli.parsed_log_format()? {
            config.log_format = format;
        }

        if config.debug {
            eprintln!("Applied CLI overrides to configuration");
            eprintln!("{}", display_config_summary(config));
        }

        Ok(())
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Default tab: {}", config.default_tab.key()));
    summary.push(format!(
        "Dataset: {}",
        config.data_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in sample".to_string())
    ));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));
    summary.push(format!("Log format: {:?}", config.log_format));
    summary.push(format!("Log level: {}", config.effective_log_level().as_str()));

    summary.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_LOCK;
    use crate::dashboard::Tab;
    use crate::logging::{LogFormat, LogLevel};
    use clap::Parser;
    use std::env;
    use tempfile::{NamedTempFile, TempDir};

    const VARS: [&str; 5] = ["ENABLE_COLOR", "DEFAULT_TAB", "SPEED_DATA_FILE", "LOG_FORMAT", "LOG_LEVEL"];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn parser(args: &[&str], dir: &TempDir) -> ConfigParser {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        ConfigParser::new(Cli::parse_from(argv)).with_env_file(dir.path().join(".env"))
    }

    #[test]
    fn test_defaults_without_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = TempDir::new().unwrap();

        let config = parser(&[], &dir).parse().unwrap();
        assert_eq!(config.default_tab, Tab::Table);
        assert_eq!(config.enable_color, crate::defaults::DEFAULT_ENABLE_COLOR);
        assert!(config.data_file.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_env_file_then_env_then_cli() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env"), "DEFAULT_TAB=help\nLOG_FORMAT=compact\n").unwrap();

        let config = parser(&[], &dir).parse().unwrap();
        assert_eq!(config.default_tab, Tab::Help);
        assert_eq!(config.log_format, LogFormat::Compact);

        env::set_var("DEFAULT_TAB", "settings");
        let config = parser(&[], &dir).parse().unwrap();
        assert_eq!(config.default_tab, Tab::Settings);

        let config = parser(&["--tab", "export", "--log-format", "json"], &dir).parse().unwrap();
        assert_eq!(config.default_tab, Tab::Export);
        assert_eq!(config.log_format, LogFormat::Json);

        clear_env();
    }

    #[test]
    fn test_cli_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("ENABLE_COLOR", "true");
        env::set_var("LOG_LEVEL", "error");
        let dir = TempDir::new().unwrap();
        let dataset = NamedTempFile::new().unwrap();
        let dataset_path = dataset.path().to_str().unwrap().to_string();

        let config = parser(&["--no-color", "--verbose", "--data", &dataset_path], &dir)
            .parse()
            .unwrap();

        assert!(!config.enable_color);
        assert!(config.verbose);
        assert_eq!(config.data_file.as_deref(), Some(dataset.path()));
        assert_eq!(config.effective_log_level(), LogLevel::Error);

        clear_env();
    }

    #[test]
    fn test_invalid_env_value_names_variable() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("ENABLE_COLOR", "sometimes");
        let dir = TempDir::new().unwrap();

        let error = parser(&[], &dir).parse().unwrap_err();
        assert_eq!(error.category(), "CONFIG");
        assert!(error.to_string().contains("ENABLE_COLOR"));

        clear_env();
    }

    #[test]
    fn test_missing_dataset_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = TempDir::new().unwrap();

        let error = parser(&["--data", "/no/such/speeds.json"], &dir).parse().unwrap_err();
        assert!(error.to_string().contains("Dataset file not found"));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_display_config_summary() {
        let config = Config::default();
        let summary = display_config_summary(&config);
        assert!(summary.contains("Default tab: table"));
        assert!(summary.contains("Dataset: built-in sample"));
        assert!(summary.contains("Log level: WARN"));
    }
}
