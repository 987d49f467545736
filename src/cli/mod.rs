//! Command-line interface module with topic help

pub mod help;

pub use help::HelpSystem;

use crate::{
    dashboard::{ExportAction, Tab},
    error::Result,
    logging::LogFormat,
    view::SortKey,
};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Speed Analytics - browse internet speed measurements from the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "speed-analytics")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Tab to render (table, analytics, settings, help, export)
    #[arg(short, long, value_name = "TAB")]
    pub tab: Option<String>,

    /// Render every tab in order
    #[arg(long)]
    pub all: bool,

    /// Search text matched against service, test type and location
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Click a column header (can be used multiple times, applied in order)
    #[arg(long = "sort", value_name = "COLUMN", action = ArgAction::Append)]
    pub sort: Vec<String>,

    /// JSON dataset to load instead of the sample measurements
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Press an export button (csv, excel, json, print, share-link, email)
    #[arg(long, value_name = "ACTION")]
    pub export: Option<String>,

    /// Print the current view as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Start an interactive prompt
    #[arg(short, long)]
    pub interactive: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Log output format (console, json, compact)
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Show help for specific topic (search, sort, status, config)
    #[arg(long, value_name = "TOPIC")]
    pub help_topic: Option<String>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and malformed values
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.all && self.tab.is_some() {
            return Err("Cannot specify both --all and --tab".to_string());
        }

        if self.json && self.interactive {
            return Err("Cannot specify both --json and --interactive".to_string());
        }

        self.selected_tab().map_err(|e| e.to_string())?;
        self.sort_keys().map_err(|e| e.to_string())?;
        self.export_action().map_err(|e| e.to_string())?;
        self.parsed_log_format().map_err(|e| e.to_string())?;

        Ok(())
    }

    /// Tab requested with `--tab`, if any
    pub fn selected_tab(&self) -> Result<Option<Tab>> {
        self.tab.as_deref().map(|value| value.parse()).transpose()
    }

    /// Header clicks requested with `--sort`, in order
    pub fn sort_keys(&self) -> Result<Vec<SortKey>> {
        self.sort.iter().map(|key| key.parse()).collect()
    }

    /// Export button requested with `--export`, if any
    pub fn export_action(&self) -> Result<Option<ExportAction>> {
        self.export.as_deref().map(|value| value.parse()).transpose()
    }

    /// Log format requested with `--log-format`, if any
    pub fn parsed_log_format(&self) -> Result<Option<LogFormat>> {
        self.log_format.as_deref().map(|value| value.parse()).transpose()
    }

    /// Check if help should be displayed for a specific topic
    pub fn should_show_topic_help(&self) -> bool {
        self.help_topic.is_some()
    }

    /// Get the help topic if specified
    pub fn get_help_topic(&self) -> Option<&str> {
        self.help_topic.as_deref()
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }

    /// Display help for the specified topic or main help
    pub fn display_help(&self) -> String {
        let help_system = HelpSystem::new();
        let use_colors = self.use_colors();

        if let Some(topic) = &self.help_topic {
            help_system.display_topic_help(topic, use_colors)
                .unwrap_or_else(|| {
                    format!("Unknown help topic: '{}'\n\nAvailable topics: {}\n\n{}",
                        topic, HelpSystem::TOPICS.join(", "), help_system.display_main_help(use_colors))
                })
        } else {
            help_system.display_main_help(use_colors)
        }
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
