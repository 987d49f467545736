//! Export panel
//!
//! The six actions are placeholders: triggering one records the request and
//! reports that it is not available. No files are written and nothing is sent.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::settings::Toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportAction {
    Csv,
    Excel,
    Json,
    Print,
    ShareLink,
    Email,
}

impl ExportAction {
    pub const ALL: [ExportAction; 6] = [
        ExportAction::Csv,
        ExportAction::Excel,
        ExportAction::Json,
        ExportAction::Print,
        ExportAction::ShareLink,
        ExportAction::Email,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "excel",
            Self::Json => "json",
            Self::Print => "print",
            Self::ShareLink => "share-link",
            Self::Email => "email",
        }
    }

    /// Button label on the export tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "Export to CSV",
            Self::Excel => "Export to Excel",
            Self::Json => "Export to JSON",
            Self::Print => "Print report",
            Self::ShareLink => "Share link",
            Self::Email => "Send by email",
        }
    }
}

impl fmt::Display for ExportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" => Ok(Self::Excel),
            "json" => Ok(Self::Json),
            "print" => Ok(Self::Print),
            "share" | "share-link" | "link" => Ok(Self::ShareLink),
            "email" | "mail" => Ok(Self::Email),
            _ => Err(AppError::export(format!(
                "Unknown export action '{}' (expected one of: csv, excel, json, print, share-link, email)",
                s
            ))),
        }
    }
}

/// Toggles under "Export settings"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub include_headers: bool,
    pub filtered_only: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            include_headers: true,
            filtered_only: true,
        }
    }
}

impl ExportSettings {
    pub fn toggles(&self) -> Vec<Toggle> {
        vec![
            Toggle { label: "Include column headers", checked: self.include_headers },
            Toggle { label: "Export only filtered data", checked: self.filtered_only },
        ]
    }
}

/// Result of pressing an export button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The action exists on the panel but performs no work
    NotAvailable(ExportAction),
}

impl ExportOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::NotAvailable(action) => {
                format!("{}: not available in this release, no data was exported", action.label())
            }
        }
    }
}

/// Export tab state: the button set and its settings
#[derive(Debug, Clone, Default)]
pub struct ExportPanel {
    pub settings: ExportSettings,
}

impl ExportPanel {
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    pub fn actions(&self) -> &'static [ExportAction] {
        &ExportAction::ALL
    }

    /// Press an export button
    pub fn trigger(&self, action: ExportAction) -> ExportOutcome {
        ExportOutcome::NotAvailable(action)
    }
}
