use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard tabs, keyed by stable identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Table,
    Analytics,
    Settings,
    Help,
    Export,
}

impl Tab {
    /// All tabs in navigation order
    pub const ALL: [Tab; 5] = [Tab::Table, Tab::Analytics, Tab::Settings, Tab::Help, Tab::Export];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
            Self::Help => "help",
            Self::Export => "export",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Table => "Speed Table",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
            Self::Help => "Help",
            Self::Export => "Export",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.key() == key)
            .ok_or_else(|| AppError::parse(format!(
                "Unknown tab '{}' (expected one of: table, analytics, settings, help, export)",
                s
            )))
    }
}
