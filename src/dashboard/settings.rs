//! Settings panel toggles
//!
//! These toggles carry state only. Nothing else in the dashboard reads them.

use serde::{Deserialize, Serialize};

/// Display section of the settings tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_status_colors: bool,
    pub auto_refresh: bool,
    pub compact_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_status_colors: true,
            auto_refresh: true,
            compact_mode: false,
        }
    }
}

/// Notifications section of the settings tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub low_speed_alerts: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            low_speed_alerts: true,
            weekly_reports: false,
        }
    }
}

/// Labeled toggle as rendered in a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub label: &'static str,
    pub checked: bool,
}

impl DisplaySettings {
    pub fn toggles(&self) -> Vec<Toggle> {
        vec![
            Toggle { label: "Show statuses in color", checked: self.show_status_colors },
            Toggle { label: "Auto-refresh data", checked: self.auto_refresh },
            Toggle { label: "Compact mode", checked: self.compact_mode },
        ]
    }
}

impl NotificationSettings {
    pub fn toggles(&self) -> Vec<Toggle> {
        vec![
            Toggle { label: "Low speed alerts", checked: self.low_speed_alerts },
            Toggle { label: "Weekly reports", checked: self.weekly_reports },
        ]
    }
}
