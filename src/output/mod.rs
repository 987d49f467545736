//! Output formatting and display system
//!
//! This module renders the dashboard tabs as colored or plain text,
//! and the current view as a JSON snapshot.

mod formatter;
mod colored;

pub use formatter::{
    OutputFormatter,
    PlainFormatter,
    TableFormat,
    FormattingOptions,
    Column,
    Alignment,
    RowData,
};
pub use colored::{
    ColoredFormatter,
    ColorScheme,
};

use crate::{
    dashboard::{Dashboard, Tab, help_sections},
    error::Result,
    view::ViewSnapshot,
};
use serde::Serialize;

/// Title shown above the tab bar
pub const DASHBOARD_TITLE: &str = "Speed Analytics";

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            ..FormattingOptions::default()
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(false)
    }
}

/// JSON document for `--json`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonView<'a> {
    active_tab: Tab,
    #[serde(flatten)]
    snapshot: ViewSnapshot<'a>,
}

/// Main output coordinator that handles all dashboard display
pub struct OutputCoordinator {
    formatter: Box<dyn OutputFormatter>,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &dyn OutputFormatter {
        self.formatter.as_ref()
    }

    /// Content of a single tab, without the page chrome
    pub fn render_tab_content(&self, dashboard: &Dashboard, tab: Tab) -> Result<String> {
        let view = dashboard.view();
        match tab {
            Tab::Table => self.formatter.format_record_table(&view.snapshot()),
            Tab::Analytics => self.formatter.format_analytics(&view.aggregates()),
            Tab::Settings => self.formatter.format_settings(&dashboard.display, &dashboard.notifications),
            Tab::Help => self.formatter.format_help(&help_sections()),
            Tab::Export => self.formatter.format_export(&dashboard.export),
        }
    }

    /// Full page for one tab: title, summary cards, tab bar and tab content
    pub fn render_tab(&self, dashboard: &Dashboard, tab: Tab) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.formatter.format_header(DASHBOARD_TITLE)?);
        output.push_str("\n\n");

        output.push_str(&self.formatter.format_summary_cards(&dashboard.view().aggregates())?);
        output.push_str("\n\n");

        output.push_str(&self.formatter.format_tab_bar(tab)?);
        output.push_str("\n\n");

        output.push_str(&self.render_tab_content(dashboard, tab)?);

        Ok(output)
    }

    /// Full page for the dashboard's active tab
    pub fn render_active(&self, dashboard: &Dashboard) -> Result<String> {
        self.render_tab(dashboard, dashboard.active_tab())
    }

    /// Title and summary cards followed by every tab in order
    pub fn render_all(&self, dashboard: &Dashboard) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.formatter.format_header(DASHBOARD_TITLE)?);
        output.push_str("\n\n");
        output.push_str(&self.formatter.format_summary_cards(&dashboard.view().aggregates())?);

        for tab in Tab::ALL {
            output.push_str("\n\n");
            output.push_str(&self.formatter.format_tab_bar(tab)?);
            output.push_str("\n\n");
            output.push_str(&self.render_tab_content(dashboard, tab)?);
        }

        Ok(output)
    }

    /// Current view as pretty-printed JSON
    pub fn render_json(&self, dashboard: &Dashboard) -> Result<String> {
        let document = JsonView {
            active_tab: dashboard.active_tab(),
            snapshot: dashboard.view().snapshot(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SortKey;

    fn plain_coordinator() -> OutputCoordinator {
        OutputCoordinator::new(OutputFormatterFactory::create_plain_formatter())
    }

    #[test]
    fn test_render_table_tab() {
        let dashboard = Dashboard::default();
        let output = plain_coordinator().render_active(&dashboard).unwrap();

        assert!(output.contains(DASHBOARD_TITLE));
        assert!(output.contains("Excellent results: 3 of 8"));
        assert!(output.contains("[Speed Table]"));
        assert!(output.contains("Netflix"));
    }

    #[test]
    fn test_render_each_tab() {
        let dashboard = Dashboard::default();
        let coordinator = plain_coordinator();

        let analytics = coordinator.render_tab(&dashboard, Tab::Analytics).unwrap();
        assert!(analytics.contains("Status distribution:"));

        let settings = coordinator.render_tab(&dashboard, Tab::Settings).unwrap();
        assert!(settings.contains("Auto-refresh data"));

        let help = coordinator.render_tab(&dashboard, Tab::Help).unwrap();
        assert!(help.contains("Search and filtering"));

        let export = coordinator.render_tab(&dashboard, Tab::Export).unwrap();
        assert!(export.contains("Export to Excel"));
    }

    #[test]
    fn test_render_all_contains_every_tab() {
        let output = plain_coordinator().render_all(&Dashboard::default()).unwrap();
        for tab in Tab::ALL {
            assert!(output.contains(&format!("[{}]", tab.title())));
        }
    }

    #[test]
    fn test_summary_cards_ignore_search() {
        let mut dashboard = Dashboard::default();
        dashboard.view_mut().set_search("kazan");
        let output = plain_coordinator().render_active(&dashboard).unwrap();
        assert!(output.contains("Excellent results: 3 of 8"));
        assert!(output.contains("(1 of 8 records)"));
    }

    #[test]
    fn test_render_json() {
        let mut dashboard = Dashboard::default();
        dashboard.view_mut().set_search("moscow");
        dashboard.view_mut().toggle_sort(SortKey::Speed);

        let json = plain_coordinator().render_json(&dashboard).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["activeTab"], "table");
        assert_eq!(value["visibleCount"], 4);
        assert_eq!(value["sort"]["key"], "speed");
        assert_eq!(value["sort"]["direction"], "ascending");
        let services: Vec<&str> = value["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["service"].as_str().unwrap())
            .collect();
        assert_eq!(services, vec!["YouTube", "Google", "Telegram", "Spotify"]);
    }
}
