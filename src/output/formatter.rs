//! Core formatting traits and implementations
//!
//! This module defines the dashboard formatting interface and provides
//! a plain text implementation with table formatting capabilities.

use crate::{
    dashboard::{DisplaySettings, ExportPanel, HelpSection, NotificationSettings, Tab, Toggle},
    error::{AppError, Result},
    models::MeasurementRecord,
    stats::AggregateSummary,
    view::{SortDirective, SortKey, ViewSnapshot},
};
use std::fmt::Write as _;

/// Main trait for dashboard formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format the tab bar with the active tab highlighted
    fn format_tab_bar(&self, active: Tab) -> Result<String>;

    /// Format the three summary cards
    fn format_summary_cards(&self, summary: &AggregateSummary) -> Result<String>;

    /// Format the visible rows as a table
    fn format_record_table(&self, snapshot: &ViewSnapshot<'_>) -> Result<String>;

    /// Format status distribution and location averages
    fn format_analytics(&self, summary: &AggregateSummary) -> Result<String>;

    /// Format the settings toggles
    fn format_settings(&self, display: &DisplaySettings, notifications: &NotificationSettings) -> Result<String>;

    /// Format the help sections
    fn format_help(&self, sections: &[HelpSection]) -> Result<String>;

    /// Format the export actions and their settings
    fn format_export(&self, panel: &ExportPanel) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Show table borders
    pub table_borders: bool,
    /// Maximum width of any table column
    pub max_column_width: usize,
    /// Width of the distribution bars on the analytics tab
    pub bar_width: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            table_borders: true,
            max_column_width: 40,
            bar_width: 20,
        }
    }
}

/// Table formatting configuration
#[derive(Debug, Clone)]
pub struct TableFormat {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Show borders around table
    pub show_borders: bool,
    /// Maximum column width
    pub max_column_width: usize,
}

/// Column definition for table formatting
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header
    pub header: String,
    /// Column alignment
    pub alignment: Alignment,
    /// Minimum width
    pub min_width: usize,
}

/// Text alignment options
#[derive(Debug, Clone, Copy)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Row data for table formatting
pub type RowData = Vec<String>;

/// Column order of the measurement table; `None` marks the unsortable status column
pub(crate) const TABLE_COLUMNS: [(&str, Option<SortKey>, Alignment); 6] = [
    ("Service", Some(SortKey::Service), Alignment::Left),
    ("Test Type", Some(SortKey::TestType), Alignment::Left),
    ("Speed", Some(SortKey::Speed), Alignment::Right),
    ("Status", None, Alignment::Center),
    ("Location", Some(SortKey::Location), Alignment::Left),
    ("Date", Some(SortKey::Date), Alignment::Left),
];

/// Index of the status column in `TABLE_COLUMNS`
pub(crate) const STATUS_COLUMN: usize = 3;

/// Measurement table layout for a sort directive: headers carry the sort arrow
pub(crate) fn record_table_format(sort: &SortDirective, show_borders: bool, max_column_width: usize) -> TableFormat {
    let columns = TABLE_COLUMNS
        .iter()
        .map(|(title, key, alignment)| {
            let header = match (key, sort.key) {
                (Some(key), Some(active)) if *key == active => {
                    format!("{} {}", title, sort.direction.arrow())
                }
                _ => title.to_string(),
            };
            Column { header, alignment: *alignment, min_width: 4 }
        })
        .collect();

    TableFormat { columns, show_borders, max_column_width }
}

/// One table row as displayed
pub(crate) fn record_row(record: &MeasurementRecord) -> RowData {
    vec![
        record.service.clone(),
        record.test_type.clone(),
        record.speed_display(),
        record.status.label().to_string(),
        record.location.clone(),
        record.date.clone(),
    ]
}

/// Display width of a cell; counts chars so non-ASCII text lines up
pub(crate) fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Table with column widths resolved and every cell padded
pub(crate) struct TableLayout {
    pub widths: Vec<usize>,
    pub header: RowData,
    pub rows: Vec<RowData>,
}

impl TableLayout {
    pub fn new(format: &TableFormat, rows: &[RowData]) -> Self {
        let widths = calculate_column_widths(format, rows);

        let pad_row = |row: &[String]| -> RowData {
            row.iter()
                .zip(widths.iter())
                .enumerate()
                .map(|(idx, (cell, &width))| {
                    let alignment = format.columns.get(idx).map(|c| c.alignment).unwrap_or(Alignment::Left);
                    align_text(cell, width, alignment)
                })
                .collect()
        };

        let header: RowData = format.columns.iter().map(|c| c.header.clone()).collect();
        Self {
            header: pad_row(&header),
            rows: rows.iter().map(|row| pad_row(row)).collect(),
            widths,
        }
    }

    /// Horizontal border for bordered tables
    pub fn border(&self) -> String {
        let mut border = String::new();

        if !self.widths.is_empty() {
            border.push('+');
            for &width in &self.widths {
                border.push_str(&"-".repeat(width + 2));
                border.push('+');
            }
        }

        border
    }

    /// Join already padded (and possibly styled) cells into a line
    pub fn join_row(cells: &[String], show_borders: bool) -> String {
        if show_borders {
            format!("| {} |", cells.join(" | "))
        } else {
            cells.join("  ").trim_end().to_string()
        }
    }
}

/// Calculate optimal column widths
fn calculate_column_widths(format: &TableFormat, rows: &[RowData]) -> Vec<usize> {
    let num_columns = format.columns.len().max(
        rows.iter().map(|r| r.len()).max().unwrap_or(0)
    );

    (0..num_columns)
        .map(|col_idx| {
            let mut max_width = format.columns
                .get(col_idx)
                .map(|c| c.min_width.max(text_width(&c.header)))
                .unwrap_or(0);

            // Find maximum content width in this column
            for row in rows {
                if let Some(cell) = row.get(col_idx) {
                    max_width = max_width.max(text_width(cell));
                }
            }

            max_width.min(format.max_column_width)
        })
        .collect()
}

/// Align text within specified width
pub(crate) fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
    let len = text_width(text);
    if len >= width {
        return text.chars().take(width).collect();
    }

    let padding = width - len;
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
        Alignment::Center => {
            let left_pad = padding / 2;
            let right_pad = padding - left_pad;
            format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
        }
    }
}

/// Format percentage with one decimal
pub(crate) fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Format a speed average the way the summary cards show it
pub(crate) fn format_speed(speed: f64) -> String {
    format!("{:.1} Mbps", speed)
}

/// Number of filled cells of a `width`-wide bar at `percentage`
pub(crate) fn bar_fill(percentage: f64, width: usize) -> usize {
    ((percentage.clamp(0.0, 100.0) * width as f64 / 100.0).round() as usize).min(width)
}

pub(crate) fn toggle_mark(toggle: &Toggle) -> &'static str {
    if toggle.checked { "[x]" } else { "[ ]" }
}

pub(crate) fn fmt_error(e: std::fmt::Error) -> AppError {
    AppError::io(format!("Failed to format output: {}", e))
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Create a table with the given format and data
    fn create_table(&self, format: &TableFormat, rows: &[RowData]) -> String {
        let layout = TableLayout::new(format, rows);
        let mut lines = Vec::new();

        if format.show_borders {
            lines.push(layout.border());
        }
        lines.push(TableLayout::join_row(&layout.header, format.show_borders));
        if format.show_borders {
            lines.push(layout.border());
        }

        for row in &layout.rows {
            lines.push(TableLayout::join_row(row, format.show_borders));
        }

        if format.show_borders {
            lines.push(layout.border());
        }

        lines.join("\n")
    }

    fn create_bar(&self, percentage: f64) -> String {
        let width = self.options.bar_width;
        let filled = bar_fill(percentage, width);
        format!("[{}{}]", "=".repeat(filled), " ".repeat(width - filled))
    }

    fn format_toggles(&self, output: &mut String, title: &str, toggles: &[Toggle]) -> Result<()> {
        writeln!(output, "{}:", title).map_err(fmt_error)?;
        for toggle in toggles {
            writeln!(output, "  {} {}", toggle_mark(toggle), toggle.label).map_err(fmt_error)?;
        }
        Ok(())
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "=".repeat(text_width(title) + 4);

        writeln!(output, "{}", border).map_err(fmt_error)?;
        writeln!(output, "  {}  ", title).map_err(fmt_error)?;
        write!(output, "{}", border).map_err(fmt_error)?;

        Ok(output)
    }

    fn format_tab_bar(&self, active: Tab) -> Result<String> {
        let tabs: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| {
                if *tab == active {
                    format!("[{}]", tab.title())
                } else {
                    format!(" {} ", tab.title())
                }
            })
            .collect();

        Ok(tabs.join(" | "))
    }

    fn format_summary_cards(&self, summary: &AggregateSummary) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Average speed:     {}", format_speed(summary.average_speed)).map_err(fmt_error)?;
        writeln!(output, "Excellent results: {} of {}", summary.excellent_count, summary.total_count).map_err(fmt_error)?;
        write!(output, "Locations:         {} cities", summary.location_count()).map_err(fmt_error)?;

        Ok(output)
    }

    fn format_record_table(&self, snapshot: &ViewSnapshot<'_>) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Speed measurements").map_err(fmt_error)?;
        if !snapshot.search.is_empty() {
            writeln!(output, "Search: \"{}\" ({} of {} records)",
                snapshot.search, snapshot.visible_count, snapshot.total_count).map_err(fmt_error)?;
        }

        if snapshot.rows.is_empty() {
            write!(output, "No measurements match the search.").map_err(fmt_error)?;
            return Ok(output);
        }

        let format = record_table_format(&snapshot.sort, self.options.table_borders, self.options.max_column_width);
        let rows: Vec<RowData> = snapshot.rows.iter().map(|record| record_row(record)).collect();
        output.push_str(&self.create_table(&format, &rows));

        Ok(output)
    }

    fn format_analytics(&self, summary: &AggregateSummary) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Status distribution:").map_err(fmt_error)?;
        for share in &summary.status_breakdown {
            writeln!(output, "  {:<10} {:>3} ({:>6})  {}",
                share.status.label(),
                share.count,
                format_percentage(share.percentage),
                self.create_bar(share.percentage)).map_err(fmt_error)?;
        }

        writeln!(output).map_err(fmt_error)?;
        write!(output, "Top locations:").map_err(fmt_error)?;
        if summary.location_summary.is_empty() {
            write!(output, "\n  No locations recorded.").map_err(fmt_error)?;
        }

        let name_width = summary.location_summary
            .iter()
            .map(|l| text_width(&l.location))
            .max()
            .unwrap_or(0);
        for location in &summary.location_summary {
            write!(output, "\n  {}  {:>12}  {} tests",
                align_text(&location.location, name_width, Alignment::Left),
                format_speed(location.average_speed),
                location.test_count).map_err(fmt_error)?;
        }

        Ok(output)
    }

    fn format_settings(&self, display: &DisplaySettings, notifications: &NotificationSettings) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Table settings").map_err(fmt_error)?;
        self.format_toggles(&mut output, "Display", &display.toggles())?;
        self.format_toggles(&mut output, "Notifications", &notifications.toggles())?;

        Ok(output.trim_end().to_string())
    }

    fn format_help(&self, sections: &[HelpSection]) -> Result<String> {
        let mut output = String::new();

        write!(output, "How to use the speed table").map_err(fmt_error)?;
        for section in sections {
            write!(output, "\n\n{}\n  {}", section.title, section.body).map_err(fmt_error)?;
        }

        Ok(output)
    }

    fn format_export(&self, panel: &ExportPanel) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Data export").map_err(fmt_error)?;
        for (index, action) in panel.actions().iter().enumerate() {
            writeln!(output, "  {}. {:<16} ({})", index + 1, action.label(), action.key()).map_err(fmt_error)?;
        }
        writeln!(output).map_err(fmt_error)?;
        self.format_toggles(&mut output, "Export settings", &panel.settings.toggles())?;

        Ok(output.trim_end().to_string())
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("ERROR: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TabularDataView;

    fn plain() -> PlainFormatter {
        PlainFormatter::new(FormattingOptions {
            enable_color: false,
            ..FormattingOptions::default()
        })
    }

    #[test]
    fn test_header() {
        let header = plain().format_header("Speed Analytics").unwrap();
        assert_eq!(header, "===================\n  Speed Analytics  \n===================");
    }

    #[test]
    fn test_tab_bar_marks_active() {
        let bar = plain().format_tab_bar(Tab::Analytics).unwrap();
        assert!(bar.contains("[Analytics]"));
        assert!(bar.contains(" Speed Table "));
    }

    #[test]
    fn test_record_table_rows_in_view_order() {
        let mut view = TabularDataView::default();
        view.set_search("moscow");
        view.toggle_sort(SortKey::Speed);

        let table = plain().format_record_table(&view.snapshot()).unwrap();
        assert!(table.contains("Search: \"moscow\" (4 of 8 records)"));
        assert!(table.contains("Speed ↑"));

        let youtube = table.find("YouTube").unwrap();
        let google = table.find("Google").unwrap();
        let telegram = table.find("Telegram").unwrap();
        let spotify = table.find("Spotify").unwrap();
        assert!(youtube < google && google < telegram && telegram < spotify);
    }

    #[test]
    fn test_record_table_empty_result() {
        let mut view = TabularDataView::default();
        view.set_search("no such service");
        let table = plain().format_record_table(&view.snapshot()).unwrap();
        assert!(table.contains("No measurements match the search."));
    }

    #[test]
    fn test_table_borders_line_up() {
        let view = TabularDataView::default();
        let table = plain().format_record_table(&view.snapshot()).unwrap();
        let lines: Vec<&str> = table.lines().skip(1).collect();
        let width = text_width(lines[0]);
        assert!(lines.iter().all(|line| text_width(line) == width));
    }

    #[test]
    fn test_summary_cards() {
        let view = TabularDataView::default();
        let cards = plain().format_summary_cards(&view.aggregates()).unwrap();
        assert!(cards.contains("Average speed:     193.2 Mbps"));
        assert!(cards.contains("Excellent results: 3 of 8"));
        assert!(cards.contains("Locations:         5 cities"));
    }

    #[test]
    fn test_analytics() {
        let view = TabularDataView::default();
        let analytics = plain().format_analytics(&view.aggregates()).unwrap();
        assert!(analytics.contains("Excellent    3 ( 37.5%)"));
        assert!(analytics.contains("Good         4 ( 50.0%)  [==========          ]"));
        assert!(analytics.contains("Moscow"));
        assert!(analytics.contains("4 tests"));
        assert!(analytics.contains("Kazan             850.0 Mbps  1 tests"));
    }

    #[test]
    fn test_settings_and_export() {
        let settings = plain()
            .format_settings(&DisplaySettings::default(), &NotificationSettings::default())
            .unwrap();
        assert!(settings.contains("[x] Show statuses in color"));
        assert!(settings.contains("[ ] Compact mode"));
        assert!(settings.contains("[ ] Weekly reports"));

        let export = plain().format_export(&ExportPanel::default()).unwrap();
        assert!(export.contains("1. Export to CSV"));
        assert!(export.contains("6. Send by email"));
        assert!(export.contains("[x] Export only filtered data"));
    }

    #[test]
    fn test_align_text() {
        assert_eq!(align_text("ab", 4, Alignment::Left), "ab  ");
        assert_eq!(align_text("ab", 4, Alignment::Right), "  ab");
        assert_eq!(align_text("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(align_text("Москва", 3, Alignment::Left), "Мос");
    }
}
