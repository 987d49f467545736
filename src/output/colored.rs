//! Colored formatter implementation with terminal color support
//!
//! This module provides a colored output formatter that uses ANSI colors
//! for status badges, distribution bars and section headers.

use crate::{
    dashboard::{DisplaySettings, ExportPanel, HelpSection, NotificationSettings, Tab, Toggle},
    error::Result,
    models::SpeedStatus,
    stats::AggregateSummary,
    types::StatusTone,
    view::ViewSnapshot,
};
use super::formatter::{
    OutputFormatter, FormattingOptions, RowData, TableLayout, Alignment,
    STATUS_COLUMN, align_text, bar_fill, fmt_error, format_percentage, format_speed,
    record_row, record_table_format, text_width, toggle_mark,
};
use std::fmt::Write as _;
use colored::*;

impl StatusTone {
    /// Terminal color for this tone
    pub fn color(&self) -> Color {
        match self {
            Self::Green => Color::Green,
            Self::Blue => Color::Blue,
            // closest ANSI color to orange
            Self::Orange => Color::Yellow,
            Self::Gray => Color::BrightBlack,
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub highlight: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            highlight: Color::Magenta,
            muted: Color::BrightBlack,
            border: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Apply bold formatting if colors are enabled
    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }

    /// Status badge: white on the status tone
    fn badge(&self, text: &str, status: &SpeedStatus) -> ColoredString {
        if self.options.enable_color {
            text.white().on_color(StatusTone::from_status(status).color())
        } else {
            text.normal()
        }
    }

    /// Create a colored distribution bar
    fn create_bar(&self, percentage: f64, status: &SpeedStatus) -> String {
        let width = self.options.bar_width;
        let filled = bar_fill(percentage, width);
        let tone = StatusTone::from_status(status).color();

        format!("{}{}",
            self.colorize(&"█".repeat(filled), tone),
            self.colorize(&"░".repeat(width - filled), self.color_scheme.muted))
    }

    /// Create a colored section header
    fn create_section_header(&self, title: &str) -> String {
        if self.options.enable_color {
            title.bold().color(self.color_scheme.header).to_string()
        } else {
            title.to_string()
        }
    }

    fn format_toggles(&self, output: &mut String, title: &str, toggles: &[Toggle]) -> Result<()> {
        writeln!(output, "{}", self.bold(title)).map_err(fmt_error)?;
        for toggle in toggles {
            let mark = if toggle.checked {
                self.colorize(toggle_mark(toggle), self.color_scheme.success)
            } else {
                self.colorize(toggle_mark(toggle), self.color_scheme.muted)
            };
            writeln!(output, "  {} {}", mark, toggle.label).map_err(fmt_error)?;
        }
        Ok(())
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "═".repeat(text_width(title) + 4);

        writeln!(output, "{}", self.colorize(&border, self.color_scheme.border)).map_err(fmt_error)?;
        writeln!(output, "  {}  ", self.bold(title).color(self.color_scheme.header)).map_err(fmt_error)?;
        write!(output, "{}", self.colorize(&border, self.color_scheme.border)).map_err(fmt_error)?;

        Ok(output)
    }

    fn format_tab_bar(&self, active: Tab) -> Result<String> {
        let tabs: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| {
                if *tab == active {
                    self.bold(&format!("[{}]", tab.title()))
                        .color(self.color_scheme.highlight)
                        .to_string()
                } else {
                    self.colorize(&format!(" {} ", tab.title()), self.color_scheme.muted).to_string()
                }
            })
            .collect();

        Ok(tabs.join(" │ "))
    }

    fn format_summary_cards(&self, summary: &AggregateSummary) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "⚡ Average speed:     {}",
            self.bold(&format_speed(summary.average_speed)).color(Color::Blue)).map_err(fmt_error)?;
        writeln!(output, "📈 Excellent results: {} of {}",
            self.bold(&summary.excellent_count.to_string()).color(Color::Green),
            summary.total_count).map_err(fmt_error)?;
        write!(output, "🌐 Locations:         {} cities",
            self.bold(&summary.location_count().to_string()).color(Color::Magenta)).map_err(fmt_error)?;

        Ok(output)
    }

    fn format_record_table(&self, snapshot: &ViewSnapshot<'_>) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.create_section_header("Speed measurements")).map_err(fmt_error)?;
        if !snapshot.search.is_empty() {
            writeln!(output, "{}", self.colorize(
                &format!("Search: \"{}\" ({} of {} records)", snapshot.search, snapshot.visible_count, snapshot.total_count),
                self.color_scheme.info,
            )).map_err(fmt_error)?;
        }

        if snapshot.rows.is_empty() {
            write!(output, "{}", self.colorize("No measurements match the search.", self.color_scheme.muted))
                .map_err(fmt_error)?;
            return Ok(output);
        }

        let format = record_table_format(&snapshot.sort, self.options.table_borders, self.options.max_column_width);
        let rows: Vec<RowData> = snapshot.rows.iter().map(|record| record_row(record)).collect();
        let layout = TableLayout::new(&format, &rows);
        let border = self.colorize(&layout.border(), self.color_scheme.border).to_string();

        let header: Vec<String> = layout.header.iter().map(|cell| self.bold(cell).to_string()).collect();
        if format.show_borders {
            writeln!(output, "{}", border).map_err(fmt_error)?;
        }
        writeln!(output, "{}", TableLayout::join_row(&header, format.show_borders)).map_err(fmt_error)?;
        if format.show_borders {
            writeln!(output, "{}", border).map_err(fmt_error)?;
        }

        for (record, cells) in snapshot.rows.iter().zip(layout.rows.iter()) {
            let styled: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(idx, cell)| {
                    if idx == STATUS_COLUMN {
                        self.badge(cell, &record.status).to_string()
                    } else if idx == 0 {
                        self.bold(cell).to_string()
                    } else {
                        cell.clone()
                    }
                })
                .collect();
            writeln!(output, "{}", TableLayout::join_row(&styled, format.show_borders)).map_err(fmt_error)?;
        }

        if format.show_borders {
            write!(output, "{}", border).map_err(fmt_error)?;
        }

        Ok(output.trim_end().to_string())
    }

    fn format_analytics(&self, summary: &AggregateSummary) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.create_section_header("Status distribution")).map_err(fmt_error)?;
        for share in &summary.status_breakdown {
            writeln!(output, "  {} {:>3} ({:>6})  {}",
                self.colorize(&align_text(share.status.label(), 10, Alignment::Left), StatusTone::from_status(&share.status).color()),
                share.count,
                format_percentage(share.percentage),
                self.create_bar(share.percentage, &share.status)).map_err(fmt_error)?;
        }

        writeln!(output).map_err(fmt_error)?;
        write!(output, "{}", self.create_section_header("Top locations")).map_err(fmt_error)?;
        if summary.location_summary.is_empty() {
            write!(output, "\n  {}", self.colorize("No locations recorded.", self.color_scheme.muted)).map_err(fmt_error)?;
        }

        let name_width = summary.location_summary
            .iter()
            .map(|l| text_width(&l.location))
            .max()
            .unwrap_or(0);
        for location in &summary.location_summary {
            write!(output, "\n  📍 {}  {}  {}",
                self.bold(&align_text(&location.location, name_width, Alignment::Left)),
                self.bold(&format!("{:>12}", format_speed(location.average_speed))),
                self.colorize(&format!("{} tests", location.test_count), self.color_scheme.muted)).map_err(fmt_error)?;
        }

        Ok(output)
    }

    fn format_settings(&self, display: &DisplaySettings, notifications: &NotificationSettings) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.create_section_header("Table settings")).map_err(fmt_error)?;
        self.format_toggles(&mut output, "Display", &display.toggles())?;
        self.format_toggles(&mut output, "Notifications", &notifications.toggles())?;

        Ok(output.trim_end().to_string())
    }

    fn format_help(&self, sections: &[HelpSection]) -> Result<String> {
        let mut output = String::new();
        let accents = [Color::Blue, Color::Green, Color::Magenta];

        write!(output, "{}", self.create_section_header("How to use the speed table")).map_err(fmt_error)?;
        for (section, accent) in sections.iter().zip(accents.iter().cycle()) {
            write!(output, "\n\n{}\n  {}", self.bold(section.title).color(*accent), section.body)
                .map_err(fmt_error)?;
        }

        Ok(output)
    }

    fn format_export(&self, panel: &ExportPanel) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.create_section_header("Data export")).map_err(fmt_error)?;
        for (index, action) in panel.actions().iter().enumerate() {
            writeln!(output, "  {}. {:<16} {}",
                index + 1,
                action.label(),
                self.colorize(&format!("({})", action.key()), self.color_scheme.muted)).map_err(fmt_error)?;
        }
        writeln!(output).map_err(fmt_error)?;
        self.format_toggles(&mut output, "Export settings", &panel.settings.toggles())?;

        Ok(output.trim_end().to_string())
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("{} {}", self.colorize("✗", self.color_scheme.error), self.colorize(error, self.color_scheme.error)))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", self.colorize("⚠", self.color_scheme.warning), self.colorize(warning, self.color_scheme.warning)))
    }
}
