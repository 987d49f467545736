//! Command-line help: main usage text plus per-topic guides
//!
//! Topic help expands on the in-app help tab with the exact matching and
//! ordering rules, and on the configuration layers.

use crate::{
    config::env::EnvManager,
    models::SpeedStatus,
    types::StatusTone,
    view::SortKey,
};
use colored::*;

/// Help text for the CLI application
pub struct HelpSystem {
    version: &'static str,
}

impl HelpSystem {
    /// Topics accepted by `--help-topic`
    pub const TOPICS: [&'static str; 4] = ["search", "sort", "status", "config"];

    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Display the main help message with all available options
    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();

        help.push_str(&self.format_header(use_colors));
        help.push('\n');
        help.push_str(&self.format_usage_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_options_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_examples_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_environment_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_footer(use_colors));

        help
    }

    /// Display help for a single topic, `None` when the topic is unknown
    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.trim().to_lowercase().as_str() {
            "search" | "filter" | "filtering" => Some(self.format_search_help(use_colors)),
            "sort" | "sorting" => Some(self.format_sort_help(use_colors)),
            "status" | "statuses" => Some(self.format_status_help(use_colors)),
            "config" | "configuration" | "env" => Some(self.format_configuration_help(use_colors)),
            _ => None,
        }
    }

    fn section_header(title: &str, use_colors: bool) -> String {
        if use_colors {
            title.bright_green().bold().to_string()
        } else {
            title.to_string()
        }
    }

    fn format_header(&self, use_colors: bool) -> String {
        let title = "Speed Analytics";
        let subtitle = "Search, sort and summarize internet speed measurements";

        if use_colors {
            format!(
                "{}\n{}\nVersion: {}\n",
                title.bright_cyan().bold(),
                subtitle.bright_blue(),
                self.version.green()
            )
        } else {
            format!("{}\n{}\nVersion: {}\n", title, subtitle, self.version)
        }
    }

    fn format_usage_section(&self, use_colors: bool) -> String {
        let usage_patterns = [
            "speed-analytics [OPTIONS]",
            "speed-analytics --search <TEXT> --sort <COLUMN> [OPTIONS]",
            "speed-analytics --interactive",
            "speed-analytics --help-topic <TOPIC>",
        ];

        let mut usage = format!("{}\n", Self::section_header("USAGE:", use_colors));
        for pattern in usage_patterns {
            if use_colors {
                usage.push_str(&format!("  {}\n", pattern.bright_white()));
            } else {
                usage.push_str(&format!("  {}\n", pattern));
            }
        }

        usage
    }

    fn format_options_section(&self, use_colors: bool) -> String {
        let options = [
            OptionHelp {
                short: Some("t"),
                long: "tab",
                value: "<TAB>",
                description: "Tab to render: table, analytics, settings, help, export",
                example: Some("--tab analytics"),
            },
            OptionHelp {
                short: None,
                long: "all",
                value: "",
                description: "Render every tab in order",
                example: None,
            },
            OptionHelp {
                short: Some("s"),
                long: "search",
                value: "<TEXT>",
                description: "Filter rows by service, test type or location",
                example: Some("--search moscow"),
            },
            OptionHelp {
                short: None,
                long: "sort",
                value: "<COLUMN>",
                description: "Click a column header (repeat to toggle direction)",
                example: Some("--sort speed --sort speed"),
            },
            OptionHelp {
                short: Some("d"),
                long: "data",
                value: "<PATH>",
                description: "Load measurements from a JSON file",
                example: Some("--data speeds.json"),
            },
            OptionHelp {
                short: None,
                long: "export",
                value: "<ACTION>",
                description: "Press an export button (csv, excel, json, print, share-link, email)",
                example: Some("--export csv"),
            },
            OptionHelp {
                short: None,
                long: "json",
                value: "",
                description: "Print the visible rows and aggregates as JSON",
                example: None,
            },
            OptionHelp {
                short: Some("i"),
                long: "interactive",
                value: "",
                description: "Start an interactive prompt",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "verbose",
                value: "",
                description: "Log informational messages to stderr",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "debug",
                value: "",
                description: "Log every state change to stderr",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "log-format",
                value: "<FORMAT>",
                description: "Log format: console, json, compact",
                example: Some("--debug --log-format json"),
            },
            OptionHelp {
                short: None,
                long: "no-color",
                value: "",
                description: "Disable colored output",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "help-topic",
                value: "<TOPIC>",
                description: "Show help for search, sort, status or config",
                example: Some("--help-topic sort"),
            },
        ];

        let mut output = format!("{}\n", Self::section_header("OPTIONS:", use_colors));
        for option in options {
            output.push_str(&option.format(use_colors));
            output.push('\n');
        }

        output
    }

    fn format_examples_section(&self, use_colors: bool) -> String {
        let examples = [
            ExampleHelp {
                title: "Moscow measurements by speed value",
                command: "speed-analytics --search moscow --sort speed",
                description: "Filter the table to Moscow and sort by the raw speed value",
            },
            ExampleHelp {
                title: "Fastest results first",
                command: "speed-analytics --sort speed --sort speed",
                description: "A second click on the same header switches to descending order",
            },
            ExampleHelp {
                title: "Analytics for a custom dataset",
                command: "speed-analytics --data speeds.json --tab analytics",
                description: "Status distribution and per-city averages for your own measurements",
            },
            ExampleHelp {
                title: "Machine-readable output",
                command: "speed-analytics --search download --json",
                description: "Visible rows and aggregates as JSON for scripts",
            },
        ];

        let mut output = format!("{}\n", Self::section_header("EXAMPLES:", use_colors));
        for example in examples {
            output.push_str(&example.format(use_colors));
            output.push('\n');
        }

        output
    }

    fn format_environment_section(&self, use_colors: bool) -> String {
        let mut output = format!("{}\n", Self::section_header("ENVIRONMENT VARIABLES:", use_colors));
        output.push_str("Configuration priority: CLI arguments > Environment variables > .env file > Defaults\n\n");

        for (var_name, description, _example) in EnvManager::get_supported_env_vars() {
            if use_colors {
                output.push_str(&format!("  {}: {}\n", var_name.bright_yellow().bold(), description.white()));
            } else {
                output.push_str(&format!("  {}: {}\n", var_name, description));
            }
        }

        output
    }

    fn format_footer(&self, use_colors: bool) -> String {
        let topics = format!("More help: --help-topic {}", Self::TOPICS.join("|"));
        if use_colors {
            format!("{}\n", topics.bright_blue())
        } else {
            format!("{}\n", topics)
        }
    }

    fn format_search_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", Self::section_header("SEARCH AND FILTERING", use_colors));
        help.push_str("The search text is matched case-insensitively as a substring of:\n");
        help.push_str("  - service (e.g. \"Netflix\")\n");
        help.push_str("  - test type (e.g. \"Download\")\n");
        help.push_str("  - location (e.g. \"Moscow\")\n\n");
        help.push_str("A row is shown when any of the three fields contains the text.\n");
        help.push_str("Matching rows keep their dataset order until a sort is applied.\n");
        help.push_str("An empty search shows every row.\n\n");
        help.push_str("The summary cards and the analytics tab always describe the full dataset.\n");
        help
    }

    fn format_sort_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", Self::section_header("SORTING", use_colors));
        help.push_str("Sortable columns: ");
        help.push_str(&SortKey::HEADERS.iter().map(|key| key.as_str()).collect::<Vec<_>>().join(", "));
        help.push_str("\n\n");
        help.push_str("Each --sort (or `sort` at the prompt) is one header click:\n");
        help.push_str("  - a new column sorts ascending\n");
        help.push_str("  - the same column again flips the direction\n\n");
        help.push_str("Text columns compare lexicographically and dates compare as YYYY-MM-DD text.\n");
        help.push_str("Speed compares the raw number and ignores the unit, so 320 Kbps sorts after 156 Mbps.\n");
        help.push_str("Rows with equal values keep their previous relative order.\n");
        help
    }

    fn format_status_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", Self::section_header("SPEED STATUSES", use_colors));
        for status in SpeedStatus::KNOWN {
            let tone = StatusTone::from_status(&status);
            help.push_str(&format!("  {:<10} shown in {}\n", status.label(), tone.name()));
        }
        help.push_str("\nAny other status is shown in gray and is left out of the status distribution.\n");
        help
    }

    fn format_configuration_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", Self::section_header("CONFIGURATION REFERENCE", use_colors));
        help.push_str(&EnvManager::display_env_help());
        help.push_str("\nExample .env file:\n\n");
        help.push_str(&EnvManager::create_example_env_content());
        help
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of the OPTIONS section
struct OptionHelp {
    short: Option<&'static str>,
    long: &'static str,
    value: &'static str,
    description: &'static str,
    example: Option<&'static str>,
}

impl OptionHelp {
    fn format(&self, use_colors: bool) -> String {
        let mut option_str = String::new();

        if let Some(short) = self.short {
            if use_colors {
                option_str.push_str(&format!("  {}, ", format!("-{}", short).bright_cyan()));
            } else {
                option_str.push_str(&format!("  -{}, ", short));
            }
        } else {
            option_str.push_str("      ");
        }

        let long_with_value = if self.value.is_empty() {
            format!("--{}", self.long)
        } else {
            format!("--{} {}", self.long, self.value)
        };

        if use_colors {
            option_str.push_str(&format!("{:<24} {}", long_with_value.bright_cyan(), self.description.white()));
        } else {
            option_str.push_str(&format!("{:<24} {}", long_with_value, self.description));
        }

        if let Some(example) = self.example {
            if use_colors {
                option_str.push_str(&format!("\n{}{}", " ".repeat(31),
                    format!("Example: {}", example).bright_blue().italic()
                ));
            } else {
                option_str.push_str(&format!("\n{}Example: {}", " ".repeat(31), example));
            }
        }

        option_str
    }
}

/// One entry of the EXAMPLES section
struct ExampleHelp {
    title: &'static str,
    command: &'static str,
    description: &'static str,
}

impl ExampleHelp {
    fn format(&self, use_colors: bool) -> String {
        if use_colors {
            format!("  {}:\n    {}\n    {}\n",
                self.title.bright_yellow().bold(),
                self.command.bright_white(),
                self.description.bright_blue().italic()
            )
        } else {
            format!("  {}:\n    {}\n    {}\n", self.title, self.command, self.description)
        }
    }
}
