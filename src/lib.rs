//! Speed Analytics
//!
//! A terminal dashboard over internet speed measurements: a searchable,
//! sortable table of records, an analytics summary, and the settings, help
//! and export panels around them.

pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod output;
pub mod stats;
pub mod types;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, MeasurementRecord, SpeedStatus};
pub use stats::{AggregateSummary, compute_aggregates};
pub use view::{SortDirection, SortDirective, SortKey, TabularDataView, filter_records, sort_records};
pub use dashboard::{Dashboard, Tab};
pub use output::{OutputFormatter, ColoredFormatter, PlainFormatter, OutputCoordinator, OutputFormatterFactory};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: &str = env!("GIT_COMMIT");

/// Default configuration values
pub mod defaults {
    use crate::dashboard::Tab;
    use crate::logging::LogFormat;

    pub const DEFAULT_ENABLE_COLOR: bool = true;
    pub const DEFAULT_TAB: Tab = Tab::Table;
    pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Console;
}
