//! Dashboard chrome around the data view: tabs and the static panels

pub mod export;
pub mod help;
pub mod settings;
pub mod state;
pub mod tabs;

pub use export::{ExportAction, ExportOutcome, ExportPanel, ExportSettings};
pub use help::{HelpSection, help_sections};
pub use settings::{DisplaySettings, NotificationSettings, Toggle};
pub use state::Dashboard;
pub use tabs::Tab;
