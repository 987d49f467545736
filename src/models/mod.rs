//! Data models and structures for the speed analytics dashboard

pub mod config;
pub mod record;

// Re-export main model types
pub use config::Config;
pub use record::{MeasurementRecord, SpeedStatus, sample_records, load_records, parse_records, validate_records};
