//! Measurement records and the built-in sample dataset

use crate::error::{AppError, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Speed classification attached to a measurement
///
/// Anything outside the three known labels is kept verbatim in `Other`
/// and rendered with the neutral treatment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpeedStatus {
    Excellent,
    Good,
    Average,
    Other(String),
}

impl SpeedStatus {
    /// The fixed enumeration shown in the status breakdown, in display order
    pub const KNOWN: [SpeedStatus; 3] = [SpeedStatus::Excellent, SpeedStatus::Good, SpeedStatus::Average];

    /// Label as it appears in the table badge
    pub fn label(&self) -> &str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for SpeedStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Excellent" => Self::Excellent,
            "Good" => Self::Good,
            "Average" => Self::Average,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for SpeedStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SpeedStatus> for String {
    fn from(status: SpeedStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for SpeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One observed speed test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub id: u32,
    pub service: String,
    pub test_type: String,
    /// Raw magnitude in `unit`; never normalized across units
    pub speed: f64,
    pub unit: String,
    pub status: SpeedStatus,
    pub location: String,
    /// Calendar date kept as text
    pub date: String,
}

impl MeasurementRecord {
    /// Create a record from its display fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        service: &str,
        test_type: &str,
        speed: f64,
        unit: &str,
        status: SpeedStatus,
        location: &str,
        date: &str,
    ) -> Self {
        Self {
            id,
            service: service.to_string(),
            test_type: test_type.to_string(),
            speed,
            unit: unit.to_string(),
            status,
            location: location.to_string(),
            date: date.to_string(),
        }
    }

    /// Speed and unit as displayed in the table, e.g. `95.4 Mbps`
    pub fn speed_display(&self) -> String {
        format!("{} {}", self.speed, self.unit)
    }
}

/// The eight measurements the dashboard ships with
pub fn sample_records() -> Vec<MeasurementRecord> {
    use SpeedStatus::*;

    vec![
        MeasurementRecord::new(1, "Google", "Download", 95.4, "Mbps", Excellent, "Moscow", "2024-08-17"),
        MeasurementRecord::new(2, "Yandex", "Upload", 42.1, "Mbps", Good, "St. Petersburg", "2024-08-17"),
        MeasurementRecord::new(3, "YouTube", "Streaming", 1.2, "Gbps", Excellent, "Moscow", "2024-08-16"),
        MeasurementRecord::new(4, "Netflix", "Streaming", 850.0, "Mbps", Good, "Kazan", "2024-08-16"),
        MeasurementRecord::new(5, "Spotify", "Audio", 320.0, "Kbps", Good, "Moscow", "2024-08-15"),
        MeasurementRecord::new(6, "Instagram", "Load Time", 2.3, "sec", Average, "Novosibirsk", "2024-08-15"),
        MeasurementRecord::new(7, "VK", "Download", 78.9, "Mbps", Good, "Ekaterinburg", "2024-08-14"),
        MeasurementRecord::new(8, "Telegram", "Upload", 156.0, "Mbps", Excellent, "Moscow", "2024-08-14"),
    ]
}

/// Check dataset invariants: unique ids and finite speeds
pub fn validate_records(records: &[MeasurementRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id) {
            return Err(AppError::validation(format!("Duplicate record id {}", record.id)));
        }

        if !record.speed.is_finite() {
            return Err(AppError::validation(format!(
                "Record {} has a non-finite speed value",
                record.id
            )));
        }
    }

    Ok(())
}

/// Parse and validate a dataset from JSON text (an array of records)
pub fn parse_records(json: &str) -> Result<Vec<MeasurementRecord>> {
    let records: Vec<MeasurementRecord> = serde_json::from_str(json)?;
    validate_records(&records)?;
    Ok(records)
}

/// Load a dataset from a JSON file
pub fn load_records(path: &Path) -> Result<Vec<MeasurementRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset '{}'", path.display()))?;

    parse_records(&content)
        .with_context(|| format!("Invalid dataset '{}'", path.display()))
}
