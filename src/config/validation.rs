//! Non-fatal checks on the configuration and the loaded dataset
//!
//! Hard failures (missing files, duplicate ids, non-finite speeds) are
//! errors raised elsewhere. The checks here only produce warnings that
//! explain surprising table behavior.

use crate::{
    error::Result,
    models::{Config, MeasurementRecord, SpeedStatus},
};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Dataset and configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration and inspect the dataset it produced
    pub fn validate_comprehensive(config: &Config, records: &[MeasurementRecord]) -> Result<Vec<ValidationWarning>> {
        config.validate()?;

        let mut warnings = Vec::new();
        warnings.extend(Self::validate_dataset_size(records));
        warnings.extend(Self::validate_units(records));
        warnings.extend(Self::validate_statuses(records));
        warnings.extend(Self::validate_dates(records));
        warnings.extend(Self::validate_speeds(records));

        Ok(warnings)
    }

    fn validate_dataset_size(records: &[MeasurementRecord]) -> Vec<ValidationWarning> {
        if records.is_empty() {
            vec![ValidationWarning::new(
                ValidationLevel::Warning,
                "Dataset is empty; the table and analytics tabs will have no rows".to_string(),
            )]
        } else {
            Vec::new()
        }
    }

    /// Speed sorting ignores units, so mixed units deserve a note
    fn validate_units(records: &[MeasurementRecord]) -> Vec<ValidationWarning> {
        let units: BTreeSet<&str> = records.iter().map(|record| record.unit.as_str()).collect();
        if units.len() > 1 {
            let listed = units.into_iter().collect::<Vec<_>>().join(", ");
            vec![ValidationWarning::new(
                ValidationLevel::Info,
                format!("Speeds use several units ({}); sorting and averages compare raw values", listed),
            )]
        } else {
            Vec::new()
        }
    }

    fn validate_statuses(records: &[MeasurementRecord]) -> Vec<ValidationWarning> {
        let unknown: BTreeSet<&str> = records
            .iter()
            .filter(|record| matches!(record.status, SpeedStatus::Other(_)))
            .map(|record| record.status.label())
            .collect();

        unknown
            .into_iter()
            .map(|status| ValidationWarning::new(
                ValidationLevel::Info,
                format!("Status '{}' is not one of Excellent, Good, Average and is excluded from the distribution", status),
            ))
            .collect()
    }

    /// Dates sort as text, which only matches chronology for YYYY-MM-DD
    fn validate_dates(records: &[MeasurementRecord]) -> Vec<ValidationWarning> {
        records
            .iter()
            .filter(|record| NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").is_err())
            .map(|record| ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Record {} has date '{}' which is not YYYY-MM-DD; date sorting may be out of order", record.id, record.date),
            ))
            .collect()
    }

    fn validate_speeds(records: &[MeasurementRecord]) -> Vec<ValidationWarning> {
        records
            .iter()
            .filter(|record| record.speed < 0.0)
            .map(|record| ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Record {} has a negative speed {}", record.id, record.speed),
            ))
            .collect()
    }
}

/// Validation warning levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLevel {
    Info,
    Warning,
}

impl ValidationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationLevel::Info => "INFO",
            ValidationLevel::Warning => "WARNING",
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    pub fn format(&self) -> String {
        format!("[{}] {}", self.level.as_str(), self.message)
    }
}

/// Convenience wrapper around [`ConfigValidator::validate_comprehensive`]
pub fn validate_config(config: &Config, records: &[MeasurementRecord]) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_records;

    fn record(id: u32, unit: &str, status: &str, date: &str) -> MeasurementRecord {
        MeasurementRecord::new(id, "Service", "Download", 10.0, unit, SpeedStatus::from(status), "Kazan", date)
    }

    #[test]
    fn test_sample_dataset_only_notes_units() {
        let warnings = validate_config(&Config::default(), &sample_records()).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, ValidationLevel::Info);
        assert!(warnings[0].message.contains("Gbps, Kbps, Mbps"));
    }

    #[test]
    fn test_empty_dataset_warning() {
        let warnings = validate_config(&Config::default(), &[]).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].format().starts_with("[WARNING] Dataset is empty"));
    }

    #[test]
    fn test_unknown_status_and_bad_date() {
        let records = vec![
            record(1, "Mbps", "Poor", "2024-01-15"),
            record(2, "Mbps", "Poor", "15.01.2024"),
        ];
        let warnings = validate_config(&Config::default(), &records).unwrap();

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.contains("Status 'Poor'"));
        assert!(warnings[1].message.contains("Record 2"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let mut config = Config::default();
        config.data_file = Some("/no/such/dataset.json".into());
        assert!(validate_config(&config, &sample_records()).is_err());
    }
}
