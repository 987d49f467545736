//! Column sorting: sortable keys, directions and the header-click toggle

use crate::error::AppError;
use crate::models::MeasurementRecord;
use crate::utils::safe_float_cmp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Fields a table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Service,
    TestType,
    Speed,
    Location,
    Date,
}

impl SortKey {
    /// Keys reachable by clicking a column header, in column order
    pub const HEADERS: [SortKey; 5] = [
        SortKey::Service,
        SortKey::TestType,
        SortKey::Speed,
        SortKey::Location,
        SortKey::Date,
    ];

    /// Stable identifier used on the command line and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Service => "service",
            Self::TestType => "testType",
            Self::Speed => "speed",
            Self::Location => "location",
            Self::Date => "date",
        }
    }

    /// Whether either record lacks a comparable value for this field
    pub fn is_incomparable(&self, a: &MeasurementRecord, b: &MeasurementRecord) -> bool {
        matches!(self, Self::Speed) && (a.speed.is_nan() || b.speed.is_nan())
    }

    /// Compare two records on this field in ascending order
    pub fn compare(&self, a: &MeasurementRecord, b: &MeasurementRecord) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Service => a.service.cmp(&b.service),
            Self::TestType => a.test_type.cmp(&b.test_type),
            Self::Speed => safe_float_cmp(a.speed, b.speed),
            Self::Location => a.location.cmp(&b.location),
            Self::Date => a.date.cmp(&b.date),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "id" => Ok(Self::Id),
            "service" => Ok(Self::Service),
            "testtype" | "type" => Ok(Self::TestType),
            "speed" => Ok(Self::Speed),
            "location" => Ok(Self::Location),
            "date" => Ok(Self::Date),
            "status" => Err(AppError::parse("The status column is not sortable")),
            _ => Err(AppError::parse(format!(
                "Unknown sort column '{}' (expected one of: service, testType, speed, location, date, id)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to the active column header
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key: Some(key), direction }
    }

    /// Directive after a click on `key`'s header: the same key flips the
    /// direction, a different key starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        match self.key {
            Some(current) if current == key => Self::new(key, self.direction.flipped()),
            _ => Self::new(key, SortDirection::Ascending),
        }
    }

    /// Values without an ordering (NaN speeds) go last in either direction
    fn compare(&self, key: SortKey, a: &MeasurementRecord, b: &MeasurementRecord) -> Ordering {
        let ordering = key.compare(a, b);
        if key.is_incomparable(a, b) {
            return ordering;
        }
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Stable sort by the directive; without a key the input order is kept
pub fn sort_records<'a>(
    mut records: Vec<&'a MeasurementRecord>,
    directive: &SortDirective,
) -> Vec<&'a MeasurementRecord> {
    if let Some(key) = directive.key {
        records.sort_by(|a, b| directive.compare(key, a, b));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_records;
    use crate::view::filter::filter_records;

    fn ids(records: &[&MeasurementRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_key_keeps_order() {
        let records = sample_records();
        let sorted = sort_records(records.iter().collect(), &SortDirective::default());
        assert_eq!(ids(&sorted), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_sort_speed_raw_magnitude() {
        let records = sample_records();
        let moscow = filter_records(&records, "moscow");
        let sorted = sort_records(moscow, &SortDirective::new(SortKey::Speed, SortDirection::Ascending));

        // 1.2 Gbps < 95.4 Mbps < 156 Mbps < 320 Kbps: units are ignored
        assert_eq!(ids(&sorted), vec![3, 1, 8, 5]);
    }

    #[test]
    fn test_sort_speed_descending() {
        let records = sample_records();
        let sorted = sort_records(
            records.iter().collect(),
            &SortDirective::new(SortKey::Speed, SortDirection::Descending),
        );
        assert_eq!(ids(&sorted), vec![4, 5, 8, 1, 7, 2, 6, 3]);
    }

    #[test]
    fn test_nan_speed_sorts_last_in_both_directions() {
        let mut records = sample_records();
        records[0].speed = f64::NAN;

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_records(records.iter().collect(), &SortDirective::new(SortKey::Speed, direction));
            assert_eq!(sorted.last().map(|r| r.id), Some(1), "{:?}", direction);
        }

        let descending = sort_records(
            records.iter().collect(),
            &SortDirective::new(SortKey::Speed, SortDirection::Descending),
        );
        assert_eq!(ids(&descending), vec![4, 5, 8, 7, 2, 6, 3, 1]);
    }

    #[test]
    fn test_sort_text_lexicographic() {
        let records = sample_records();
        let sorted = sort_records(
            records.iter().collect(),
            &SortDirective::new(SortKey::Service, SortDirection::Ascending),
        );
        let services: Vec<&str> = sorted.iter().map(|r| r.service.as_str()).collect();
        assert_eq!(
            services,
            vec!["Google", "Instagram", "Netflix", "Spotify", "Telegram", "VK", "Yandex", "YouTube"]
        );
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let records = sample_records();

        // Moscow rows (1, 3, 5, 8) share a key and keep input order
        let ascending = sort_records(
            records.iter().collect(),
            &SortDirective::new(SortKey::Location, SortDirection::Ascending),
        );
        assert_eq!(ids(&ascending), vec![7, 4, 1, 3, 5, 8, 6, 2]);

        let descending = sort_records(
            records.iter().collect(),
            &SortDirective::new(SortKey::Location, SortDirection::Descending),
        );
        assert_eq!(ids(&descending), vec![2, 6, 1, 3, 5, 8, 4, 7]);
    }

    #[test]
    fn test_sort_by_date_and_id() {
        let records = sample_records();
        let by_date = sort_records(
            records.iter().collect(),
            &SortDirective::new(SortKey::Date, SortDirection::Ascending),
        );
        assert_eq!(ids(&by_date), vec![7, 8, 5, 6, 3, 4, 1, 2]);

        let by_id = sort_records(
            by_date,
            &SortDirective::new(SortKey::Id, SortDirection::Descending),
        );
        assert_eq!(ids(&by_id), vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_nan_speed_does_not_panic() {
        let mut records = sample_records();
        records[0].speed = f64::NAN;
        let sorted = sort_records(
            records.iter().collect(),
            &SortDirective::new(SortKey::Speed, SortDirection::Ascending),
        );
        assert_eq!(sorted.len(), 8);
        assert_eq!(sorted.last().map(|r| r.id), Some(1));
    }

    #[test]
    fn test_toggle_transitions() {
        let directive = SortDirective::default();
        assert_eq!(directive.key, None);

        let directive = directive.toggled(SortKey::Speed);
        assert_eq!(directive, SortDirective::new(SortKey::Speed, SortDirection::Ascending));

        let directive = directive.toggled(SortKey::Speed);
        assert_eq!(directive, SortDirective::new(SortKey::Speed, SortDirection::Descending));

        let directive = directive.toggled(SortKey::Location);
        assert_eq!(directive, SortDirective::new(SortKey::Location, SortDirection::Ascending));

        let directive = directive.toggled(SortKey::Location).toggled(SortKey::Location);
        assert_eq!(directive, SortDirective::new(SortKey::Location, SortDirection::Ascending));
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("speed".parse::<SortKey>().unwrap(), SortKey::Speed);
        assert_eq!("testType".parse::<SortKey>().unwrap(), SortKey::TestType);
        assert_eq!("test-type".parse::<SortKey>().unwrap(), SortKey::TestType);
        assert_eq!("LOCATION".parse::<SortKey>().unwrap(), SortKey::Location);

        let error = "status".parse::<SortKey>().unwrap_err();
        assert!(error.to_string().contains("not sortable"));
        assert!("unit".parse::<SortKey>().is_err());
    }
}
