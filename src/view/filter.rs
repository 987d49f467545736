//! Free-text search over service, test type and location

use crate::models::MeasurementRecord;
use serde::{Deserialize, Serialize};

/// Current contents of the search box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    term: String,
}

impl SearchState {
    pub fn new<S: Into<String>>(term: S) -> Self {
        Self { term: term.into() }
    }

    /// Raw search text as typed
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Case-folded needle used for matching
    fn needle(&self) -> String {
        self.term.to_lowercase()
    }

    /// Whether a record passes this search
    pub fn matches(&self, record: &MeasurementRecord) -> bool {
        matches_needle(record, &self.needle())
    }
}

fn matches_needle(record: &MeasurementRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [&record.service, &record.test_type, &record.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep records whose service, test type or location contains `search_term`,
/// ignoring case. Relative order is preserved.
pub fn filter_records<'a>(records: &'a [MeasurementRecord], search_term: &str) -> Vec<&'a MeasurementRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_needle(record, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_records;

    fn ids(records: &[&MeasurementRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_search_is_identity() {
        let records = sample_records();
        let filtered = filter_records(&records, "");
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_filter_by_location_case_insensitive() {
        let records = sample_records();
        let filtered = filter_records(&records, "moscow");
        assert_eq!(ids(&filtered), vec![1, 3, 5, 8]);

        let filtered = filter_records(&records, "MOSCOW");
        assert_eq!(ids(&filtered), vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_filter_by_service_and_test_type() {
        let records = sample_records();
        assert_eq!(ids(&filter_records(&records, "tube")), vec![3]);
        assert_eq!(ids(&filter_records(&records, "upload")), vec![2, 8]);
        assert_eq!(ids(&filter_records(&records, "load")), vec![1, 2, 6, 7, 8]);
    }

    #[test]
    fn test_filter_ignores_other_fields() {
        let records = sample_records();
        assert!(filter_records(&records, "Mbps").is_empty());
        assert!(filter_records(&records, "Excellent").is_empty());
        assert!(filter_records(&records, "2024").is_empty());
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_records(&[], "moscow").is_empty());
        assert!(filter_records(&[], "").is_empty());
    }

    #[test]
    fn test_filter_non_ascii_case_folding() {
        let records = vec![MeasurementRecord::new(
            1, "Яндекс", "Download", 10.0, "Mbps", "Good".into(), "Москва", "2024-08-17",
        )];
        assert_eq!(filter_records(&records, "москва").len(), 1);
        assert_eq!(filter_records(&records, "ЯНДЕКС").len(), 1);
    }

    #[test]
    fn test_search_state_matches() {
        let records = sample_records();
        let search = SearchState::new("Kazan");
        assert_eq!(search.term(), "Kazan");
        assert!(search.matches(&records[3]));
        assert!(!search.matches(&records[0]));
        assert!(SearchState::default().matches(&records[0]));
    }
}
