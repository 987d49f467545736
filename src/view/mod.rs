//! Tabular data view: the dataset plus the search and sort state applied to it
//!
//! The view owns an immutable record sequence and the two pieces of
//! interactive state. The visible rows and the aggregate summary are derived
//! on every call; nothing is cached.

pub mod filter;
pub mod sort;


pub use filter::{SearchState, filter_records};
pub use sort::{SortDirection, SortDirective, SortKey, sort_records};

use crate::models::MeasurementRecord;
use crate::stats::{AggregateSummary, compute_aggregates};
use serde::Serialize;

/// Dataset with its current search and sort state
#[derive(Debug, Clone)]
pub struct TabularDataView {
    records: Vec<MeasurementRecord>,
    search: SearchState,
    sort: SortDirective,
}

/// Rows and aggregates as of one render
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot<'a> {
    pub search: &'a str,
    pub sort: SortDirective,
    pub total_count: usize,
    pub visible_count: usize,
    pub rows: Vec<&'a MeasurementRecord>,
    pub aggregates: AggregateSummary,
}

impl TabularDataView {
    /// Create a view over `records` with an empty search and no sort
    pub fn new(records: Vec<MeasurementRecord>) -> Self {
        Self {
            records,
            search: SearchState::default(),
            sort: SortDirective::default(),
        }
    }

    /// Full, unfiltered dataset
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn sort_directive(&self) -> SortDirective {
        self.sort
    }

    /// Replace the search text
    pub fn set_search<S: Into<String>>(&mut self, term: S) {
        self.search = SearchState::new(term);
    }

    /// Apply a header click on `key` and return the resulting directive
    pub fn toggle_sort(&mut self, key: SortKey) -> SortDirective {
        self.sort = self.sort.toggled(key);
        self.sort
    }

    /// Filtered then sorted rows for the table
    pub fn visible_records(&self) -> Vec<&MeasurementRecord> {
        let filtered = filter_records(&self.records, self.search.term());
        sort_records(filtered, &self.sort)
    }

    /// Aggregates over the full dataset, independent of the search
    pub fn aggregates(&self) -> AggregateSummary {
        compute_aggregates(&self.records)
    }

    /// Everything a renderer needs for one frame
    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        let rows = self.visible_records();
        ViewSnapshot {
            search: self.search.term(),
            sort: self.sort,
            total_count: self.records.len(),
            visible_count: rows.len(),
            rows,
            aggregates: self.aggregates(),
        }
    }
}

impl Default for TabularDataView {
    fn default() -> Self {
        Self::new(crate::models::sample_records())
    }
}
