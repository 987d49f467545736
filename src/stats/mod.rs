//! Aggregate statistics for the summary cards and the analytics tab
//!
//! All figures are computed over the full dataset. Speeds are averaged as
//! raw magnitudes; units are not normalized.

use crate::{
    models::{MeasurementRecord, SpeedStatus},
    utils::{mean, percentage},
};
use serde::{Deserialize, Serialize};

/// Count and share of one status in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusShare {
    pub status: SpeedStatus,
    pub count: usize,
    /// 0..=100
    pub percentage: f64,
}

/// Per-location average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub location: String,
    pub average_speed: f64,
    pub test_count: usize,
}

/// Everything shown in the hero cards and the analytics tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub total_count: usize,
    pub average_speed: f64,
    pub excellent_count: usize,
    /// One entry per known status, in Excellent, Good, Average order
    pub status_breakdown: Vec<StatusShare>,
    /// One entry per distinct location, in order of first appearance
    pub location_summary: Vec<LocationSummary>,
}

impl AggregateSummary {
    /// Number of distinct locations
    pub fn location_count(&self) -> usize {
        self.location_summary.len()
    }

    pub fn status_share(&self, status: &SpeedStatus) -> Option<&StatusShare> {
        self.status_breakdown.iter().find(|share| &share.status == status)
    }
}

/// Compute the aggregate summary of `records`
///
/// An empty dataset yields zero averages and zero percentages.
pub fn compute_aggregates(records: &[MeasurementRecord]) -> AggregateSummary {
    let total_count = records.len();

    let status_breakdown = SpeedStatus::KNOWN
        .iter()
        .map(|status| {
            let count = records.iter().filter(|r| &r.status == status).count();
            StatusShare {
                status: status.clone(),
                count,
                percentage: percentage(count, total_count),
            }
        })
        .collect();

    AggregateSummary {
        total_count,
        average_speed: mean(records.iter().map(|r| r.speed)),
        excellent_count: records
            .iter()
            .filter(|r| r.status == SpeedStatus::Excellent)
            .count(),
        status_breakdown,
        location_summary: summarize_locations(records),
    }
}

fn summarize_locations(records: &[MeasurementRecord]) -> Vec<LocationSummary> {
    let mut locations: Vec<&str> = Vec::new();
    for record in records {
        if !locations.contains(&record.location.as_str()) {
            locations.push(&record.location);
        }
    }

    locations
        .into_iter()
        .map(|location| {
            let speeds: Vec<f64> = records
                .iter()
                .filter(|r| r.location == location)
                .map(|r| r.speed)
                .collect();

            LocationSummary {
                location: location.to_string(),
                test_count: speeds.len(),
                average_speed: mean(speeds),
            }
        })
        .collect()
}
