//! Type definitions and aliases

use crate::models::SpeedStatus;
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Display treatment of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    /// Excellent results
    Green,
    /// Good results
    Blue,
    /// Average results
    Orange,
    /// Anything outside the known statuses
    Gray,
}

impl StatusTone {
    /// Classify a status into its badge treatment
    pub fn from_status(status: &SpeedStatus) -> Self {
        match status {
            SpeedStatus::Excellent => Self::Green,
            SpeedStatus::Good => Self::Blue,
            SpeedStatus::Average => Self::Orange,
            SpeedStatus::Other(_) => Self::Gray,
        }
    }

    /// Human-readable color name, used in the help tab
    pub fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Gray => "gray",
        }
    }
}
