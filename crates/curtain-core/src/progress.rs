//! Progress derived from a roster.

use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// Point-in-time progress readout. Serializes to the `progressUpdate` payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    #[serde(rename = "clicked")]
    pub completed_count: usize,
    #[serde(rename = "total")]
    pub total_count: usize,
    #[serde(rename = "progress")]
    pub fraction_percent: f64,
}

impl ProgressSnapshot {
    /// Derive the snapshot for `roster`. Both counts come from the same borrow.
    pub fn of(roster: &Roster) -> Self {
        let completed_count = roster.completed_count();
        let total_count = roster.total_count();
        let fraction_percent = if total_count == 0 {
            0.0
        } else {
            100.0 * completed_count as f64 / total_count as f64
        };

        Self {
            completed_count,
            total_count,
            fraction_percent,
        }
    }
}

impl Roster {
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::of(self)
    }
}
