//! Planner configuration.

use chrono::Duration;

/// Limits and thresholds for journey planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum number of route groups to enrich.
    pub max_groups: usize,

    /// Maximum number of departures enriched per group.
    pub max_departures: usize,

    /// Largest gap between consecutive legs that still counts as one ride
    /// (seconds).
    pub merge_gap_secs: i64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_groups: usize, max_departures: usize, merge_gap_secs: i64) -> Self {
        Self {
            max_groups,
            max_departures,
            merge_gap_secs,
        }
    }

    /// Returns the merge gap as a Duration.
    pub fn merge_gap(&self) -> Duration {
        Duration::seconds(self.merge_gap_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_groups: 6,
            max_departures: 3,
            merge_gap_secs: 60,
        }
    }
}
