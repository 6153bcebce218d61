//! Enriched journey legs.

use chrono::{Duration, NaiveDateTime};

use super::mode::Mode;
use super::names::{dedup_by_key, normalize};

/// One mode-homogeneous segment of a journey, with its full stop list.
///
/// For enriched modes, `stops` starts at `from`, ends at `to` and holds no
/// two names that normalize equal. Modes that are not enriched (walking,
/// bus, ...) carry an empty stop list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedLeg {
    pub mode: Mode,
    /// Display line name, or the mode name when the leg has no line.
    pub line_name: String,
    pub from: String,
    pub to: String,
    /// Duration in minutes, as reported upstream.
    pub duration_mins: Option<i64>,
    pub departure: Option<NaiveDateTime>,
    pub arrival: Option<NaiveDateTime>,
    pub instruction: Option<String>,
    pub stops: Vec<String>,
}

impl EnrichedLeg {
    pub fn is_walking(&self) -> bool {
        self.mode.is_walking()
    }

    /// Time between this leg's arrival and `next`'s departure.
    ///
    /// `None` when either time is unknown.
    pub fn gap_before(&self, next: &EnrichedLeg) -> Option<Duration> {
        Some(next.departure? - self.arrival?)
    }
}

/// Deduplicate `stops` and pin `from`/`to` to the ends.
///
/// Duplicates (by normalized name) are dropped with the first occurrence
/// kept. If the list doesn't already start at `from`, any other occurrence
/// of `from` is removed and `from` is prepended; likewise `to` is moved to
/// the end. When `from` and `to` normalize equal the leg collapses to a
/// single stop.
pub fn pin_endpoints(stops: Vec<String>, from: &str, to: &str) -> Vec<String> {
    let from_key = normalize(from);
    let to_key = normalize(to);

    if from_key == to_key {
        return vec![from.to_string()];
    }

    let mut stops = dedup_by_key(stops);

    if stops.first().map(|s| normalize(s)) != Some(from_key.clone()) {
        stops.retain(|s| normalize(s) != from_key);
        stops.insert(0, from.to_string());
    }

    if stops.last().map(|s| normalize(s)) != Some(to_key.clone()) {
        stops.retain(|s| normalize(s) != to_key);
        stops.push(to.to_string());
    }

    stops
}
