//! TfL Unified API response DTOs.
//!
//! These types map directly to the JSON the API returns. Fields are
//! optional or defaulted liberally: the API omits fields rather than
//! sending nulls, and different endpoints fill the same object type to
//! different depths.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::clean_line_name;

/// Response from `/StopPoint/Search/{query}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointSearchResponse {
    #[serde(default)]
    pub matches: Vec<StopPointMatch>,
}

/// One search hit. The id is either a station id or a `HUB...` id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointMatch {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub modes: Vec<String>,
}

impl StopPointMatch {
    /// Whether this match is a multi-modal hub that must be expanded.
    pub fn is_hub(&self) -> bool {
        self.id.starts_with("HUB")
    }
}

/// Response from `/StopPoint/{id}`. Children nest arbitrarily deep.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPoint {
    pub naptan_id: Option<String>,
    pub id: Option<String>,
    pub common_name: Option<String>,
    #[serde(default)]
    pub modes: Vec<String>,
    #[serde(default)]
    pub children: Vec<StopPoint>,
}

impl StopPoint {
    /// The stop's identifier, preferring the NaPTAN id.
    pub fn node_id(&self) -> Option<&str> {
        self.naptan_id.as_deref().or(self.id.as_deref())
    }
}

/// Response from `/Line/{id}/Route/Sequence/{direction}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSequence {
    #[serde(default)]
    pub stop_point_sequences: Vec<StopPointSequence>,
}

/// One branch of a line in one direction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointSequence {
    #[serde(default)]
    pub stop_point: Vec<NamedStop>,
}

/// A stop reference carrying only what we use: its name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedStop {
    #[serde(default)]
    pub name: String,
}

/// Response from `/Journey/JourneyResults/{from}/to/{to}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResults {
    #[serde(default)]
    pub journeys: Vec<Journey>,
}

/// One itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub start_date_time: Option<NaiveDateTime>,
    pub arrival_date_time: Option<NaiveDateTime>,
    /// Minutes.
    pub duration: Option<i64>,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// One segment of an itinerary, as the journey planner reports it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Minutes.
    pub duration: Option<i64>,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
    pub mode: Option<Identifier>,
    #[serde(default)]
    pub route_options: Vec<RouteOption>,
    pub departure_point: Option<Point>,
    pub arrival_point: Option<Point>,
    pub instruction: Option<Instruction>,
    pub path: Option<Path>,
}

impl Leg {
    /// Upstream mode name, or empty.
    pub fn mode_name(&self) -> &str {
        self.mode.as_ref().map(|m| m.name.as_str()).unwrap_or("")
    }

    /// Name of the first route option, if any.
    pub fn route_option_name(&self) -> Option<&str> {
        self.route_options
            .first()
            .map(|r| r.name.as_str())
            .filter(|n| !n.is_empty())
    }

    /// Display line name: the first route option, or the mode when the
    /// leg has none, with long spellings shortened.
    pub fn line_display_name(&self) -> String {
        clean_line_name(self.route_option_name().unwrap_or(self.mode_name()))
    }

    pub fn departure_name(&self) -> &str {
        self.departure_point
            .as_ref()
            .and_then(|p| p.common_name.as_deref())
            .unwrap_or("")
    }

    pub fn arrival_name(&self) -> &str {
        self.arrival_point
            .as_ref()
            .and_then(|p| p.common_name.as_deref())
            .unwrap_or("")
    }

    /// Partial stop list carried on the leg, possibly empty.
    pub fn path_stops(&self) -> Vec<String> {
        self.path
            .as_ref()
            .map(|p| p.stop_points.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Identifier {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteOption {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub common_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Instruction {
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    #[serde(default, alias = "stopList")]
    pub stop_points: Vec<NamedStop>,
}
