//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{EnrichedLeg, Journey, Route};
use crate::planner::PlanRequest;
use crate::tfl::JourneyQuery;

/// Query parameters for `/api/journey`.
///
/// Everything is optional at this layer so a missing name is reported as
/// a planning validation error rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct JourneyRequest {
    /// Origin station name
    pub from: Option<String>,

    /// Destination station name
    pub to: Option<String>,

    /// Travel date, `yyyyMMdd`
    pub date: Option<String>,

    /// Travel time, `HHmm`
    pub time: Option<String>,
}

impl JourneyRequest {
    pub fn into_plan_request(self) -> PlanRequest {
        PlanRequest::new(self.from.unwrap_or_default(), self.to.unwrap_or_default()).with_when(
            JourneyQuery {
                date: self.date.filter(|d| !d.trim().is_empty()),
                time: self.time.filter(|t| !t.trim().is_empty()),
            },
        )
    }
}

/// Response for a journey search.
#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    /// Ranked routes, best first
    pub routes: Vec<RouteResult>,
}

impl JourneyResponse {
    pub fn from_routes(routes: &[Route]) -> Self {
        Self {
            routes: routes.iter().map(RouteResult::from_route).collect(),
        }
    }
}

/// One route option.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Mode of the first non-walking leg
    pub mode: String,

    /// Line of the first non-walking leg
    pub line_name: String,

    /// Origin as requested
    pub from: String,

    /// Destination as requested
    pub to: String,

    /// Duration of the earliest departure in minutes
    pub total_duration: Option<i64>,

    /// Non-walking legs of the earliest departure
    pub legs: Vec<LegResult>,

    /// Every departure on this route, earliest first
    pub departures: Vec<DepartureResult>,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            mode: route.mode.clone(),
            line_name: route.line_name.clone(),
            from: route.from.clone(),
            to: route.to.clone(),
            total_duration: route.duration_mins,
            legs: route.legs.iter().map(LegResult::from_leg).collect(),
            departures: route
                .departures
                .iter()
                .map(DepartureResult::from_journey)
                .collect(),
        }
    }
}

/// One departure of a route, walks included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureResult {
    pub start_date_time: Option<String>,
    pub arrival_date_time: Option<String>,
    pub total_duration: Option<i64>,
    pub legs: Vec<LegResult>,
}

impl DepartureResult {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            start_date_time: journey.start.as_ref().map(format_time),
            arrival_date_time: journey.arrival.as_ref().map(format_time),
            total_duration: journey.duration_mins,
            legs: journey.legs.iter().map(LegResult::from_leg).collect(),
        }
    }
}

/// One leg with its full stop list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    pub mode: String,
    pub line_name: String,
    pub from: String,
    pub to: String,

    /// Minutes
    pub duration: Option<i64>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub instruction: Option<String>,

    /// Stop names from `from` to `to`; empty for walks and buses
    pub stops: Vec<String>,
}

impl LegResult {
    pub fn from_leg(leg: &EnrichedLeg) -> Self {
        Self {
            mode: leg.mode.to_string(),
            line_name: leg.line_name.clone(),
            from: leg.from.clone(),
            to: leg.to.clone(),
            duration: leg.duration_mins,
            departure_time: leg.departure.as_ref().map(format_time),
            arrival_time: leg.arrival.as_ref().map(format_time),
            instruction: leg.instruction.clone(),
            stops: leg.stops.clone(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Format a time the way the upstream API does.
fn format_time(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}
