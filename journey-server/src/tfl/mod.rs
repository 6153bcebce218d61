//! TfL Unified API client.
//!
//! The planner talks to the upstream through the [`TransitApi`] trait so
//! it can be exercised against in-memory data. [`TflClient`] is the HTTP
//! implementation.
//!
//! Key characteristics of the upstream:
//! - Station search may return a `HUB...` id grouping several mode-specific
//!   stop points, each of which must be queried separately
//! - Journey legs often omit intermediate stops
//! - Line topology comes per direction, one sequence per branch

mod client;
mod error;
mod types;

#[cfg(test)]
pub(crate) mod testing;

use crate::domain::LineId;

pub use client::{DEFAULT_BASE_URL, TflClient, TflConfig};
pub use error::TflError;
pub use types::{
    Identifier, Instruction, Journey, JourneyResults, Leg, NamedStop, Path, Point, RouteOption,
    RouteSequence, StopPoint, StopPointMatch, StopPointSearchResponse, StopPointSequence,
};

/// Direction of a line route sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Outbound => "outbound",
            Direction::Inbound => "inbound",
        }
    }
}

/// Optional date/time hints passed through to the journey planner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyQuery {
    /// `yyyyMMdd`
    pub date: Option<String>,
    /// `HHmm`
    pub time: Option<String>,
}

/// Upstream operations the planner depends on.
#[allow(async_fn_in_trait)]
pub trait TransitApi {
    /// Search stations by free-text name. Best match first.
    async fn search_stop_points(&self, query: &str) -> Result<Vec<StopPointMatch>, TflError>;

    /// Fetch a stop point with its children.
    async fn stop_point(&self, id: &str) -> Result<StopPoint, TflError>;

    /// Fetch the stop sequences of a line in one direction.
    async fn route_sequence(
        &self,
        line: &LineId,
        direction: Direction,
    ) -> Result<RouteSequence, TflError>;

    /// Plan itineraries between two stop point ids.
    async fn journey_results(
        &self,
        from: &str,
        to: &str,
        when: &JourneyQuery,
    ) -> Result<Vec<Journey>, TflError>;
}
