//! Journey orchestration: from two station names to ranked routes.
//!
//! Stages, each a concurrent batch joined before the next:
//! 1. Search both station names, expanding hubs into physical nodes
//! 2. Query the journey planner for every plausible node pair
//! 3. Deduplicate itineraries and warm the line sequence cache
//! 4. Enrich and merge the legs of a bounded number of itineraries
//! 5. Rank, filter and deduplicate the resulting routes

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::cache::LineSequenceCache;
use crate::domain::{Journey, Route};
use crate::tfl::{self, JourneyQuery, StopPointMatch, TflError, TransitApi};

use super::config::PlannerConfig;
use super::enrich::enrich_leg;
use super::merge::merge_legs;
use super::nodes::{best_node, node_pairs, rail_node_ids};
use super::rank::{filter_routes, rank_routes};
use super::signature::{dedup_by_signature, group_by_signature, raw_signature};

/// Error from journey planning.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Missing or malformed input
    #[error("{0}")]
    InvalidRequest(String),

    /// A station name matched nothing
    #[error("Station not found: {query}")]
    StationNotFound { query: String },

    /// No node pair produced any itinerary
    #[error("No journeys found")]
    NoJourneys,

    /// An upstream call that the pipeline can't do without failed
    #[error(transparent)]
    Upstream(#[from] TflError),
}

/// Request for journey planning.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Origin station name, free text.
    pub from: String,

    /// Destination station name, free text.
    pub to: String,

    /// Optional date/time hints for the journey planner.
    pub when: JourneyQuery,
}

impl PlanRequest {
    /// Create a new request for the next departures.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            when: JourneyQuery::default(),
        }
    }

    pub fn with_when(mut self, when: JourneyQuery) -> Self {
        self.when = when;
        self
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return Err(PlanError::InvalidRequest(
                "from and to required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Journey planner over a transit API and a shared sequence cache.
pub struct JourneyPlanner<'a, A: TransitApi> {
    api: &'a A,
    cache: &'a LineSequenceCache,
    config: &'a PlannerConfig,
}

impl<'a, A: TransitApi> JourneyPlanner<'a, A> {
    /// Create a new planner.
    pub fn new(api: &'a A, cache: &'a LineSequenceCache, config: &'a PlannerConfig) -> Self {
        Self { api, cache, config }
    }

    /// Plan journeys between two named stations.
    ///
    /// Returns routes ranked best-first. An empty list means itineraries
    /// were found but none survived filtering.
    pub async fn plan(&self, request: &PlanRequest) -> Result<Vec<Route>, PlanError> {
        request.validate()?;
        let from = request.from.trim();
        let to = request.to.trim();
        info!(from, to, "planning journey");

        let (from_ids, to_ids) = self.resolve_stations(from, to).await?;
        info!(from = ?from_ids, to = ?to_ids, "resolved station nodes");

        let pairs = node_pairs(&from_ids, &to_ids);
        debug!(
            from = best_node(&from_ids).unwrap_or(""),
            to = best_node(&to_ids).unwrap_or(""),
            "best node pair"
        );
        info!(pairs = pairs.len(), "querying node pairs");

        let batches = join_all(
            pairs
                .iter()
                .map(|(f, t)| self.query_pair(f, t, &request.when)),
        )
        .await;

        let itineraries = dedup_by_signature(batches.into_iter().flatten().collect(), raw_signature);
        info!(unique = itineraries.len(), "deduplicated itineraries");
        if itineraries.is_empty() {
            return Err(PlanError::NoJourneys);
        }

        let lines = self.cache.prefetch(self.api, &itineraries).await;
        debug!(lines, "line sequences cached");

        let groups = group_by_signature(itineraries, raw_signature);
        info!(groups = groups.len(), "route groups");

        let routes = join_all(
            groups
                .iter()
                .take(self.config.max_groups)
                .map(|group| self.build_route(from, to, group)),
        )
        .await;

        let ranked = rank_routes(routes.into_iter().flatten().collect());
        let routes = filter_routes(ranked, to);
        info!(routes = routes.len(), "journey planning complete");

        Ok(routes)
    }

    /// Search both names concurrently and expand them into node ids.
    async fn resolve_stations(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(Vec<String>, Vec<String>), PlanError> {
        let (from_matches, to_matches) = tokio::join!(
            self.api.search_stop_points(from),
            self.api.search_stop_points(to)
        );
        let from_match = first_match(from_matches?, from)?;
        let to_match = first_match(to_matches?, to)?;
        debug!(from = %from_match.id, to = %to_match.id, "station search matched");

        let (from_ids, to_ids) = tokio::join!(
            rail_node_ids(self.api, &from_match),
            rail_node_ids(self.api, &to_match)
        );
        let from_ids = from_ids?;
        let to_ids = to_ids?;

        if from_ids.is_empty() {
            return Err(PlanError::StationNotFound {
                query: from.to_string(),
            });
        }
        if to_ids.is_empty() {
            return Err(PlanError::StationNotFound {
                query: to.to_string(),
            });
        }

        Ok((from_ids, to_ids))
    }

    /// Itineraries for one node pair. Failures yield none.
    async fn query_pair(&self, from: &str, to: &str, when: &JourneyQuery) -> Vec<tfl::Journey> {
        match self.api.journey_results(from, to, when).await {
            Ok(journeys) => {
                debug!(from, to, count = journeys.len(), "journey results");
                journeys
            }
            Err(e) => {
                warn!(from, to, error = %e, "journey query failed, skipping pair");
                Vec::new()
            }
        }
    }

    /// Enrich up to `max_departures` itineraries of one group into a route.
    async fn build_route(&self, from: &str, to: &str, group: &[tfl::Journey]) -> Option<Route> {
        let departures = join_all(
            group
                .iter()
                .take(self.config.max_departures)
                .map(|j| self.enrich_journey(j)),
        )
        .await;

        Route::from_departures(from, to, departures)
    }

    /// Enrich every leg of an itinerary, then merge split rides.
    async fn enrich_journey(&self, journey: &tfl::Journey) -> Journey {
        let legs = join_all(journey.legs.iter().map(|leg| enrich_leg(leg, self.cache))).await;

        Journey {
            start: journey
                .legs
                .first()
                .and_then(|l| l.departure_time)
                .or(journey.start_date_time),
            arrival: journey
                .legs
                .last()
                .and_then(|l| l.arrival_time)
                .or(journey.arrival_date_time),
            duration_mins: journey.duration,
            legs: merge_legs(legs, self.config.merge_gap()),
        }
    }
}

/// The best search match, or not-found.
fn first_match(matches: Vec<StopPointMatch>, query: &str) -> Result<StopPointMatch, PlanError> {
    matches
        .into_iter()
        .next()
        .ok_or_else(|| PlanError::StationNotFound {
            query: query.to_string(),
        })
}
