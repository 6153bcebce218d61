//! In-memory `TransitApi` for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::NaiveDateTime;

use crate::domain::LineId;

use super::types::{
    Identifier, Instruction, Journey, Leg, NamedStop, Path, Point, RouteOption, RouteSequence,
    StopPoint, StopPointMatch, StopPointSequence,
};
use super::{Direction, JourneyQuery, TflError, TransitApi};

/// Serves canned responses and records what was asked.
#[derive(Default)]
pub struct FakeTransit {
    stations: HashMap<String, String>,
    hubs: HashMap<String, StopPoint>,
    sequences: HashMap<(String, Direction), RouteSequence>,
    failing_lines: HashSet<String>,
    journeys: HashMap<(String, String), Vec<Journey>>,
    failing_pairs: HashSet<(String, String)>,
    failing_search: bool,
    sequence_calls: Mutex<usize>,
    journey_calls: Mutex<Vec<(String, String)>>,
    last_query: Mutex<Option<JourneyQuery>>,
}

impl FakeTransit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Station search for `query` returns `id`.
    pub fn with_station(mut self, query: &str, id: &str) -> Self {
        self.stations.insert(query.to_string(), id.to_string());
        self
    }

    /// Hub `id` has the given children: `(child id, modes)`.
    pub fn with_hub(mut self, id: &str, children: &[(&str, &[&str])]) -> Self {
        let hub = StopPoint {
            id: Some(id.to_string()),
            children: children
                .iter()
                .map(|(child, modes)| stop_point(child, modes))
                .collect(),
            ..Default::default()
        };
        self.hubs.insert(id.to_string(), hub);
        self
    }

    /// Hub `id` with an explicit child tree.
    pub fn with_hub_tree(mut self, id: &str, children: Vec<StopPoint>) -> Self {
        let hub = StopPoint {
            id: Some(id.to_string()),
            children,
            ..Default::default()
        };
        self.hubs.insert(id.to_string(), hub);
        self
    }

    pub fn with_sequences(mut self, line: &str, direction: Direction, seqs: &[&[&str]]) -> Self {
        let sequence = RouteSequence {
            stop_point_sequences: seqs
                .iter()
                .map(|stops| StopPointSequence {
                    stop_point: stops
                        .iter()
                        .map(|name| NamedStop {
                            name: name.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        };
        self.sequences.insert((line.to_string(), direction), sequence);
        self
    }

    pub fn failing_sequences(mut self, line: &str) -> Self {
        self.failing_lines.insert(line.to_string());
        self
    }

    pub fn with_journeys(mut self, from: &str, to: &str, journeys: Vec<Journey>) -> Self {
        self.journeys
            .entry((from.to_string(), to.to_string()))
            .or_default()
            .extend(journeys);
        self
    }

    pub fn failing_journeys(mut self, from: &str, to: &str) -> Self {
        self.failing_pairs.insert((from.to_string(), to.to_string()));
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.failing_search = true;
        self
    }

    pub fn sequence_calls(&self) -> usize {
        *self.sequence_calls.lock().unwrap()
    }

    /// Pairs queried for journeys, in call order.
    pub fn journey_calls(&self) -> Vec<(String, String)> {
        self.journey_calls.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> Option<JourneyQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

fn upstream_error() -> TflError {
    TflError::Api {
        status: 503,
        message: "unavailable".to_string(),
    }
}

impl TransitApi for FakeTransit {
    async fn search_stop_points(&self, query: &str) -> Result<Vec<StopPointMatch>, TflError> {
        if self.failing_search {
            return Err(upstream_error());
        }
        Ok(self
            .stations
            .get(query)
            .map(|id| StopPointMatch {
                id: id.clone(),
                name: Some(query.to_string()),
                modes: vec![],
            })
            .into_iter()
            .collect())
    }

    async fn stop_point(&self, id: &str) -> Result<StopPoint, TflError> {
        self.hubs.get(id).cloned().ok_or_else(|| TflError::Api {
            status: 404,
            message: format!("no stop point {id}"),
        })
    }

    async fn route_sequence(
        &self,
        line: &LineId,
        direction: Direction,
    ) -> Result<RouteSequence, TflError> {
        *self.sequence_calls.lock().unwrap() += 1;
        if self.failing_lines.contains(line.as_str()) {
            return Err(upstream_error());
        }
        Ok(self
            .sequences
            .get(&(line.as_str().to_string(), direction))
            .cloned()
            .unwrap_or_default())
    }

    async fn journey_results(
        &self,
        from: &str,
        to: &str,
        when: &JourneyQuery,
    ) -> Result<Vec<Journey>, TflError> {
        let pair = (from.to_string(), to.to_string());
        self.journey_calls.lock().unwrap().push(pair.clone());
        *self.last_query.lock().unwrap() = Some(when.clone());

        if self.failing_pairs.contains(&pair) {
            return Err(upstream_error());
        }
        Ok(self.journeys.get(&pair).cloned().unwrap_or_default())
    }
}

/// A stop point with modes and no children.
pub fn stop_point(id: &str, modes: &[&str]) -> StopPoint {
    StopPoint {
        naptan_id: Some(id.to_string()),
        modes: modes.iter().map(|m| m.to_string()).collect(),
        ..Default::default()
    }
}

/// Parse `HH:MM` on a fixed date.
pub fn at(hhmm: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("2024-03-15T{hhmm}:00"), "%Y-%m-%dT%H:%M:%S").unwrap()
}

/// Builder for upstream legs.
#[derive(Clone)]
pub struct LegSpec {
    leg: Leg,
}

impl LegSpec {
    /// A leg in `mode` on `line` (empty for none) between two stations.
    pub fn new(mode: &str, line: &str, from: &str, to: &str) -> Self {
        Self {
            leg: Leg {
                mode: Some(Identifier {
                    name: mode.to_string(),
                }),
                route_options: if line.is_empty() {
                    vec![]
                } else {
                    vec![RouteOption {
                        name: line.to_string(),
                    }]
                },
                departure_point: Some(Point {
                    common_name: Some(from.to_string()),
                }),
                arrival_point: Some(Point {
                    common_name: Some(to.to_string()),
                }),
                ..Default::default()
            },
        }
    }

    pub fn times(mut self, depart: &str, arrive: &str) -> Self {
        self.leg.departure_time = Some(at(depart));
        self.leg.arrival_time = Some(at(arrive));
        self
    }

    pub fn duration(mut self, mins: i64) -> Self {
        self.leg.duration = Some(mins);
        self
    }

    pub fn instruction(mut self, summary: &str) -> Self {
        self.leg.instruction = Some(Instruction {
            summary: Some(summary.to_string()),
        });
        self
    }

    pub fn path(mut self, stops: &[&str]) -> Self {
        self.leg.path = Some(Path {
            stop_points: stops
                .iter()
                .map(|name| NamedStop {
                    name: name.to_string(),
                })
                .collect(),
        });
        self
    }

    pub fn build(self) -> Leg {
        self.leg
    }
}

/// A journey from legs; start/arrival from the first and last leg.
pub fn journey(duration: i64, legs: Vec<LegSpec>) -> Journey {
    let legs: Vec<Leg> = legs.into_iter().map(LegSpec::build).collect();
    Journey {
        start_date_time: legs.first().and_then(|l| l.departure_time),
        arrival_date_time: legs.last().and_then(|l| l.arrival_time),
        duration: Some(duration),
        legs,
    }
}
