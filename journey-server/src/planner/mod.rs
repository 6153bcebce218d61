//! Journey planning over the TfL journey planner.
//!
//! The upstream planner already finds itineraries; this module queries it
//! for every plausible pair of physical station nodes, then reconstructs
//! the stop-level detail its legs leave out. Each leg's stops are resolved
//! against cached line sequences, split rides are merged, and the routes
//! are ranked, filtered and deduplicated.

mod config;
mod enrich;
mod merge;
mod nodes;
mod orchestrate;
mod rank;
mod resolve;
mod signature;

pub use config::PlannerConfig;
pub use enrich::enrich_leg;
pub use merge::merge_legs;
pub use nodes::{NodeKind, best_node, node_pairs, rail_node_ids};
pub use orchestrate::{JourneyPlanner, PlanError, PlanRequest};
pub use rank::{Rejection, filter_routes, rank_routes, rejection};
pub use resolve::{resolve_stops, stops_between};
pub use signature::{dedup_by_signature, group_by_signature, line_signature, raw_signature};
