//! Route ranking and filtering.
//!
//! Ranks routes to present the simplest, then fastest, options first, and
//! drops routes the rail-only planner shouldn't offer.

use tracing::debug;

use crate::domain::{Route, names_match};

use super::signature::{dedup_by_signature, line_signature};

/// Rank routes by preference.
///
/// Routes are ranked by:
/// 1. Number of non-walking legs (fewer is better)
/// 2. Total duration (shorter is better, unknown last)
///
/// The sort is stable, so equal routes keep their input order.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by_key(|r| (r.legs.len(), r.duration_mins.is_none(), r.duration_mins));
    routes
}

/// Why a route was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A non-walking leg uses a mode we don't offer.
    BannedMode(String),
    /// The last non-walking leg ends somewhere else.
    WrongDestination(String),
}

/// Check a route against the filters.
///
/// Both checks look at the earliest departure's non-walking legs. A route
/// with no such legs always passes the destination check.
pub fn rejection(route: &Route, destination: &str) -> Option<Rejection> {
    if let Some(leg) = route.banned_leg() {
        return Some(Rejection::BannedMode(leg.mode.to_string()));
    }

    let last_stop = route
        .earliest_transport_legs()
        .last()
        .map(|l| l.to.as_str())
        .unwrap_or("");
    if !names_match(last_stop, destination) {
        return Some(Rejection::WrongDestination(last_stop.to_string()));
    }

    None
}

/// Drop rejected routes, then routes whose line signature was already seen.
///
/// Expects ranked input so the best of each signature survives.
pub fn filter_routes(routes: Vec<Route>, destination: &str) -> Vec<Route> {
    let accepted: Vec<Route> = routes
        .into_iter()
        .filter(|route| match rejection(route, destination) {
            Some(reason) => {
                debug!(
                    line = %route.line_name,
                    mode = %route.mode,
                    reason = ?reason,
                    "filtered route"
                );
                false
            }
            None => true,
        })
        .collect();

    dedup_by_signature(accepted, line_signature)
}
