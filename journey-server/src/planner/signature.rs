//! Route signatures for grouping and deduplication.
//!
//! Two signatures are used. The raw one keys upstream itineraries on the
//! mode and route option name of every leg, walking included. The line one
//! keys finished routes on the mode and display line name of their
//! non-walking legs, so routes that differ only in walks or spelling of
//! the line collapse together.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::domain::Route;
use crate::tfl;

/// Signature of an upstream itinerary: `mode:option` per leg, `|`-joined.
pub fn raw_signature(journey: &tfl::Journey) -> String {
    journey
        .legs
        .iter()
        .map(|leg| format!("{}:{}", leg.mode_name(), leg.route_option_name().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("|")
}

/// Signature of a route: `mode:line` per canonical leg, `|`-joined.
pub fn line_signature(route: &Route) -> String {
    route
        .legs
        .iter()
        .map(|leg| format!("{}:{}", leg.mode, leg.line_name))
        .collect::<Vec<_>>()
        .join("|")
}

/// Keep the first item for each key, preserving order.
pub fn dedup_by_signature<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

/// Group items by key, groups in order of first appearance.
pub fn group_by_signature<T, K, F>(items: Vec<T>, mut key: F) -> Vec<Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut index = HashMap::new();
    let mut groups: Vec<Vec<T>> = Vec::new();

    for item in items {
        let slot = *index.entry(key(&item)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(item);
    }

    groups
}
