//! Station node ids: hub expansion, classification and query pairs.
//!
//! A station search may return a hub grouping several physical stop
//! points, one per mode. The journey planner answers differently
//! depending on which physical node it is asked about, so we query
//! several plausible pairs and pool the results.

use tracing::debug;

use crate::tfl::{StopPoint, StopPointMatch, TflError, TransitApi};

/// Modes a hub child must serve to be kept.
const RAIL_MODES: [&str; 4] = ["tube", "dlr", "elizabeth-line", "overground"];

/// Kind of physical node, by NaPTAN prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `940GZZLU...`
    Underground,
    /// `940GZZD...`
    Dlr,
    /// `910G...`: Elizabeth line, Overground and other rail
    Rail,
}

impl NodeKind {
    /// In order of preference for the best-guess node.
    pub const ALL: [NodeKind; 3] = [NodeKind::Underground, NodeKind::Dlr, NodeKind::Rail];

    pub fn classify(id: &str) -> Option<Self> {
        if id.starts_with("940GZZLU") {
            Some(NodeKind::Underground)
        } else if id.starts_with("940GZZD") {
            Some(NodeKind::Dlr)
        } else if id.starts_with("910G") {
            Some(NodeKind::Rail)
        } else {
            None
        }
    }
}

/// Cross-kind pairs, in query order.
const CROSS_KINDS: [(NodeKind, NodeKind); 6] = [
    (NodeKind::Underground, NodeKind::Dlr),
    (NodeKind::Dlr, NodeKind::Underground),
    (NodeKind::Underground, NodeKind::Rail),
    (NodeKind::Dlr, NodeKind::Rail),
    (NodeKind::Rail, NodeKind::Underground),
    (NodeKind::Rail, NodeKind::Dlr),
];

/// Expand a search match into physical node ids.
///
/// Non-hub matches are used as-is. A hub's children and grandchildren are
/// kept when their id is a rail NaPTAN (`940G`/`910G`) and they serve a
/// rail mode; with none kept, the hub id itself is used.
pub async fn rail_node_ids<A: TransitApi>(
    api: &A,
    matched: &StopPointMatch,
) -> Result<Vec<String>, TflError> {
    if !matched.is_hub() {
        return Ok(vec![matched.id.clone()]);
    }

    let hub = api.stop_point(&matched.id).await?;
    let ids = hub_children(&hub);
    debug!(hub = %matched.id, children = ?ids, "expanded hub");

    if ids.is_empty() {
        Ok(vec![matched.id.clone()])
    } else {
        Ok(ids)
    }
}

/// Rail node ids among a hub's children and grandchildren, deduplicated in
/// discovery order.
fn hub_children(hub: &StopPoint) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    let mut add = |stop: &StopPoint| {
        let Some(id) = stop.node_id() else {
            return;
        };
        let rail_id = id.starts_with("940G") || id.starts_with("910G");
        let rail_mode = stop.modes.iter().any(|m| RAIL_MODES.contains(&m.as_str()));
        if rail_id && rail_mode && !ids.iter().any(|seen| seen == id) {
            ids.push(id.to_string());
        }
    };

    for child in &hub.children {
        add(child);
        for grandchild in &child.children {
            add(grandchild);
        }
    }

    ids
}

/// First id of the given kind.
fn first_of(ids: &[String], kind: NodeKind) -> Option<&str> {
    ids.iter()
        .map(String::as_str)
        .find(|id| NodeKind::classify(id) == Some(kind))
}

/// Best-guess node: Underground, then DLR, then rail, then the first id.
pub fn best_node(ids: &[String]) -> Option<&str> {
    NodeKind::ALL
        .iter()
        .find_map(|&kind| first_of(ids, kind))
        .or_else(|| ids.first().map(String::as_str))
}

/// Node pairs to query between two stations.
///
/// Same-kind pairs first, then cross-kind pairs, then the best-guess pair.
/// Duplicates and self-pairs are dropped.
pub fn node_pairs(from_ids: &[String], to_ids: &[String]) -> Vec<(String, String)> {
    let same = NodeKind::ALL.iter().map(|&k| (k, k));
    let candidates = same
        .chain(CROSS_KINDS)
        .filter_map(|(fk, tk)| Some((first_of(from_ids, fk)?, first_of(to_ids, tk)?)))
        .chain(best_node(from_ids).zip(best_node(to_ids)));

    let mut pairs: Vec<(String, String)> = Vec::new();
    for (from, to) in candidates {
        if from == to || pairs.iter().any(|(f, t)| f == from && t == to) {
            continue;
        }
        pairs.push((from.to_string(), to.to_string()));
    }

    pairs
}
