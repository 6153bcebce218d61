//! Leg enrichment: attach the full stop list to an upstream leg.

use crate::cache::LineSequenceCache;
use crate::domain::{EnrichedLeg, Mode, pin_endpoints};
use crate::tfl;

use super::resolve::resolve_stops;

/// Convert an upstream leg into an [`EnrichedLeg`].
///
/// Legs in modes we don't enrich (walking, bus, ...) keep an empty stop
/// list. Otherwise the stops come from, in order of preference:
///
/// 1. The leg's own partial stop list, if it names at least two stops
/// 2. The cached line sequences, looked up by the display line name, the
///    raw route option name, then the mode name
/// 3. Just the two endpoints
///
/// The result is deduplicated and its ends pinned to the leg's endpoints.
pub async fn enrich_leg(leg: &tfl::Leg, cache: &LineSequenceCache) -> EnrichedLeg {
    let mode = Mode::parse(leg.mode_name());
    let line_name = leg.line_display_name();
    let from = leg.departure_name().to_string();
    let to = leg.arrival_name().to_string();

    let stops = if mode.is_enriched() {
        let resolved = resolve_leg_stops(leg, &line_name, &from, &to, cache).await;
        pin_endpoints(resolved, &from, &to)
    } else {
        Vec::new()
    };

    EnrichedLeg {
        mode,
        line_name,
        from,
        to,
        duration_mins: leg.duration,
        departure: leg.departure_time,
        arrival: leg.arrival_time,
        instruction: leg.instruction.as_ref().and_then(|i| i.summary.clone()),
        stops,
    }
}

async fn resolve_leg_stops(
    leg: &tfl::Leg,
    line_name: &str,
    from: &str,
    to: &str,
    cache: &LineSequenceCache,
) -> Vec<String> {
    let path = leg.path_stops();
    if path.len() >= 2 {
        return path;
    }

    for candidate in line_candidates(leg, line_name) {
        match resolve_stops(cache, &candidate, from, to).await {
            Some(stops) if stops.len() >= 2 => return stops,
            _ => {}
        }
    }

    vec![from.to_string(), to.to_string()]
}

/// Names to try as line ids, in order.
fn line_candidates(leg: &tfl::Leg, line_name: &str) -> Vec<String> {
    let mut candidates = vec![line_name.to_string()];
    if let Some(raw) = leg.route_option_name() {
        candidates.push(raw.to_string());
    }
    candidates.push(leg.mode_name().to_string());
    candidates.dedup();
    candidates
}
