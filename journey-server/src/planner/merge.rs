//! Merge back-to-back legs that are really one vehicle ride.
//!
//! The journey planner sometimes splits a single ride into consecutive
//! legs, for instance where a line continues under a new route option.
//! Two adjacent legs are the same ride when they share mode and line, the
//! first ends where the second starts, and the second departs within a
//! short gap of the first arriving.

use chrono::Duration;

use crate::domain::{EnrichedLeg, normalize, pin_endpoints};

/// Merge consecutive legs of the same ride.
///
/// A leg is folded into the previous output leg when both times are known
/// and the gap between them is at most `max_gap`.
pub fn merge_legs(legs: Vec<EnrichedLeg>, max_gap: Duration) -> Vec<EnrichedLeg> {
    let mut merged: Vec<EnrichedLeg> = Vec::with_capacity(legs.len());

    for leg in legs {
        match merged.last_mut() {
            Some(prev) if continues(prev, &leg, max_gap) => absorb(prev, leg),
            _ => merged.push(leg),
        }
    }

    merged
}

/// Whether `next` continues the ride of `prev`.
fn continues(prev: &EnrichedLeg, next: &EnrichedLeg, max_gap: Duration) -> bool {
    prev.mode == next.mode
        && prev.line_name == next.line_name
        && normalize(&prev.to) == normalize(&next.from)
        && prev.gap_before(next).is_some_and(|gap| gap <= max_gap)
}

/// Extend `prev` to cover `next`.
fn absorb(prev: &mut EnrichedLeg, next: EnrichedLeg) {
    if !(prev.stops.is_empty() && next.stops.is_empty()) {
        let mut stops = if prev.stops.is_empty() {
            vec![prev.from.clone()]
        } else {
            std::mem::take(&mut prev.stops)
        };
        if next.stops.len() >= 2 {
            stops.extend(next.stops.into_iter().skip(1));
        } else {
            stops.push(next.to.clone());
        }
        prev.stops = pin_endpoints(stops, &prev.from, &next.to);
    }

    prev.to = next.to;
    prev.arrival = next.arrival;
    prev.duration_mins = match (prev.duration_mins, next.duration_mins) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or(0) + b.unwrap_or(0)),
    };
    if next.instruction.is_some() {
        prev.instruction = next.instruction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;
    use crate::tfl::testing::at;

    fn leg(line: &str, from: &str, to: &str, depart: &str, arrive: &str) -> EnrichedLeg {
        EnrichedLeg {
            mode: Mode::Tube,
            line_name: line.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            duration_mins: Some(5),
            departure: Some(at(depart)),
            arrival: Some(at(arrive)),
            instruction: None,
            stops: vec![from.to_string(), to.to_string()],
        }
    }

    fn minute() -> Duration {
        Duration::minutes(1)
    }

    #[test]
    fn merges_within_gap() {
        let mut second = leg("Central", "Bank", "Stratford", "10:05", "10:15");
        second.departure = Some(at("10:05") + Duration::seconds(30));
        second.instruction = Some("Central line to Stratford".into());

        let first = leg("Central", "Oxford Circus", "Bank", "09:55", "10:05");

        let merged = merge_legs(vec![first, second], minute());
        assert_eq!(merged.len(), 1);

        let ride = &merged[0];
        assert_eq!(ride.from, "Oxford Circus");
        assert_eq!(ride.to, "Stratford");
        assert_eq!(ride.departure, Some(at("09:55")));
        assert_eq!(ride.arrival, Some(at("10:15")));
        assert_eq!(ride.duration_mins, Some(10));
        assert_eq!(ride.stops, vec!["Oxford Circus", "Bank", "Stratford"]);
        assert_eq!(ride.instruction.as_deref(), Some("Central line to Stratford"));
    }

    #[test]
    fn five_minute_gap_does_not_merge() {
        let first = leg("Central", "Oxford Circus", "Bank", "09:55", "10:05");
        let second = leg("Central", "Bank", "Stratford", "10:10", "10:20");

        assert_eq!(merge_legs(vec![first, second], minute()).len(), 2);
    }

    #[test]
    fn different_line_does_not_merge() {
        let first = leg("Central", "Oxford Circus", "Bank", "09:55", "10:05");
        let second = leg("Northern", "Bank", "London Bridge", "10:05", "10:08");

        assert_eq!(merge_legs(vec![first, second], minute()).len(), 2);
    }

    #[test]
    fn disconnected_endpoints_do_not_merge() {
        let first = leg("Central", "Oxford Circus", "Bank", "09:55", "10:05");
        let second = leg("Central", "Liverpool Street", "Stratford", "10:05", "10:12");

        assert_eq!(merge_legs(vec![first, second], minute()).len(), 2);
    }

    #[test]
    fn unknown_times_do_not_merge() {
        let first = leg("Central", "Oxford Circus", "Bank", "09:55", "10:05");
        let mut second = leg("Central", "Bank", "Stratford", "10:05", "10:15");
        second.departure = None;

        assert_eq!(merge_legs(vec![first, second], minute()).len(), 2);
    }

    #[test]
    fn junction_matched_on_normalized_name() {
        let first = leg("Central", "Oxford Circus", "Bank Underground Station", "09:55", "10:05");
        let second = leg("Central", "Bank", "Stratford", "10:05", "10:15");

        let merged = merge_legs(vec![first, second], minute());
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].stops,
            vec!["Oxford Circus", "Bank Underground Station", "Stratford"]
        );
    }

    #[test]
    fn walks_merge_without_stops() {
        let mut first = leg("walking", "A", "B", "10:00", "10:03");
        first.mode = Mode::Walking;
        first.stops.clear();
        let mut second = leg("walking", "B", "C", "10:03", "10:06");
        second.mode = Mode::Walking;
        second.stops.clear();
        second.duration_mins = None;

        let merged = merge_legs(vec![first, second], minute());
        assert_eq!(merged.len(), 1);
        assert!(merged[0].stops.is_empty());
        assert_eq!(merged[0].to, "C");
        assert_eq!(merged[0].duration_mins, Some(5));
    }

    #[test]
    fn earlier_instruction_kept_when_next_has_none() {
        let mut first = leg("Central", "A", "B", "10:00", "10:03");
        first.instruction = Some("Central line towards Epping".into());
        let second = leg("Central", "B", "C", "10:03", "10:06");

        let merged = merge_legs(vec![first, second], minute());
        assert_eq!(
            merged[0].instruction.as_deref(),
            Some("Central line towards Epping")
        );
    }

    #[test]
    fn only_adjacent_legs_merge() {
        let a = leg("Central", "A", "B", "10:00", "10:03");
        let mut walk = leg("walking", "B", "B", "10:03", "10:03");
        walk.mode = Mode::Walking;
        walk.stops.clear();
        let c = leg("Central", "B", "C", "10:03", "10:06");

        assert_eq!(merge_legs(vec![a, walk, c], minute()).len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(merge_legs(vec![], minute()).is_empty());
    }
}
