//! Journeys and routes.
//!
//! A [`Journey`] is one enriched departure. A [`Route`] groups journeys
//! that follow the same path, represented by its earliest departure.

use chrono::NaiveDateTime;

use super::leg::EnrichedLeg;

/// One itinerary with enriched, merged legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    pub start: Option<NaiveDateTime>,
    pub arrival: Option<NaiveDateTime>,
    /// Total duration in minutes, as reported upstream.
    pub duration_mins: Option<i64>,
    /// All legs, walking included.
    pub legs: Vec<EnrichedLeg>,
}

impl Journey {
    /// Legs other than walks.
    pub fn transport_legs(&self) -> impl Iterator<Item = &EnrichedLeg> {
        self.legs.iter().filter(|l| !l.is_walking())
    }
}

/// A group of departures sharing one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Mode of the first non-walking leg.
    pub mode: String,
    /// Line of the first non-walking leg.
    pub line_name: String,
    /// Origin as requested.
    pub from: String,
    /// Destination as requested.
    pub to: String,
    pub duration_mins: Option<i64>,
    /// Non-walking legs of the earliest departure.
    pub legs: Vec<EnrichedLeg>,
    /// Every enriched departure, earliest first.
    pub departures: Vec<Journey>,
}

impl Route {
    /// Build a route from its departures.
    ///
    /// Departures are sorted by start time (unknown times last); the
    /// earliest provides the canonical legs. Returns `None` if there are
    /// no departures.
    pub fn from_departures(
        from: impl Into<String>,
        to: impl Into<String>,
        mut departures: Vec<Journey>,
    ) -> Option<Self> {
        departures.sort_by_key(|j| (j.start.is_none(), j.start));
        let earliest = departures.first()?;

        let legs: Vec<EnrichedLeg> = earliest.transport_legs().cloned().collect();
        let (mode, line_name) = legs
            .first()
            .map(|l| (l.mode.to_string(), l.line_name.clone()))
            .unwrap_or_else(|| ("unknown".to_string(), String::new()));

        Some(Self {
            mode,
            line_name,
            from: from.into(),
            to: to.into(),
            duration_mins: earliest.duration_mins,
            legs,
            departures,
        })
    }

    /// Non-walking legs of the earliest departure.
    pub fn earliest_transport_legs(&self) -> impl Iterator<Item = &EnrichedLeg> {
        self.departures
            .first()
            .into_iter()
            .flat_map(|j| j.transport_legs())
    }

    /// First non-walking leg of the earliest departure in a banned mode.
    pub fn banned_leg(&self) -> Option<&EnrichedLeg> {
        self.earliest_transport_legs().find(|l| l.mode.is_banned())
    }
}
