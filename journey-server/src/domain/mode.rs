//! Transport modes as named by the upstream journey planner.

use std::fmt;

/// A transport mode.
///
/// Parsing is total: names outside the known set are kept verbatim in
/// [`Mode::Other`] so they survive to the response unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Tube,
    Dlr,
    ElizabethLine,
    Overground,
    NationalRail,
    Walking,
    Bus,
    ReplacementBus,
    Coach,
    CableCar,
    Cycle,
    Tram,
    Ferry,
    RiverBus,
    Other(String),
}

impl Mode {
    /// Parse an upstream mode name (e.g. "tube", "elizabeth-line").
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tube" => Mode::Tube,
            "dlr" => Mode::Dlr,
            "elizabeth-line" => Mode::ElizabethLine,
            "overground" => Mode::Overground,
            "national-rail" => Mode::NationalRail,
            "walking" => Mode::Walking,
            "bus" => Mode::Bus,
            "replacement-bus" => Mode::ReplacementBus,
            "coach" => Mode::Coach,
            "cable-car" => Mode::CableCar,
            "cycle" => Mode::Cycle,
            "tram" => Mode::Tram,
            "ferry" => Mode::Ferry,
            "river-bus" => Mode::RiverBus,
            _ => Mode::Other(name.to_string()),
        }
    }

    /// The upstream name for this mode.
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Tube => "tube",
            Mode::Dlr => "dlr",
            Mode::ElizabethLine => "elizabeth-line",
            Mode::Overground => "overground",
            Mode::NationalRail => "national-rail",
            Mode::Walking => "walking",
            Mode::Bus => "bus",
            Mode::ReplacementBus => "replacement-bus",
            Mode::Coach => "coach",
            Mode::CableCar => "cable-car",
            Mode::Cycle => "cycle",
            Mode::Tram => "tram",
            Mode::Ferry => "ferry",
            Mode::RiverBus => "river-bus",
            Mode::Other(name) => name,
        }
    }

    /// Whether legs in this mode get a reconstructed stop sequence.
    ///
    /// Walking, cycling and road/tram/cable-car legs pass through with no stops.
    pub fn is_enriched(&self) -> bool {
        !matches!(
            self,
            Mode::Walking
                | Mode::Bus
                | Mode::ReplacementBus
                | Mode::Coach
                | Mode::CableCar
                | Mode::Cycle
                | Mode::Tram
        )
    }

    /// Whether a route using this mode is dropped from the results.
    pub fn is_banned(&self) -> bool {
        matches!(
            self,
            Mode::Bus
                | Mode::ReplacementBus
                | Mode::Coach
                | Mode::NationalRail
                | Mode::Tram
                | Mode::CableCar
                | Mode::Ferry
        )
    }

    pub fn is_walking(&self) -> bool {
        matches!(self, Mode::Walking)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_modes() {
        assert_eq!(Mode::parse("tube"), Mode::Tube);
        assert_eq!(Mode::parse("elizabeth-line"), Mode::ElizabethLine);
        assert_eq!(Mode::parse("Walking"), Mode::Walking);
        assert_eq!(Mode::parse("national-rail"), Mode::NationalRail);
    }

    #[test]
    fn unknown_mode_kept_verbatim() {
        let mode = Mode::parse("hovercraft");
        assert_eq!(mode, Mode::Other("hovercraft".to_string()));
        assert_eq!(mode.as_str(), "hovercraft");
    }

    #[test]
    fn as_str_roundtrip() {
        for name in ["tube", "dlr", "overground", "replacement-bus", "cable-car", "ferry"] {
            assert_eq!(Mode::parse(name).as_str(), name);
        }
    }

    #[test]
    fn enriched_modes() {
        assert!(Mode::Tube.is_enriched());
        assert!(Mode::Dlr.is_enriched());
        assert!(Mode::ElizabethLine.is_enriched());
        assert!(Mode::Overground.is_enriched());
        assert!(Mode::NationalRail.is_enriched());

        assert!(!Mode::Walking.is_enriched());
        assert!(!Mode::Bus.is_enriched());
        assert!(!Mode::Tram.is_enriched());
        assert!(!Mode::Cycle.is_enriched());
    }

    #[test]
    fn banned_modes() {
        assert!(Mode::NationalRail.is_banned());
        assert!(Mode::Bus.is_banned());
        assert!(Mode::Ferry.is_banned());

        assert!(!Mode::Tube.is_banned());
        assert!(!Mode::Walking.is_banned());
        assert!(!Mode::Cycle.is_banned());
        assert!(!Mode::RiverBus.is_banned());
        assert!(!Mode::parse("river-bus").is_banned());
    }
}
