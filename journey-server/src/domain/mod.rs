//! Domain types for the journey planner.
//!
//! Station names, line identifiers, modes, stop sequences and the
//! enriched legs, journeys and routes built from them.

mod journey;
mod leg;
mod line;
mod mode;
mod names;
mod sequence;

pub use journey::{Journey, Route};
pub use leg::{EnrichedLeg, pin_endpoints};
pub use line::{KnownLine, LineId, clean_line_name, resolve_line_id};
pub use mode::Mode;
pub use names::{MATCH_TIERS, NameMatcher, dedup_by_key, find_key, names_match, normalize};
pub use sequence::StopSequence;
