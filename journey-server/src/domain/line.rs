//! Line identifiers.
//!
//! Journey legs name their line for display ("Hammersmith & City",
//! "Elizabeth line"), while the line topology endpoint wants the
//! canonical id ("hammersmith-city", "elizabeth"). [`resolve_line_id`]
//! bridges the two.

use std::fmt;

/// Canonical line identifier used by the line topology endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Wrap an already-canonical id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lines whose display names differ from their canonical ids, or which
/// have more than one common spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownLine {
    Bakerloo,
    Central,
    Circle,
    District,
    Dlr,
    Elizabeth,
    HammersmithCity,
    Jubilee,
    Metropolitan,
    Northern,
    Overground,
    Piccadilly,
    Victoria,
    WaterlooCity,
}

impl KnownLine {
    pub const ALL: [KnownLine; 14] = [
        KnownLine::Bakerloo,
        KnownLine::Central,
        KnownLine::Circle,
        KnownLine::District,
        KnownLine::Dlr,
        KnownLine::Elizabeth,
        KnownLine::HammersmithCity,
        KnownLine::Jubilee,
        KnownLine::Metropolitan,
        KnownLine::Northern,
        KnownLine::Overground,
        KnownLine::Piccadilly,
        KnownLine::Victoria,
        KnownLine::WaterlooCity,
    ];

    /// Canonical topology id.
    pub fn id(self) -> &'static str {
        match self {
            KnownLine::Bakerloo => "bakerloo",
            KnownLine::Central => "central",
            KnownLine::Circle => "circle",
            KnownLine::District => "district",
            KnownLine::Dlr => "dlr",
            KnownLine::Elizabeth => "elizabeth",
            KnownLine::HammersmithCity => "hammersmith-city",
            KnownLine::Jubilee => "jubilee",
            KnownLine::Metropolitan => "metropolitan",
            KnownLine::Northern => "northern",
            KnownLine::Overground => "london-overground",
            KnownLine::Piccadilly => "piccadilly",
            KnownLine::Victoria => "victoria",
            KnownLine::WaterlooCity => "waterloo-city",
        }
    }

    /// Accepted display spellings, lowercased.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            KnownLine::Bakerloo => &["bakerloo"],
            KnownLine::Central => &["central"],
            KnownLine::Circle => &["circle"],
            KnownLine::District => &["district"],
            KnownLine::Dlr => &["dlr"],
            KnownLine::Elizabeth => &["elizabeth", "elizabeth line"],
            KnownLine::HammersmithCity => &["hammersmith & city", "hammersmith and city"],
            KnownLine::Jubilee => &["jubilee"],
            KnownLine::Metropolitan => &["metropolitan"],
            KnownLine::Northern => &["northern"],
            KnownLine::Overground => &["overground", "london overground"],
            KnownLine::Piccadilly => &["piccadilly"],
            KnownLine::Victoria => &["victoria"],
            KnownLine::WaterlooCity => &["waterloo & city", "waterloo and city"],
        }
    }

    /// Look up a display name (already lowercased and trimmed).
    fn from_alias(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|line| line.aliases().contains(&key))
    }
}

/// Resolve a line display name to its canonical id.
///
/// Names in the [`KnownLine`] table map to their table id. Anything else
/// is lowercased, trimmed and has whitespace runs replaced by `-`, which
/// matches the upstream's id scheme for most lines. Blank input has no id.
///
/// # Examples
///
/// ```
/// use journey_server::domain::resolve_line_id;
///
/// assert_eq!(resolve_line_id("Hammersmith & City").unwrap().as_str(), "hammersmith-city");
/// assert_eq!(resolve_line_id("unknown line").unwrap().as_str(), "unknown-line");
/// assert!(resolve_line_id("  ").is_none());
/// ```
pub fn resolve_line_id(display_name: &str) -> Option<LineId> {
    let key = display_name.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    if let Some(line) = KnownLine::from_alias(&key) {
        return Some(LineId::new(line.id()));
    }

    Some(LineId::new(
        key.split_whitespace().collect::<Vec<_>>().join("-"),
    ))
}

/// Shorten the two line names the upstream spells long, for display.
pub fn clean_line_name(raw: &str) -> String {
    match raw.trim().to_lowercase().as_str() {
        "elizabeth line" => "Elizabeth".to_string(),
        "london overground" => "Overground".to_string(),
        _ => raw.to_string(),
    }
}
