//! Station name normalization and fuzzy matching.
//!
//! Station names arrive from independent upstream sources (stop point
//! search, line topology, journey legs) and rarely agree on spelling:
//! "Bank Underground Station", "Bank", "Bank (Central line)". Every
//! comparison between names from different sources goes through
//! [`normalize`] first.

/// Modal suffixes removed from names, most specific first.
const MODAL_SUFFIXES: [&str; 8] = [
    " underground station",
    " dlr station",
    " elizabeth line station",
    " overground station",
    " rail station",
    " tram stop",
    " bus stop",
    " station",
];

/// Canonicalize a station or line name for comparison.
///
/// Lowercases, drops parenthetical qualifiers, drops punctuation, strips
/// modal suffixes ("underground station", "dlr station", ...), collapses
/// whitespace and trims. Total and idempotent.
///
/// # Examples
///
/// ```
/// use journey_server::domain::normalize;
///
/// assert_eq!(normalize("Bank Underground Station"), "bank");
/// assert_eq!(normalize("King's Cross St. Pancras"), "kings cross st pancras");
/// assert_eq!(normalize("Stratford (London)"), "stratford");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = strip_parentheticals(&text.to_lowercase());

    let filtered: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    let mut key = collapse_whitespace(&filtered);

    // Removing one suffix can expose another ("foo station station").
    loop {
        let mut changed = false;
        for suffix in MODAL_SUFFIXES {
            if let Some(pos) = key.find(suffix) {
                key.replace_range(pos..pos + suffix.len(), "");
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    collapse_whitespace(&key)
}

/// Remove every `(...)` group. An unclosed `(` is left for the punctuation
/// filter to drop.
fn strip_parentheticals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One tier of fuzzy name matching.
///
/// Each tier is a symmetric predicate over two already-normalized names.
/// Lookups try [`MATCH_TIERS`] in order and stop at the first tier that
/// finds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatcher {
    /// Normalized names are equal.
    Exact,
    /// One normalized name starts with the other.
    Prefix,
    /// One normalized name contains the other.
    Substring,
}

/// Matching tiers in order of preference.
pub const MATCH_TIERS: [NameMatcher; 3] = [
    NameMatcher::Exact,
    NameMatcher::Prefix,
    NameMatcher::Substring,
];

impl NameMatcher {
    /// Whether `candidate` matches `target` under this tier.
    pub fn matches(self, candidate: &str, target: &str) -> bool {
        match self {
            NameMatcher::Exact => candidate == target,
            NameMatcher::Prefix => candidate.starts_with(target) || target.starts_with(candidate),
            NameMatcher::Substring => candidate.contains(target) || target.contains(candidate),
        }
    }
}

/// Find the index of `target` among normalized `keys`.
///
/// Tiers are tried in [`MATCH_TIERS`] order; within a tier the first
/// matching index wins.
pub fn find_key(keys: &[String], target: &str) -> Option<usize> {
    MATCH_TIERS
        .iter()
        .find_map(|tier| keys.iter().position(|k| tier.matches(k, target)))
}

/// Whether two raw names refer to the same place under any tier.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    MATCH_TIERS.iter().any(|tier| tier.matches(&a, &b))
}

/// Drop entries whose normalized form was already seen. First occurrence wins.
pub fn dedup_by_key(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|n| seen.insert(normalize(n)))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing twice is the same as normalizing once
        #[test]
        fn normalize_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Station-like names with suffixes are also idempotent
        #[test]
        fn normalize_idempotent_station_names(
            name in "[A-Za-z' &.()-]{0,30}",
            suffix in prop::sample::select(vec![
                "", " Station", " Underground Station", " DLR Station", " station station",
            ]),
        ) {
            let s = format!("{name}{suffix}");
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Output contains only lowercase ASCII letters, digits and single spaces
        #[test]
        fn normalize_output_alphabet(s in ".*") {
            let out = normalize(&s);
            prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
