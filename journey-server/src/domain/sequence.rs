//! Ordered stop sequences along one direction of one line branch.

use super::names::{find_key, normalize};

/// The stops along one direction of one branch of a line, in order.
///
/// Normalized keys are computed once at construction since every lookup
/// compares against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopSequence {
    names: Vec<String>,
    keys: Vec<String>,
}

impl StopSequence {
    pub fn new(names: Vec<String>) -> Self {
        let keys = names.iter().map(|n| normalize(n)).collect();
        Self { names, keys }
    }

    /// Stop names as received.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Normalized stop names, index-aligned with [`names`](Self::names).
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Fuzzy-locate a normalized name (exact, then prefix, then substring).
    pub fn find(&self, key: &str) -> Option<usize> {
        find_key(&self.keys, key)
    }

    /// Index of the first stop whose key equals `key` exactly.
    pub fn position_exact(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position_exact(key).is_some()
    }

    /// Stops `a..=b` (or `b..=a`), oriented to run from `a` to `b`.
    pub fn oriented_slice(&self, a: usize, b: usize) -> Vec<String> {
        let (start, end) = (a.min(b), a.max(b));
        let mut slice = self.names[start..=end].to_vec();
        if a > b {
            slice.reverse();
        }
        slice
    }
}
