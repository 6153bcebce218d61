//! Process-lifetime cache of line stop sequences.
//!
//! Line topology changes rarely enough that one fetch per line per process
//! is sufficient, so entries never expire. A failed fetch is cached as an
//! empty list and not retried.
//!
//! Concurrent first requests for the same line are coalesced: moka's
//! `get_with` runs one fetch per key and every other caller awaits it.

use std::collections::BTreeSet;
use std::sync::Arc;

use futures::future::join_all;
use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::domain::{LineId, Mode, StopSequence, resolve_line_id};
use crate::tfl::{self, Direction, TransitApi};

/// Cached entry: every sequence for a line, both directions, all branches.
pub type SequenceEntry = Arc<Vec<StopSequence>>;

/// Configuration for the cache.
///
/// There is no size bound: an entry, once written, stays for the life of
/// the process.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Number of lines to allocate room for up front.
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 32,
        }
    }
}

/// Stop sequences per line, fetched on demand.
#[derive(Clone)]
pub struct LineSequenceCache {
    lines: MokaCache<LineId, SequenceEntry>,
}

impl LineSequenceCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let lines = MokaCache::builder()
            .initial_capacity(config.initial_capacity)
            .build();

        Self { lines }
    }

    /// Get cached sequences without fetching.
    pub async fn get(&self, line: &LineId) -> Option<SequenceEntry> {
        self.lines.get(line).await
    }

    /// Seed sequences for a line unless it already has an entry.
    #[cfg(test)]
    pub async fn insert(&self, line: LineId, sequences: Vec<StopSequence>) {
        self.lines
            .get_with(line, async move { Arc::new(sequences) })
            .await;
    }

    /// Get sequences for a line, fetching them on a miss.
    pub async fn get_or_fetch<A: TransitApi>(&self, api: &A, line: &LineId) -> SequenceEntry {
        self.lines
            .get_with(line.clone(), fetch_sequences(api, line))
            .await
    }

    /// Warm the cache for every line used by the given journeys.
    ///
    /// Only legs in enriched modes count. Lines are fetched concurrently;
    /// returns the number of distinct lines involved.
    pub async fn prefetch<A: TransitApi>(&self, api: &A, journeys: &[tfl::Journey]) -> usize {
        let lines = lines_used(journeys);
        debug!(lines = lines.len(), "prefetching line sequences");

        join_all(lines.iter().map(|line| self.get_or_fetch(api, line))).await;

        lines.len()
    }

    /// Number of cached lines.
    pub fn entry_count(&self) -> u64 {
        self.lines.entry_count()
    }
}

/// Distinct line ids used by enriched-mode legs.
pub fn lines_used(journeys: &[tfl::Journey]) -> BTreeSet<LineId> {
    journeys
        .iter()
        .flat_map(|j| &j.legs)
        .filter(|leg| Mode::parse(leg.mode_name()).is_enriched())
        .filter_map(|leg| resolve_line_id(&leg.line_display_name()))
        .collect()
}

/// Fetch both directions of a line. Any failure yields an empty list.
async fn fetch_sequences<A: TransitApi>(api: &A, line: &LineId) -> SequenceEntry {
    let (outbound, inbound) = tokio::join!(
        api.route_sequence(line, Direction::Outbound),
        api.route_sequence(line, Direction::Inbound)
    );

    match (outbound, inbound) {
        (Ok(outbound), Ok(inbound)) => {
            let sequences: Vec<StopSequence> = [outbound, inbound]
                .into_iter()
                .flat_map(|r| r.stop_point_sequences)
                .map(|s| StopSequence::new(s.stop_point.into_iter().map(|p| p.name).collect()))
                .filter(|s| s.len() >= 2)
                .collect();

            debug!(line = %line, sequences = sequences.len(), "fetched line sequences");
            Arc::new(sequences)
        }
        (Err(e), _) | (_, Err(e)) => {
            warn!(line = %line, error = %e, "failed to fetch line sequences, caching empty");
            Arc::new(Vec::new())
        }
    }
}
