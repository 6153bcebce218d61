//! Stop resolution: the ordered stops between two stations on a line.
//!
//! A leg names its endpoints but usually not the stops in between. We
//! recover them from the line's cached sequences: first by finding one
//! sequence containing both endpoints, then, for branches and interchanges
//! that no single sequence spans, by stitching two sequences together at
//! a shared junction stop.

use crate::cache::LineSequenceCache;
use crate::domain::{StopSequence, normalize, resolve_line_id};

/// Resolve the stops between `from` and `to` on a named line.
///
/// Reads the cache only; sequences must already have been fetched.
/// Returns `None` if the line has no id, isn't cached, or neither lookup
/// strategy finds both endpoints.
pub async fn resolve_stops(
    cache: &LineSequenceCache,
    line_name: &str,
    from: &str,
    to: &str,
) -> Option<Vec<String>> {
    let line = resolve_line_id(line_name)?;
    let sequences = cache.get(&line).await?;
    stops_between(&sequences, from, to)
}

/// Find the stops from `from` to `to` across a line's sequences.
///
/// Tries [`direct_slice`] first, then [`stitched_slice`].
pub fn stops_between(sequences: &[StopSequence], from: &str, to: &str) -> Option<Vec<String>> {
    let from_key = normalize(from);
    let to_key = normalize(to);

    direct_slice(sequences, &from_key, &to_key)
        .or_else(|| stitched_slice(sequences, &from_key, &to_key))
}

/// The slice of the first sequence that contains both endpoints, oriented
/// in travel order.
fn direct_slice(sequences: &[StopSequence], from_key: &str, to_key: &str) -> Option<Vec<String>> {
    sequences.iter().find_map(|seq| {
        let fi = seq.find(from_key)?;
        let ti = seq.find(to_key)?;
        Some(seq.oriented_slice(fi, ti))
    })
}

/// Join two sequences at a junction: `from` on sequence A, `to` on
/// sequence B, and the first stop on A at or after `from` that B also
/// serves.
///
/// Pairs are tried in cache order and the first stitch with at least two
/// stops wins. This is not necessarily the shortest path when several
/// junctions exist.
fn stitched_slice(sequences: &[StopSequence], from_key: &str, to_key: &str) -> Option<Vec<String>> {
    for (a_idx, seq_a) in sequences.iter().enumerate() {
        let Some(fi) = seq_a.find(from_key) else {
            continue;
        };

        for (b_idx, seq_b) in sequences.iter().enumerate() {
            if a_idx == b_idx {
                continue;
            }
            let Some(ti) = seq_b.find(to_key) else {
                continue;
            };

            let Some(junction) = (fi..seq_a.len()).find(|&i| seq_b.contains_key(&seq_a.keys()[i]))
            else {
                continue;
            };
            let Some(ji) = seq_b.position_exact(&seq_a.keys()[junction]) else {
                continue;
            };

            let mut stitched = seq_a.oriented_slice(fi, junction);
            stitched.pop();
            stitched.extend(seq_b.oriented_slice(ji, ti));

            if stitched.len() >= 2 {
                return Some(stitched);
            }
        }
    }

    None
}
