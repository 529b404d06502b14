//! Deduplication and ordering of extracted size identifiers.

use std::collections::BTreeSet;

/// Reduce raw extracted values to a sorted, deduplicated set.
///
/// Values without a `.` separator are dropped: real size identifiers are
/// always `family.size` (`m5.large`), so a separator-less value is noise.
/// Ordering is plain byte-lexicographic ascending, not grouped by family or
/// ordered by capacity.
pub fn normalize(raw: Vec<String>) -> Vec<String> {
    let set: BTreeSet<String> = raw.into_iter().filter(|v| v.contains('.')).collect();
    set.into_iter().collect()
}
