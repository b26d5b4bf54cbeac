//! Search filter: case-insensitive substring match on record names.
//!
//! Pure: one (list, query) always yields the same ordered subsequence.

use crate::record::SchemeRecord;

/// Does `name` contain `query`, ignoring case? Empty query matches everything.
#[inline]
pub fn name_matches(name: &str, query_lower: &str) -> bool {
    query_lower.is_empty() || name.to_lowercase().contains(query_lower)
}

/// Ordered subsequence of `list` whose names contain `query` (case-insensitive).
///
/// `query` is used verbatim (no trimming); `""` returns the whole list.
pub fn filter<'a>(list: &'a [SchemeRecord], query: &str) -> Vec<&'a SchemeRecord> {
    let q = query.to_lowercase();
    list.iter().filter(|r| name_matches(&r.name, &q)).collect()
}

/// Same predicate, but yields positions in `list`. Used by the controller to
/// hold the filtered list without cloning records.
pub fn filter_indices(list: &[SchemeRecord], query: &str) -> Vec<usize> {
    let q = query.to_lowercase();
    list.iter()
        .enumerate()
        .filter(|(_, r)| name_matches(&r.name, &q))
        .map(|(i, _)| i)
        .collect()
}
