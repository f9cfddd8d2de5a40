//! Global filter predicate.

use crate::{AlumniRecord, ColumnId};

/// Returns `true` when `query` is empty or is a case-insensitive substring
/// of at least one column of `record`.
///
/// Matching is plain text: no trimming, no tokenization.
pub fn matches_global_filter(record: &AlumniRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    ColumnId::ALL
        .into_iter()
        .any(|column| record.value(column).to_lowercase().contains(&needle))
}
