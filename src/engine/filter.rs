use crate::types::catalog::Catalog;
use crate::types::outcome::ScoredCandidate;
use std::collections::BTreeSet;

/// Re-narrow an already-qualified result with AND-combined tags.
///
/// Keeps an entry only if its candidate appears under every filter tag. An
/// empty filter is the identity. The input ordering is preserved, and only
/// the qualified list is consulted: candidates below the threshold are never
/// resurrected by filtering.
pub fn apply_filter(
    qualified: &[ScoredCandidate],
    filter_tags: &BTreeSet<String>,
    catalog: &Catalog,
) -> Vec<ScoredCandidate> {
    qualified
        .iter()
        .filter(|entry| {
            filter_tags.iter().all(|tag| {
                catalog
                    .candidates_for(tag)
                    .map(|ids| ids.contains(&entry.id))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}
