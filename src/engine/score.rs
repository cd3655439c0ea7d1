use crate::types::catalog::Catalog;
use crate::types::outcome::{ScoredCandidate, Tally};
use std::collections::BTreeSet;

/// Tally tag-to-candidate matches and apply the qualification threshold.
///
/// Every (selected tag, candidate) incidence pair counts as one increment: a
/// candidate referenced by two selected tags scores 2. Unknown tags
/// contribute nothing. The qualified list holds entries with
/// `count >= threshold`, sorted by count descending then id ascending.
pub fn score(
    selections: &BTreeSet<String>,
    catalog: &Catalog,
    threshold: u32,
) -> (Tally, Vec<ScoredCandidate>) {
    let mut tally = Tally::new();
    for tag in selections {
        let Some(ids) = catalog.candidates_for(tag) else {
            tracing::debug!(%tag, "selected tag has no mapping entry, skipping");
            continue;
        };
        for id in ids {
            *tally.entry(id.clone()).or_insert(0) += 1;
        }
    }

    let qualified = ranked(
        tally
            .iter()
            .filter(|(_, count)| **count >= threshold)
            .map(|(id, count)| ScoredCandidate {
                id: id.clone(),
                count: *count,
            }),
    );

    (tally, qualified)
}

/// Top `limit` candidates by raw count regardless of threshold, using the
/// same ordering rule. Fallback guidance for the no-match case.
pub fn closest_matches(tally: &Tally, limit: usize) -> Vec<ScoredCandidate> {
    let mut closest = ranked(tally.iter().map(|(id, count)| ScoredCandidate {
        id: id.clone(),
        count: *count,
    }));
    closest.truncate(limit);
    closest
}

fn ranked(entries: impl Iterator<Item = ScoredCandidate>) -> Vec<ScoredCandidate> {
    let mut entries: Vec<_> = entries.collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
    entries
}
