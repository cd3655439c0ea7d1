pub mod filter;
pub mod score;

pub use filter::apply_filter;
pub use score::{closest_matches, score};

use crate::types::catalog::Catalog;
use crate::types::outcome::{Outcome, ScoredCandidate, Tally};
use std::collections::BTreeSet;

/// How many below-threshold candidates to surface when nothing qualifies.
pub const CLOSEST_LIMIT: usize = 3;

/// Decide the user-visible outcome from an already-computed tally and
/// qualified result. The empty-selection case is handled by the caller
/// before any tally exists.
pub fn resolve_outcome(
    tally: &Tally,
    qualified: &[ScoredCandidate],
    filter_tags: &BTreeSet<String>,
    catalog: &Catalog,
) -> Outcome {
    if qualified.is_empty() {
        return Outcome::NoMatch {
            closest: closest_matches(tally, CLOSEST_LIMIT),
        };
    }

    let kept = apply_filter(qualified, filter_tags, catalog);
    if kept.is_empty() {
        Outcome::FilteredOut {
            qualified: qualified.to_vec(),
        }
    } else {
        Outcome::Matched { results: kept }
    }
}
