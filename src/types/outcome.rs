use crate::types::catalog::CandidateId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-candidate count of matching selected tags. Recomputed per submission.
pub type Tally = BTreeMap<CandidateId, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub id: CandidateId,
    pub count: u32,
}

impl ScoredCandidate {
    pub fn new(id: impl Into<String>, count: u32) -> Self {
        Self {
            id: CandidateId::new(id),
            count,
        }
    }
}

/// Result of one diagnosis pass. The four variants map to the distinct
/// user-visible messages: warning (no input), informational (nothing reached
/// the threshold, with a closest-matches fallback), informational (the AND
/// filter removed every qualified candidate), and success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    EmptySelection,
    NoMatch { closest: Vec<ScoredCandidate> },
    FilteredOut { qualified: Vec<ScoredCandidate> },
    Matched { results: Vec<ScoredCandidate> },
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub generated_at: String,
    pub threshold: u32,
    pub selections: Vec<String>,
    pub filter_tags: Vec<String>,
    pub tally: Tally,
    pub outcome: Outcome,
}
