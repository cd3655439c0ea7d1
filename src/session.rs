//! Explicit per-user diagnosis state: the submitted gate, the submitted
//! selection set, and the initial tally/qualified result. The hosting layer
//! owns an instance and passes it around; nothing here is global.

use crate::engine;
use crate::error::{Result, ShindanError};
use crate::types::catalog::Catalog;
use crate::types::outcome::{DiagnosisReport, Outcome, ScoredCandidate, Tally};
use chrono::Utc;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct Session {
    submitted: bool,
    threshold: u32,
    selections: BTreeSet<String>,
    tally: Tally,
    initial: Vec<ScoredCandidate>,
}

#[allow(dead_code)]
impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Tags the user picked in the submitted run, in sorted order. These are
    /// the only legal refinement tags.
    pub fn selected_tags(&self) -> Vec<&str> {
        self.selections.iter().map(String::as_str).collect()
    }

    pub fn initial_results(&self) -> &[ScoredCandidate] {
        &self.initial
    }

    /// Record a completed submission, replacing any previous one.
    pub fn submit(&mut self, selections: BTreeSet<String>, catalog: &Catalog, threshold: u32) {
        let (tally, initial) = if selections.is_empty() {
            (Tally::new(), Vec::new())
        } else {
            engine::score(&selections, catalog, threshold)
        };
        tracing::debug!(
            candidates = tally.len(),
            qualified = initial.len(),
            "scored submission"
        );
        self.submitted = true;
        self.threshold = threshold;
        self.selections = selections;
        self.tally = tally;
        self.initial = initial;
    }

    /// Re-apply the AND filter over the stored initial result. Filter tags
    /// must come from the submitted selections.
    pub fn refine(
        &self,
        filter_tags: &BTreeSet<String>,
        catalog: &Catalog,
    ) -> Result<Vec<ScoredCandidate>> {
        self.check_refinable(filter_tags)?;
        Ok(engine::apply_filter(&self.initial, filter_tags, catalog))
    }

    /// Build a full report for the stored submission plus a filter choice.
    pub fn report(
        &self,
        filter_tags: &BTreeSet<String>,
        catalog: &Catalog,
    ) -> Result<DiagnosisReport> {
        self.check_refinable(filter_tags)?;

        let outcome = if self.selections.is_empty() {
            Outcome::EmptySelection
        } else {
            engine::resolve_outcome(&self.tally, &self.initial, filter_tags, catalog)
        };

        Ok(DiagnosisReport {
            generated_at: Utc::now().to_rfc3339(),
            threshold: self.threshold,
            selections: self.selections.iter().cloned().collect(),
            filter_tags: filter_tags.iter().cloned().collect(),
            tally: self.tally.clone(),
            outcome,
        })
    }

    /// Clear everything back to the not-submitted state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn check_refinable(&self, filter_tags: &BTreeSet<String>) -> Result<()> {
        if !self.submitted {
            return Err(ShindanError::NotSubmitted);
        }
        if let Some(tag) = filter_tags
            .iter()
            .find(|tag| !self.selections.contains(*tag))
        {
            return Err(ShindanError::FilterNotSelected(tag.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn submitted_session(catalog: &Catalog) -> Session {
        let mut session = Session::new();
        session.submit(
            tags(&[
                "急性期病院",
                "神奈川県川崎市",
                "20代",
                "キャリアを積みたい",
                "宿直あり",
            ]),
            catalog,
            3,
        );
        session
    }

    #[test]
    fn refine_before_submit_is_rejected() {
        let catalog = data::builtin();
        let session = Session::new();
        let err = session
            .refine(&BTreeSet::new(), &catalog)
            .expect_err("refine should require a submission");
        assert!(matches!(err, ShindanError::NotSubmitted));
    }

    #[test]
    fn submit_stores_initial_results() {
        let catalog = data::builtin();
        let session = submitted_session(&catalog);
        assert!(session.is_submitted());
        assert_eq!(session.initial_results().len(), 4);
        assert_eq!(session.initial_results()[0], ScoredCandidate::new("A1", 5));
    }

    #[test]
    fn refine_narrows_stored_results_without_rescoring() {
        let catalog = data::builtin();
        let session = submitted_session(&catalog);
        let narrowed = session
            .refine(&tags(&["急性期病院"]), &catalog)
            .expect("refine with own selections should succeed");
        assert_eq!(
            narrowed,
            vec![ScoredCandidate::new("A1", 5), ScoredCandidate::new("A16", 4)]
        );
    }

    #[test]
    fn refine_rejects_tags_outside_the_submission() {
        let catalog = data::builtin();
        let session = submitted_session(&catalog);
        let err = session
            .refine(&tags(&["健診"]), &catalog)
            .expect_err("filter tag the user never selected should be rejected");
        assert!(matches!(err, ShindanError::FilterNotSelected(tag) if tag == "健診"));
    }

    #[test]
    fn selected_tags_are_sorted_and_deduplicated() {
        let catalog = data::builtin();
        let mut session = Session::new();
        session.submit(tags(&["宿直あり", "20代", "宿直あり"]), &catalog, 3);
        assert_eq!(session.selected_tags(), vec!["20代", "宿直あり"]);
    }

    #[test]
    fn report_lists_matches_in_ranked_order() {
        let catalog = data::builtin();
        let session = submitted_session(&catalog);
        let report = session
            .report(&BTreeSet::new(), &catalog)
            .expect("report should build");
        match report.outcome {
            Outcome::Matched { results } => {
                assert_eq!(
                    results,
                    vec![
                        ScoredCandidate::new("A1", 5),
                        ScoredCandidate::new("A16", 4),
                        ScoredCandidate::new("A2", 3),
                        ScoredCandidate::new("A3", 3),
                    ]
                );
            }
            other => panic!("expected Matched, got {other:?}"),
        }
    }

    #[test]
    fn report_falls_back_to_closest_matches() {
        let catalog = data::builtin();
        let mut session = Session::new();
        session.submit(tags(&["急性期病院", "東京都昭島市"]), &catalog, 3);
        let report = session
            .report(&BTreeSet::new(), &catalog)
            .expect("report should build");
        match report.outcome {
            Outcome::NoMatch { closest } => {
                // A1, A13, A16 each score 1; ids break the tie.
                assert_eq!(
                    closest,
                    vec![
                        ScoredCandidate::new("A1", 1),
                        ScoredCandidate::new("A13", 1),
                        ScoredCandidate::new("A16", 1),
                    ]
                );
            }
            other => panic!("expected NoMatch, got {other:?}"),
        }
    }

    #[test]
    fn report_distinguishes_filtered_out_from_no_match() {
        let catalog = data::builtin();
        // Qualified set is {A1, A16, A2, A3}; 東京都昭島市 maps to A13 only
        // (tally 2, below threshold), so the filter removes every qualified
        // entry while the qualified set itself stays non-empty.
        let mut session = Session::new();
        session.submit(
            tags(&[
                "急性期病院",
                "神奈川県川崎市",
                "20代",
                "キャリアを積みたい",
                "宿直あり",
                "東京都昭島市",
            ]),
            &catalog,
            3,
        );
        let report = session
            .report(&tags(&["東京都昭島市"]), &catalog)
            .expect("report should build");
        match report.outcome {
            Outcome::FilteredOut { qualified } => {
                assert!(qualified
                    .iter()
                    .any(|entry| entry.id.as_str() == "A1" && entry.count == 5));
            }
            other => panic!("expected FilteredOut, got {other:?}"),
        }
    }

    #[test]
    fn empty_submission_reports_empty_selection() {
        let catalog = data::builtin();
        let mut session = Session::new();
        session.submit(BTreeSet::new(), &catalog, 3);
        let report = session
            .report(&BTreeSet::new(), &catalog)
            .expect("report should build");
        assert_eq!(report.outcome, Outcome::EmptySelection);
    }

    #[test]
    fn reset_returns_to_not_submitted() {
        let catalog = data::builtin();
        let mut session = submitted_session(&catalog);
        session.reset();
        assert!(!session.is_submitted());
        assert!(session.initial_results().is_empty());
        assert!(session.selected_tags().is_empty());
    }
}
