use crate::types::catalog::Catalog;
use crate::types::outcome::{DiagnosisReport, Outcome, ScoredCandidate};

pub fn to_text(report: &DiagnosisReport, catalog: &Catalog) -> String {
    let mut output = String::new();

    match &report.outcome {
        Outcome::EmptySelection => {
            output.push_str("[warn] at least one selection is required\n");
        }
        Outcome::NoMatch { closest } => {
            output.push_str(&format!(
                "no candidate reached the threshold of {}\n",
                report.threshold
            ));
            if !closest.is_empty() {
                output.push_str("closest matches:\n");
                push_entries(&mut output, closest, catalog);
            }
        }
        Outcome::FilteredOut { qualified } => {
            output.push_str("no qualified candidate satisfies the filter\n");
            output.push_str("qualified before filtering:\n");
            push_entries(&mut output, qualified, catalog);
        }
        Outcome::Matched { results } => {
            output.push_str(&format!("{} candidate(s) matched:\n", results.len()));
            push_entries(&mut output, results, catalog);
        }
    }

    output
}

fn push_entries(output: &mut String, entries: &[ScoredCandidate], catalog: &Catalog) {
    for entry in entries {
        let Some(info) = catalog.info_for(&entry.id) else {
            continue;
        };
        output.push_str(&format!(
            "- {} {} (score {})\n  {}\n",
            entry.id, info.name, entry.count, info.url
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::types::outcome::Tally;

    fn report_with(outcome: Outcome) -> DiagnosisReport {
        DiagnosisReport {
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            threshold: 3,
            selections: vec![],
            filter_tags: vec![],
            tally: Tally::new(),
            outcome,
        }
    }

    #[test]
    fn text_report_lists_matches_with_urls() {
        let catalog = data::builtin();
        let rendered = to_text(
            &report_with(Outcome::Matched {
                results: vec![ScoredCandidate::new("A16", 4)],
            }),
            &catalog,
        );
        assert!(rendered.contains("1 candidate(s) matched"));
        assert!(rendered.contains("A16 埼玉石心会病院 (score 4)"));
        assert!(rendered.contains("https://saitama-sekishinkai-nurse.jp/"));
    }

    #[test]
    fn text_report_distinguishes_no_match_and_filtered_out() {
        let catalog = data::builtin();
        let no_match = to_text(
            &report_with(Outcome::NoMatch {
                closest: vec![ScoredCandidate::new("A9", 2)],
            }),
            &catalog,
        );
        assert!(no_match.contains("no candidate reached the threshold"));
        assert!(no_match.contains("closest matches:"));

        let filtered = to_text(
            &report_with(Outcome::FilteredOut {
                qualified: vec![ScoredCandidate::new("A1", 5)],
            }),
            &catalog,
        );
        assert!(filtered.contains("no qualified candidate satisfies the filter"));
    }
}
