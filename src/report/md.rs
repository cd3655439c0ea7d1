use crate::types::catalog::Catalog;
use crate::types::outcome::{DiagnosisReport, Outcome, ScoredCandidate};

pub fn to_markdown(report: &DiagnosisReport, catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("# Diagnosis Report\n\n");
    output.push_str(&format!("Threshold: {}\n\n", report.threshold));

    output.push_str("## Selections\n\n");
    if report.selections.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for tag in &report.selections {
            output.push_str(&format!("- {tag}\n"));
        }
        output.push('\n');
    }

    if !report.filter_tags.is_empty() {
        output.push_str("## Filter\n\n");
        for tag in &report.filter_tags {
            output.push_str(&format!("- {tag}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Result\n\n");
    match &report.outcome {
        Outcome::EmptySelection => {
            output.push_str("At least one selection is required.\n");
        }
        Outcome::NoMatch { closest } => {
            output.push_str(&format!(
                "No candidate reached the threshold of {}.\n",
                report.threshold
            ));
            if !closest.is_empty() {
                output.push_str("\nClosest matches:\n\n");
                push_entries(&mut output, closest, catalog);
            }
        }
        Outcome::FilteredOut { qualified } => {
            output.push_str("No qualified candidate satisfies the filter.\n");
            output.push_str("\nQualified before filtering:\n\n");
            push_entries(&mut output, qualified, catalog);
        }
        Outcome::Matched { results } => {
            output.push_str(&format!("{} candidate(s) matched.\n\n", results.len()));
            push_entries(&mut output, results, catalog);
        }
    }

    output
}

fn push_entries(output: &mut String, entries: &[ScoredCandidate], catalog: &Catalog) {
    for entry in entries {
        // Ids missing from the catalog are skipped, not rendered half-empty.
        let Some(info) = catalog.info_for(&entry.id) else {
            continue;
        };
        output.push_str(&format!(
            "- **{}** (score {}): [{}]({})\n",
            info.name, entry.count, entry.id, info.url
        ));
    }
}
