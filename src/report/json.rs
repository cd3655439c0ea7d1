use crate::types::catalog::Catalog;
use crate::types::outcome::{DiagnosisReport, Outcome, ScoredCandidate};
use serde_json::{json, Value};

/// JSON view of a report with candidate names and URLs resolved from the
/// catalog. Entries whose id is missing from the catalog are skipped.
pub fn to_json(report: &DiagnosisReport, catalog: &Catalog) -> Result<String, serde_json::Error> {
    let outcome = match &report.outcome {
        Outcome::EmptySelection => json!({ "kind": "empty_selection" }),
        Outcome::NoMatch { closest } => json!({
            "kind": "no_match",
            "closest": resolve(closest, catalog),
        }),
        Outcome::FilteredOut { qualified } => json!({
            "kind": "filtered_out",
            "qualified": resolve(qualified, catalog),
        }),
        Outcome::Matched { results } => json!({
            "kind": "matched",
            "results": resolve(results, catalog),
        }),
    };

    let document = json!({
        "generated_at": report.generated_at,
        "threshold": report.threshold,
        "selections": report.selections,
        "filter_tags": report.filter_tags,
        "tally": report.tally,
        "outcome": outcome,
    });

    serde_json::to_string_pretty(&document)
}

fn resolve(entries: &[ScoredCandidate], catalog: &Catalog) -> Vec<Value> {
    entries
        .iter()
        .filter_map(|entry| {
            catalog.info_for(&entry.id).map(|info| {
                json!({
                    "id": entry.id,
                    "name": info.name,
                    "url": info.url,
                    "score": entry.count,
                })
            })
        })
        .collect()
}
