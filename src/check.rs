//! Data lint over a catalog. Blocking findings break the scoring contract;
//! warnings point at stale entries that scoring would silently skip.

use crate::types::catalog::Catalog;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    fn new(id: &str, title: &str, body: String, blocking: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking,
        }
    }
}

pub fn catalog_findings(catalog: &Catalog) -> Vec<Finding> {
    let mut findings = Vec::new();

    if catalog.threshold == 0 {
        findings.push(Finding::new(
            "catalog.zero_threshold",
            "Threshold is zero",
            "A zero threshold qualifies every tallied candidate.".to_string(),
            true,
        ));
    }

    let mut owners = HashMap::<&str, u32>::new();
    for question in &catalog.questions {
        for option in &question.options {
            if let Some(other) = owners.insert(option.as_str(), question.id) {
                findings.push(Finding::new(
                    "catalog.duplicate_option",
                    "Option string reused across questions",
                    format!(
                        "Option '{}' appears in question {} and question {}; the flat tag index cannot tell them apart.",
                        option, other, question.id
                    ),
                    true,
                ));
            }
        }
    }

    for (tag, ids) in catalog.index() {
        for id in ids {
            if catalog.info_for(id).is_none() {
                findings.push(Finding::new(
                    "catalog.unknown_candidate",
                    "Mapping references unknown candidate",
                    format!("Mapping for '{}' references candidate {} which is not in the registry.", tag, id),
                    true,
                ));
            }
        }
        if catalog.question_offering(tag).is_none() {
            findings.push(Finding::new(
                "catalog.orphan_tag",
                "Mapping tag not offered by any question",
                format!("Tag '{}' can never be selected; its mapping entry is dead data.", tag),
                false,
            ));
        }
    }

    for question in &catalog.questions {
        for option in &question.options {
            if catalog.candidates_for(option).is_none() {
                findings.push(Finding::new(
                    "catalog.unmapped_option",
                    "Question option has no mapping entry",
                    format!(
                        "Option '{}' of question {} contributes to no candidate.",
                        option, question.id
                    ),
                    false,
                ));
            }
        }
    }

    for id in catalog.candidates.keys() {
        if !catalog.index().values().any(|ids| ids.contains(id)) {
            findings.push(Finding::new(
                "catalog.unreferenced_candidate",
                "Candidate never referenced by the mapping",
                format!("Candidate {} cannot appear in any result.", id),
                false,
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::types::catalog::{Candidate, CandidateId, Catalog, Question, SelectionMode};
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn builtin_catalog_is_clean() {
        let findings = catalog_findings(&data::builtin());
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    fn broken_catalog() -> Catalog {
        let mut candidates = BTreeMap::new();
        candidates.insert(
            CandidateId::new("X1"),
            Candidate {
                name: "North Clinic".to_string(),
                url: "https://north.example".to_string(),
            },
        );
        candidates.insert(
            CandidateId::new("X2"),
            Candidate {
                name: "South Clinic".to_string(),
                url: "https://south.example".to_string(),
            },
        );

        let mut index = BTreeMap::new();
        // X9 is not registered; "stale" is offered by no question.
        index.insert(
            "north".to_string(),
            BTreeSet::from([CandidateId::new("X1"), CandidateId::new("X9")]),
        );
        index.insert("stale".to_string(), BTreeSet::from([CandidateId::new("X1")]));

        Catalog::new(
            vec![Question {
                id: 1,
                text: "area".to_string(),
                mode: SelectionMode::Multi,
                options: vec!["north".to_string(), "south".to_string()],
            }],
            candidates,
            index,
            0,
        )
    }

    #[test]
    fn broken_catalog_yields_blocking_and_warning_findings() {
        let findings = catalog_findings(&broken_catalog());

        let has = |id: &str, blocking: bool| {
            findings
                .iter()
                .any(|finding| finding.id == id && finding.blocking == blocking)
        };
        assert!(has("catalog.zero_threshold", true));
        assert!(has("catalog.unknown_candidate", true));
        assert!(has("catalog.orphan_tag", false));
        // "south" has no mapping entry; X2 is never referenced.
        assert!(has("catalog.unmapped_option", false));
        assert!(has("catalog.unreferenced_candidate", false));
    }

    #[test]
    fn duplicate_option_across_questions_is_blocking() {
        let mut catalog = broken_catalog();
        catalog.questions.push(Question {
            id: 2,
            text: "other".to_string(),
            mode: SelectionMode::Multi,
            options: vec!["north".to_string()],
        });
        let findings = catalog_findings(&catalog);
        assert!(findings
            .iter()
            .any(|finding| finding.id == "catalog.duplicate_option" && finding.blocking));
    }
}
