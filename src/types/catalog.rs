use crate::error::{Result, ShindanError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Identifier of a catalog candidate ("A1".."A21" in the builtin data).
///
/// Derived `Ord` is plain lexicographic string order, which is also the
/// tie-break order for equally scored results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    Multi,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub mode: SelectionMode,
    pub options: Vec<String>,
}

/// Read-only registry of questions, candidates, and the flat tag index.
/// Built once at startup (builtin tables or a TOML file) and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub candidates: BTreeMap<CandidateId, Candidate>,
    index: BTreeMap<String, BTreeSet<CandidateId>>,
    pub threshold: u32,
}

impl Catalog {
    pub fn new(
        questions: Vec<Question>,
        candidates: BTreeMap<CandidateId, Candidate>,
        index: BTreeMap<String, BTreeSet<CandidateId>>,
        threshold: u32,
    ) -> Self {
        Self {
            questions,
            candidates,
            index,
            threshold,
        }
    }

    /// Candidates referenced by a tag. Unknown tags yield `None`, which
    /// scoring treats as an empty set rather than an error.
    pub fn candidates_for(&self, tag: &str) -> Option<&BTreeSet<CandidateId>> {
        self.index.get(tag)
    }

    /// Display info for a candidate id. Absent is a valid outcome; renderers
    /// skip such ids instead of failing.
    pub fn info_for(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates.get(id)
    }

    pub fn index(&self) -> &BTreeMap<String, BTreeSet<CandidateId>> {
        &self.index
    }

    /// The question whose option list contains `tag`, if any.
    pub fn question_offering(&self, tag: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.options.iter().any(|option| option == tag))
    }

    /// First single-choice question with more than one tag selected, if any.
    pub fn single_choice_violation(&self, selections: &BTreeSet<String>) -> Option<&Question> {
        self.questions
            .iter()
            .filter(|question| question.mode == SelectionMode::Single)
            .find(|question| {
                question
                    .options
                    .iter()
                    .filter(|option| selections.contains(*option))
                    .count()
                    > 1
            })
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(ShindanError::CatalogInvalid(
                "threshold must be greater than 0".to_string(),
            ));
        }

        if self.questions.is_empty() {
            return Err(ShindanError::CatalogInvalid(
                "catalog must define at least one question".to_string(),
            ));
        }

        let mut seen = HashMap::<&str, u32>::new();
        for question in &self.questions {
            if question.options.is_empty() {
                return Err(ShindanError::CatalogInvalid(format!(
                    "question '{}' has no options",
                    question.text
                )));
            }
            for option in &question.options {
                if let Some(other) = seen.insert(option.as_str(), question.id) {
                    return Err(ShindanError::CatalogInvalid(format!(
                        "option '{}' appears in both question {} and question {}",
                        option, other, question.id
                    )));
                }
            }
        }

        for (tag, ids) in &self.index {
            for id in ids {
                if !self.candidates.contains_key(id) {
                    return Err(ShindanError::CatalogInvalid(format!(
                        "mapping for '{}' references unknown candidate {}",
                        tag, id
                    )));
                }
            }
        }

        Ok(())
    }
}
