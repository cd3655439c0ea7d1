use crate::data;
use crate::error::{Result, ShindanError};
use crate::types::catalog::{Candidate, CandidateId, Catalog, Question};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// On-disk catalog schema. Candidates are a list so the file stays readable;
/// the mapping is a flat `tag -> [candidate ids]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    pub questions: Vec<Question>,
    pub candidates: Vec<CandidateEntry>,
    pub mapping: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateEntry {
    pub id: String,
    pub name: String,
    pub url: String,
}

fn default_threshold() -> u32 {
    data::DEFAULT_THRESHOLD
}

impl CatalogFile {
    pub fn into_catalog(self) -> Catalog {
        let candidates = self
            .candidates
            .into_iter()
            .map(|entry| {
                (
                    CandidateId::new(entry.id),
                    Candidate {
                        name: entry.name,
                        url: entry.url,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        // Duplicate ids within one mapping entry collapse here.
        let index = self
            .mapping
            .into_iter()
            .map(|(tag, ids)| {
                (
                    tag,
                    ids.into_iter().map(CandidateId::new).collect::<BTreeSet<_>>(),
                )
            })
            .collect::<BTreeMap<_, _>>();

        Catalog::new(self.questions, candidates, index, self.threshold)
    }
}

/// Parse a catalog file without validating it. `check` uses this so it can
/// lint inconsistent data instead of refusing to read it.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(ShindanError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&content)
        .map_err(|e| ShindanError::CatalogParse(format!("{}: {}", path.display(), e)))?;
    Ok(file.into_catalog())
}

/// The catalog the commands run against: the builtin data, or a validated
/// TOML override.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        None => Ok(data::builtin()),
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading catalog override");
            let catalog = parse_catalog(path)?;
            catalog.validate()?;
            Ok(catalog)
        }
    }
}

/// A prepared submission: selections plus an optional filter subset.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswersFile {
    #[serde(default)]
    pub selections: Vec<String>,
    #[serde(default)]
    pub filter: Vec<String>,
}

pub fn load_answers(path: &Path) -> Result<AnswersFile> {
    if !path.exists() {
        return Err(ShindanError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ShindanError::AnswersParse(format!("{}: {}", path.display(), e)))
}
