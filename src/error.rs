use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShindanError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error("catalog validation error: {0}")]
    CatalogInvalid(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("question '{0}' allows only one selected option")]
    SingleChoiceViolated(String),

    #[error("filter tag was not part of the submitted selections: {0}")]
    FilterNotSelected(String),

    #[error("no diagnosis has been submitted")]
    NotSubmitted,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShindanError>;
