use thiserror::Error;

/// Errors from loading or validating rule/panch tables.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("rule table is empty; the first rule is required as the fallback")]
    EmptyRuleTable,

    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(String),

    #[error("rule {0} has no keywords on either side")]
    NoKeywords(String),

    #[error("panch bench is empty")]
    EmptyBench,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}
