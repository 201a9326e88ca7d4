use thiserror::Error;

/// Failure to import a JSON deck document. The collection is left untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The content is not JSON at all
    #[error("Invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// Valid JSON, but not a `{ "decks": [...] }` document
    #[error("Invalid import format: {0}")]
    Format(String),
}

/// Caller or configuration defect, not user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown sort mode `{0}` (expected one of: shared, alpha, decks)")]
    UnknownSortMode(String),
}

#[derive(Debug, Error)]
#[error("failed to serialize deck collection: {0}")]
pub struct ExportError(#[from] pub serde_json::Error);
