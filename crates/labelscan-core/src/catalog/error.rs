//! Catalog load error types

use thiserror::Error;

/// Errors that can occur while loading the additive catalog.
///
/// All of these are fatal to a single load attempt, never to the
/// process: `Catalog::load_or_fallback` converts any of them into the
/// built-in fallback catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source document could not be parsed
    #[error("unreadable catalog source: {0}")]
    Parse(#[from] serde_json::Error),

    /// Record has an empty or whitespace-only id
    #[error("record at index {index} has an empty id")]
    EmptyId { index: usize },

    /// Two records share the same id
    #[error("duplicate additive id: {0}")]
    DuplicateId(String),

    /// Enum field holds a value outside the closed set
    #[error("invalid {field} value '{value}' for additive '{id}'")]
    InvalidEnum {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Result type for catalog load operations
pub type LoadResult<T> = Result<T, LoadError>;
