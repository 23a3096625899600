//! Fatal conversion errors.
//!
//! Everything recoverable (unresolved ids, unknown record shapes, empty
//! containers) is absorbed by the tree builder and never shows up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input text is not JSON at all.
    #[error("invalid input: not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// JSON parsed but lacks the sidebar structure (names the missing path).
    #[error("invalid input: missing or malformed {0}")]
    InvalidShape(String),
}

impl ConvertError {
    pub(crate) fn shape(path: impl Into<String>) -> Self {
        ConvertError::InvalidShape(path.into())
    }
}
