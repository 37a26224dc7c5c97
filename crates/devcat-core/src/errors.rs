//! Cross-cutting error types for DevCatalog.
//!
//! Domain-specific errors (`ConfigError`, `LoaderError`, `FeedbackError`) are
//! defined in their respective crates. They converge in `devcat-cli` through
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any DevCatalog crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A string did not name any variant of an enumerated field.
    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl CoreError {
    /// Build an [`CoreError::InvalidValue`] listing the accepted spellings.
    #[must_use]
    pub fn invalid_value(field: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
