//! Redial error types

/// Redial error types
///
/// Codec failures (`Decode`, `ShapeMismatch`) carry the offending input
/// text for diagnostics and are never retried or recovered internally.
/// Store failures (`DuplicateId`, `NotFound`) are caller-correctable and
/// deliberately distinct from codec failures, so a caller can decide to
/// overwrite vs. abort by matching on the variant.
#[derive(Debug, thiserror::Error)]
pub enum RedialError {
    // Codec errors
    #[error("malformed encoded text: {source} (input: {text:?})")]
    Decode {
        #[source]
        source: serde_json::Error,
        text: String,
    },

    #[error("encoded structure does not match requested {expected}: {source} (input: {text:?})")]
    ShapeMismatch {
        expected: &'static str,
        #[source]
        source: serde_json::Error,
        text: String,
    },

    #[error("encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    // Store errors
    #[error("record id already present: {0}")]
    DuplicateId(String),

    #[error("no record with id: {0}")]
    NotFound(String),

    // Input validation
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RedialError {
    /// Classify a `serde_json` failure against the shape the caller asked
    /// for: syntactically broken text is a `Decode` failure, well-formed
    /// text that cannot fill the target shape is a `ShapeMismatch`.
    pub(crate) fn from_json(err: serde_json::Error, expected: &'static str, text: &str) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => RedialError::ShapeMismatch {
                expected,
                source: err,
                text: text.to_string(),
            },
            _ => RedialError::Decode {
                source: err,
                text: text.to_string(),
            },
        }
    }
}

/// Result type alias for redial operations
pub type Result<T> = std::result::Result<T, RedialError>;
