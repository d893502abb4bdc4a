//! Error types for the configuration model.

/// Errors raised while building a regular-expression test criterion.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid regular expression /{pattern}/: {error}")]
    InvalidRegex {
        pattern: String,
        #[source]
        error: regex_lite::Error,
    },

    #[error("Unsupported flag '{flag}' on /{pattern}/")]
    UnsupportedFlag { flag: char, pattern: String },
}

/// Errors raised while converting a configuration to or from JSON.
///
/// Invalid patterns inside the JSON surface here too, wrapped by serde.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
