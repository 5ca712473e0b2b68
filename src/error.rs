//! Error types for the lexicut segmentation library.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lexicut operations.
#[derive(Error, Debug)]
pub enum LexicutError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dictionary file not found.
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),

    /// Malformed line in a dictionary file.
    #[error("Dictionary parse error at line {line}: {message}")]
    DictionaryParse {
        /// 1-based line number of the offending entry.
        line: usize,
        /// Description of what was malformed.
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An empty string was supplied as a dictionary token.
    #[error("Dictionary tokens must be non-empty")]
    EmptyToken,
}

/// Result type alias for lexicut operations.
pub type Result<T> = std::result::Result<T, LexicutError>;

impl From<serde_json::Error> for LexicutError {
    fn from(err: serde_json::Error) -> Self {
        LexicutError::Serialization(err.to_string())
    }
}
