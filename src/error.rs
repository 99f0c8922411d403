//! Error types for the Morse translator.
//!
//! Conversion itself never fails: unknown characters are skipped and unknown
//! tokens are reported inline. These errors cover the edges, meaning table
//! loading, table writing and the interactive prompt.

use thiserror::Error;

/// Main error type for the translator
#[derive(Error, Debug)]
pub enum MorseError {
    /// IO errors (reading or writing the alphabet file, terminal streams)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The alphabet document is not valid JSON or lacks a required key
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The alphabet document parsed but contains unusable entries
    #[error("Invalid alphabet table: {0}")]
    InvalidTable(String),

    /// Standard input ended before the user answered a prompt
    #[error("Input closed before a response was given")]
    InputClosed,
}

/// Result type alias for translator operations
pub type Result<T> = std::result::Result<T, MorseError>;

impl MorseError {
    /// Create an invalid table error
    pub fn invalid_table(msg: impl Into<String>) -> Self {
        Self::InvalidTable(msg.into())
    }
}
