//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while loading or recognizing documents
///
/// None of these ever reach the end user: extraction degrades to an empty
/// query list instead.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document could not be read
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Document is present but not in the expected shape
    #[error("Invalid document format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}

impl From<std::io::Error> for ExtractorError {
    fn from(e: std::io::Error) -> Self {
        ExtractorError::SourceUnavailable(e.to_string())
    }
}
