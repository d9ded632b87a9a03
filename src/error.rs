//! Extraction errors

use thiserror::Error;

/// Errors surfaced to callers of the extractor.
///
/// Missing or malformed page data (no title, bad embedded JSON, unknown
/// platform) is never an error; those cases yield empty or unchanged fields.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No document tree could be built from the input.
    #[error("HTML parse error: {0}")]
    Parse(String),

    /// Extractor configuration could not be decoded.
    #[error("Invalid extractor configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
