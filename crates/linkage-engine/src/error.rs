//! Error types for the engine

use thiserror::Error;

/// Errors that can occur during an analysis
///
/// Malformed rows are never errors; they are skipped. These variants cover
/// bad configuration and internal-consistency failures.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A derived link references a participant missing from the node set
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Filter configuration failed validation
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Engine configuration failed validation or parsing
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::JsonParse(e.to_string())
    }
}
