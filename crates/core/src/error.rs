//! Error types for query-lens-core (WASM-compatible)

use thiserror::Error;

/// Result type alias for query-lens-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every way the metrics pipeline can fail
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure or non-success HTTP status.
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body is not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend answered with an explicit `{"error": ...}` payload.
    #[error("{0}")]
    Reported(String),

    /// Structurally valid JSON with a missing or wrongly shaped field.
    #[error("malformed payload: bad or missing {0}")]
    Malformed(&'static str),
}

impl Error {
    /// The message written into the chart region when the pipeline fails.
    ///
    /// Backend-reported errors are shown verbatim; every other kind
    /// collapses to the generic fetch-failure line.
    pub fn display_message(&self) -> String {
        match self {
            Error::Reported(message) => format!("Error: {message}"),
            _ => "Error fetching data".to_string(),
        }
    }
}
