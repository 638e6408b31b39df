//! Adventure search port - HTTP boundary for prompt-driven search

use microaventure_domain::Adventure;
use thiserror::Error;

/// Errors raised by search adapters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Response body was not the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

/// Searches adventures matching a free-text prompt.
///
/// A single request per call: no pagination, retry or streaming.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait AdventureSearchPort: Send + Sync {
    async fn search(&self, prompt: &str) -> Result<Vec<Adventure>, ApiError>;
}
