//! Completion client errors.

use thiserror::Error;

/// A request to the completion service failed. Never retried.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("No API key configured for the completion service")]
    MissingApiKey,

    #[error("Failed to reach the completion service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse completion response: {0}")]
    Decode(String),

    #[error("Completion response contained no text")]
    EmptyResponse,
}

impl LlmError {
    /// True when the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
