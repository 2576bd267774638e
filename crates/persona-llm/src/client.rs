//! Completion client abstraction.

use async_trait::async_trait;

use crate::error::LlmError;

/// Sends one filled prompt to a text-generation service and returns the
/// generated text.
///
/// Implementations make exactly one request per call: no retries, no
/// streaming, no partial output.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
