//! # Persona LLM
//!
//! Completion client for an OpenAI-compatible chat-completion API, and the
//! per-submission generator that validates, fills the template and calls it.

pub mod client;
pub mod error;
pub mod generator;
pub mod openai;

pub use client::CompletionClient;
pub use error::LlmError;
pub use generator::Generator;
pub use openai::{LlmConfig, OpenAiClient};
