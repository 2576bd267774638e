//! Centralized error types for Persona.

use thiserror::Error;

/// Main error type for core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Unknown form variant: {0}")]
    VariantNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a template error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// A submission rejected before any network call is made.
///
/// The display text is shown inline next to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a personality model.")]
    NoFramework,

    #[error("'{0}' is not one of the offered personality models.")]
    UnknownFramework(String),

    #[error("Please define the task.")]
    EmptyTopic,

    #[error("Please keep the description to {max} characters or fewer (got {actual}).")]
    TopicTooLong { max: usize, actual: usize },
}

impl ValidationError {
    /// Stable machine-readable code for the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoFramework => "no_framework",
            Self::UnknownFramework(_) => "unknown_framework",
            Self::EmptyTopic => "empty_topic",
            Self::TopicTooLong { .. } => "topic_too_long",
        }
    }
}
