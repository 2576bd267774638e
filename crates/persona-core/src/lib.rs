//! Persona Core Library
//!
//! Personality frameworks, form variants, prompt templates and the typed
//! outcome of a submission. Nothing here performs network I/O.

pub mod config;
pub mod error;
pub mod feed;
pub mod form;
pub mod framework;
pub mod outcome;
pub mod prompt;

pub use error::{CoreError, CoreResult, ValidationError};
pub use form::model::{FormVariant, Request};
pub use framework::Framework;
pub use outcome::{Download, Outcome};
pub use prompt::PromptTemplate;
