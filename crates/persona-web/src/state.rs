//! Application state.

use persona_core::form::Registry;
use persona_llm::{CompletionClient, Generator};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub generator: Generator,
}

impl AppState {
    pub fn new(registry: Registry, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            registry: Arc::new(registry),
            generator: Generator::new(client),
        }
    }
}
