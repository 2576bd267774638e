//! Per-submission handler: validate, fill the template, call the client once.

use std::sync::Arc;
use tracing::{error, info, warn, Instrument};
use uuid::Uuid;

use persona_core::{FormVariant, Outcome};

use crate::client::CompletionClient;

/// Turns raw form input into an [`Outcome`].
///
/// Holds no per-request state; one instance serves every submission.
#[derive(Clone)]
pub struct Generator {
    client: Arc<dyn CompletionClient>,
}

impl Generator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Handle one submission.
    ///
    /// Invalid input returns [`Outcome::Invalid`] without touching the
    /// client. Otherwise the filled prompt is sent exactly once.
    pub async fn submit(&self, variant: &FormVariant, selection: Option<&str>, topic: &str) -> Outcome {
        let id = Uuid::new_v4();
        let span = tracing::info_span!("submission", %id, variant = %variant.slug);
        self.run(variant, selection, topic).instrument(span).await
    }

    async fn run(&self, variant: &FormVariant, selection: Option<&str>, topic: &str) -> Outcome {
        let request = match variant.validate(selection, topic) {
            Ok(r) => r,
            Err(e) => {
                warn!(reason = e.code(), "Submission rejected");
                return Outcome::Invalid(e);
            }
        };

        let prompt = match variant.template.render(&request) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "Failed to fill prompt template");
                return Outcome::Failed(e.to_string());
            }
        };

        info!(
            framework = %request.framework,
            topic_chars = request.topic.chars().count(),
            "Submission accepted"
        );

        match self.client.complete(&prompt).await {
            Ok(text) => {
                info!(len = text.len(), "Generation succeeded");
                Outcome::Success { text }
            }
            Err(e) => {
                error!(error = %e, timeout = e.is_timeout(), "Generation failed");
                Outcome::Failed(e.to_string())
            }
        }
    }
}
