//! JSON API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use persona_core::form::model::VariantSummary;
use persona_core::Outcome;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub framework: Option<String>,
    #[serde(default)]
    pub topic: String,
}

/// Tagged result of a generation request.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerateResponse {
    Success { text: String, filename: String },
    ValidationError { code: String, error: String },
    RequestError { error: String },
}

/// GET /api/variants
pub async fn list_variants(State(state): State<AppState>) -> Json<Vec<VariantSummary>> {
    Json(state.registry.variants().iter().map(|v| v.summary()).collect())
}

/// POST /api/{variant}/generate
pub async fn generate(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), (StatusCode, String)> {
    let variant = state
        .registry
        .require(&slug)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    let outcome = state
        .generator
        .submit(variant, req.framework.as_deref(), &req.topic)
        .await;

    let reply = match outcome {
        Outcome::Success { text } => (
            StatusCode::OK,
            GenerateResponse::Success {
                text,
                filename: variant.download_filename.clone(),
            },
        ),
        Outcome::Invalid(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            GenerateResponse::ValidationError {
                code: e.code().to_string(),
                error: e.to_string(),
            },
        ),
        Outcome::Failed(error) => (StatusCode::BAD_GATEWAY, GenerateResponse::RequestError { error }),
    };

    Ok((reply.0, Json(reply.1)))
}
