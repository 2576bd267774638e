//! Index and health handlers.

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Response};

use super::render_page;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    variants: Vec<VariantLink>,
}

struct VariantLink {
    slug: String,
    title: String,
}

/// GET / - List the forms.
pub async fn index(State(state): State<AppState>) -> Response {
    let variants = state
        .registry
        .variants()
        .iter()
        .map(|v| VariantLink {
            slug: v.slug.clone(),
            title: v.title.clone(),
        })
        .collect();

    render_page(&IndexTemplate { variants }, StatusCode::OK)
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
