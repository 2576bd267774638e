//! Route handlers.

pub mod api;
pub mod feed;
pub mod forms;
pub mod pages;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use persona_core::FormVariant;

use crate::state::AppState;

/// Render an askama template with the given status.
fn render_page<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response(),
    }
}

/// Find a variant by slug, or a 404 response.
fn find_variant<'a>(state: &'a AppState, slug: &str) -> Result<&'a FormVariant, Response> {
    state.registry.get(slug).ok_or_else(|| {
        (StatusCode::NOT_FOUND, Html(format!("Unknown form: {}", slug))).into_response()
    })
}
