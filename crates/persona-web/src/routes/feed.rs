//! Static feed stub handlers.

use askama::Template;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::render_page;
use crate::render::render_markdown;

#[derive(Template)]
#[template(path = "feed.html")]
struct FeedTemplate {
    html: String,
}

/// GET /feed - The fenced fragment rendered as a code block.
pub async fn page() -> Response {
    let html = render_markdown(&persona_core::feed::fenced());
    render_page(&FeedTemplate { html }, StatusCode::OK)
}

/// GET /feed.txt - The fenced fragment as plain text.
pub async fn raw() -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        persona_core::feed::fenced(),
    )
        .into_response()
}
