//! Form page handlers.
//!
//! One page per variant: the form, then either an inline validation error,
//! the rendered result with a download button, or a request failure.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use tracing::warn;

use persona_core::framework::NO_SELECTION;
use persona_core::{Download, FormVariant, Outcome};

use super::{find_variant, render_page};
use crate::render::render_markdown;
use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate {
    slug: String,
    title: String,
    framework_label: String,
    topic_label: String,
    placeholder: String,
    max_chars: usize,
    sentinel: &'static str,
    sentinel_selected: bool,
    options: Vec<OptionView>,
    topic: String,
    error: Option<String>,
    failure: Option<String>,
    result: Option<ResultView>,
}

struct OptionView {
    value: String,
    selected: bool,
}

/// Rendered response plus what the download button posts back.
struct ResultView {
    html: String,
    payload: String,
    filename: String,
}

impl FormTemplate {
    fn new(variant: &FormVariant, selection: Option<&str>, topic: &str) -> Self {
        let chosen = selection.and_then(persona_core::Framework::from_str);
        let options: Vec<OptionView> = variant
            .frameworks
            .iter()
            .map(|f| OptionView {
                value: f.display_name().to_string(),
                selected: chosen == Some(*f),
            })
            .collect();

        Self {
            slug: variant.slug.clone(),
            title: variant.title.clone(),
            framework_label: variant.framework_label.clone(),
            topic_label: variant.topic_label.clone(),
            placeholder: variant.placeholder.clone(),
            max_chars: variant.max_chars,
            sentinel: NO_SELECTION,
            sentinel_selected: !options.iter().any(|o| o.selected),
            options,
            topic: topic.to_string(),
            error: None,
            failure: None,
            result: None,
        }
    }
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct SubmitForm {
    pub framework: Option<String>,
    #[serde(default)]
    pub topic: String,
}

#[derive(Deserialize)]
pub struct DownloadForm {
    pub payload: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET /{variant} - Empty form.
pub async fn show(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let variant = match find_variant(&state, &slug) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    render_page(&FormTemplate::new(variant, None, ""), StatusCode::OK)
}

/// POST /{variant} - Validate, generate and render.
pub async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<SubmitForm>,
) -> Response {
    let variant = match find_variant(&state, &slug) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let selection = form.framework.as_deref();
    let outcome = state.generator.submit(variant, selection, &form.topic).await;

    let mut page = FormTemplate::new(variant, selection, &form.topic);
    let status = match outcome {
        Outcome::Success { text } => {
            page.result = Some(ResultView {
                html: render_markdown(&text),
                payload: STANDARD.encode(text.as_bytes()),
                filename: variant.download_filename.clone(),
            });
            StatusCode::OK
        }
        Outcome::Invalid(e) => {
            page.error = Some(e.to_string());
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Outcome::Failed(msg) => {
            page.failure = Some(msg);
            StatusCode::BAD_GATEWAY
        }
    };

    render_page(&page, status)
}

/// POST /{variant}/download - Serve the generated text as a file.
pub async fn download(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<DownloadForm>,
) -> Response {
    let variant = match find_variant(&state, &slug) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let text = match STANDARD
        .decode(form.payload.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
    {
        Some(t) => t,
        None => {
            warn!(variant = %slug, "Rejected malformed download payload");
            return (StatusCode::BAD_REQUEST, Html("Malformed download payload".to_string())).into_response();
        }
    };

    let file = Download::new(variant, &text);
    (
        [
            (header::CONTENT_TYPE, format!("{}; charset=utf-8", file.mime)),
            (header::CONTENT_DISPOSITION, file.content_disposition()),
        ],
        file.bytes,
    )
        .into_response()
}
