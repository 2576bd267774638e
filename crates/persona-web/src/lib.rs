//! Persona Web Server
//!
//! Axum-based server for the form pages, downloads, feed stub and JSON API.

pub mod render;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/variants", get(routes::api::list_variants))
        .route("/{variant}/generate", post(routes::api::generate))
        .layer(cors)
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::pages::index))
        .route("/health", get(routes::pages::health))
        .route("/feed", get(routes::feed::page))
        .route("/feed.txt", get(routes::feed::raw))
        .route("/{variant}", get(routes::forms::show).post(routes::forms::submit))
        .route("/{variant}/download", post(routes::forms::download))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
