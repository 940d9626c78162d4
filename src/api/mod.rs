//! HTTP server module
//!
//! Exposes the translation pipeline as a small REST surface and serves
//! the static upload UI.

use crate::app_config::Config;
use crate::translation_service::TranslationService;
use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

pub mod error_response;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
/// - `POST /translate` - Translate an uploaded SRT file
/// - `GET /health` - Health check
/// - anything else - Static upload UI from the configured public dir
pub fn create_router(service: TranslationService, config: Arc<Config>) -> Router {
    let public_dir = config.server.public_dir.clone();
    let state = AppState::new(service, config);

    Router::new()
        .route("/translate", post(routes::translate_subtitle))
        .route("/health", get(routes::health_check))
        .with_state(state)
        .fallback_service(ServeDir::new(public_dir))
}

/// Start the API server on the configured bind address.
///
/// Binds a TCP listener and serves the router until shutdown or error.
pub async fn start_server(service: TranslationService, config: Arc<Config>) -> anyhow::Result<()> {
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let app = create_router(service, config);

    let listener = TcpListener::bind(&bind_address).await?;
    info!("Server started at http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
