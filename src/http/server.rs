//! HTTP server implementation for the Visualizer

use super::handler::{
    click_handler, enter_handler, leave_handler, reset_handler, scene_handler, status_handler,
    svg_handler, toggle_handler, SharedVisualization,
};
use crate::config::ServerConfig;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn static_handler() -> Response {
    match Assets::get("index.html") {
        Some(index_html) => Html(String::from_utf8_lossy(index_html.data.as_ref()).into_owned()).into_response(),
        None => (StatusCode::NOT_FOUND, "index.html not embedded").into_response(),
    }
}

/// The visualizer routes over one shared session
pub fn router(viz: SharedVisualization) -> Router {
    Router::new()
        .route("/", get(static_handler))
        .route("/api/diagram.svg", get(svg_handler))
        .route("/api/scene", get(scene_handler))
        .route("/api/status", get(status_handler))
        .route("/api/enter", post(enter_handler))
        .route("/api/leave", post(leave_handler))
        .route("/api/click", post(click_handler))
        .route("/api/toggle", post(toggle_handler))
        .route("/api/reset", post(reset_handler))
        .layer(CorsLayer::permissive())
        .with_state(viz)
}

/// HTTP server managing the Visualizer API and static assets
pub struct HttpServer {
    viz: SharedVisualization,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(viz: SharedVisualization, config: ServerConfig) -> Self {
        Self { viz, config }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(Arc::clone(&self.viz));

        let addr = format!("{}:{}", self.config.address, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Visualizer available at http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
