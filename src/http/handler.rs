//! HTTP handlers for the Visualizer API

use crate::error::HighlightError;
use crate::graph::{Dimension, EntityId};
use crate::highlight::HoverState;
use crate::render::{SceneBox, SceneEdge};
use crate::visualization::Visualization;
use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// The one session the visualizer serves
pub type SharedVisualization = Arc<RwLock<Visualization>>;

/// A box addressed by column and position
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoxRequest {
    pub dimension: Dimension,
    pub index: usize,
}

impl From<BoxRequest> for EntityId {
    fn from(req: BoxRequest) -> Self {
        EntityId::new(req.dimension, req.index)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ToggleRequest {
    pub show_authors: bool,
}

/// Boxes and edges with their current visuals
#[derive(Debug, Serialize)]
pub struct SceneView<'a> {
    pub width: f64,
    pub height: f64,
    pub columns: &'a [Dimension],
    pub hover: HoverState,
    pub boxes: Vec<&'a SceneBox>,
    pub edges: Vec<&'a SceneEdge>,
}

impl<'a> SceneView<'a> {
    pub fn of(viz: &'a Visualization) -> Self {
        let scene = viz.scene();
        SceneView {
            width: scene.width(),
            height: scene.height(),
            columns: scene.columns(),
            hover: viz.hover_state(),
            boxes: scene.boxes().collect(),
            edges: scene.edges().collect(),
        }
    }
}

fn highlight_error(err: HighlightError) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": err.to_string() }))).into_response()
}

fn status_json(viz: &Visualization) -> serde_json::Value {
    let graph = viz.graph();
    let entities: serde_json::Map<String, serde_json::Value> = Dimension::ALL
        .iter()
        .map(|d| (d.as_str().to_string(), json!(graph.len(*d))))
        .collect();

    json!({
        "status": "healthy",
        "version": crate::VERSION,
        "data": {
            "papers": viz.store().len(),
            "taxonomy": viz.store().taxonomy().len(),
        },
        "graph": {
            "entities": entities,
            "edges": graph.edge_count(),
        },
        "show_authors": viz.layout().show_authors(),
        "hover": viz.hover_state(),
        "warnings": viz.warnings(),
    })
}

/// Handler for the current diagram as SVG
pub async fn svg_handler(State(viz): State<SharedVisualization>) -> impl IntoResponse {
    let viz = viz.read().await;
    ([(header::CONTENT_TYPE, mime::IMAGE_SVG.to_string())], viz.svg())
}

/// Handler for the retained scene
pub async fn scene_handler(State(viz): State<SharedVisualization>) -> impl IntoResponse {
    let viz = viz.read().await;
    Json(json!(SceneView::of(&viz)))
}

/// Handler for system status
pub async fn status_handler(State(viz): State<SharedVisualization>) -> impl IntoResponse {
    let viz = viz.read().await;
    Json(status_json(&viz))
}

/// Handler for the pointer entering a box
pub async fn enter_handler(
    State(viz): State<SharedVisualization>,
    Json(payload): Json<BoxRequest>,
) -> Response {
    let mut viz = viz.write().await;
    match viz.pointer_enter(payload.into()) {
        Ok(()) => Json(json!(SceneView::of(&viz))).into_response(),
        Err(e) => highlight_error(e),
    }
}

/// Handler for the pointer leaving the focused box
pub async fn leave_handler(State(viz): State<SharedVisualization>) -> impl IntoResponse {
    let mut viz = viz.write().await;
    viz.pointer_leave();
    Json(json!(SceneView::of(&viz)))
}

/// Handler for a click on a box
pub async fn click_handler(
    State(viz): State<SharedVisualization>,
    Json(payload): Json<BoxRequest>,
) -> Response {
    let mut viz = viz.write().await;
    match viz.click(payload.into()) {
        Ok(panel) => {
            debug!("Click listed {} papers", panel.summaries.len());
            Json(json!(panel)).into_response()
        }
        Err(e) => highlight_error(e),
    }
}

/// Handler for the author column toggle
pub async fn toggle_handler(
    State(viz): State<SharedVisualization>,
    Json(payload): Json<ToggleRequest>,
) -> impl IntoResponse {
    let mut viz = viz.write().await;
    viz.set_show_authors(payload.show_authors);
    Json(status_json(&viz))
}

/// Handler for the reset control
pub async fn reset_handler(State(viz): State<SharedVisualization>) -> impl IntoResponse {
    let mut viz = viz.write().await;
    viz.reset();
    Json(status_json(&viz))
}
