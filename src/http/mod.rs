//! Visualizer: the diagram page and its JSON API

pub mod handler;
pub mod server;

pub use handler::{BoxRequest, SceneView, SharedVisualization, ToggleRequest};
pub use server::{router, HttpServer};
