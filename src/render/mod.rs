//! Diagram rendering
//!
//! - `layout`: column offsets, row pitch, canvas height, link geometry
//! - `surface`: the [`RenderSurface`] contract and the [`render_graph`] driver
//! - `scene`: retained boxes and edges with their visual state
//! - `svg`: standalone SVG output

pub mod layout;
pub mod scene;
pub mod surface;
pub mod svg;

pub use layout::{link_horizontal, Layout, Point};
pub use scene::{BoxVisual, EdgeVisual, Scene, SceneBox, SceneEdge};
pub use surface::{render_graph, RenderSurface};
pub use svg::{box_element_id, edge_element_id, SvgSurface};
