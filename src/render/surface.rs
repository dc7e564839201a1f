//! Rendering surface contract
//!
//! A surface receives whole columns of entity boxes and then every relation
//! edge between visible columns. Boxes are addressed by [`BoxId`]; each
//! rendered box must keep its dimension, index and paper indices so that the
//! highlight engine can find it again.

use super::layout::Layout;
use crate::graph::{BoxId, Dimension, EntityGraph, EntityId, EntityRecord};

pub trait RenderSurface {
    /// Start a drawing of the given size, discarding anything drawn before
    fn begin(&mut self, width: f64, height: f64);

    /// Draw one column; `entities[i]` is the box with index `i`
    fn render_column(&mut self, dimension: Dimension, entities: &[EntityRecord], layout: &Layout);

    /// Draw one relation edge, `from` in the left-hand column
    fn render_edge(&mut self, from: BoxId, to: BoxId, layout: &Layout);

    fn finish(&mut self) {}
}

/// Draw every visible column, then every edge between visible columns in
/// column-pair order.
pub fn render_graph<S: RenderSurface + ?Sized>(graph: &EntityGraph, layout: &Layout, surface: &mut S) {
    surface.begin(layout.width(), layout.canvas_height(graph));

    for &dimension in layout.visible_dimensions() {
        surface.render_column(dimension, graph.entities(dimension), layout);
    }

    for &dimension in layout.visible_dimensions() {
        let Some(right) = dimension.right().filter(|d| layout.is_visible(*d)) else {
            continue;
        };
        for (i, entity) in graph.entities(dimension).iter().enumerate() {
            for &j in entity.related_right() {
                surface.render_edge(EntityId::new(dimension, i), EntityId::new(right, j), layout);
            }
        }
    }

    surface.finish();
}
