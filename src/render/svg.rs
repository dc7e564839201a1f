//! SVG rendering surface
//!
//! Produces a standalone SVG document. Every box group carries its
//! dimension, index, paper indices and related indices as `data-*`
//! attributes so that a browser host can route pointer events back.

use super::layout::Layout;
use super::scene::{BoxVisual, EdgeVisual, Scene};
use super::surface::RenderSurface;
use crate::graph::{BoxId, Dimension, EdgeKey, EntityId, EntityRecord};

/// Writes SVG markup into a string.
///
/// When built with [`SvgSurface::styled`], each element takes its opacity and
/// stroke from the scene, so the output reflects the current highlight.
#[derive(Debug, Default)]
pub struct SvgSurface<'a> {
    out: String,
    visuals: Option<&'a Scene>,
}

impl<'a> SvgSurface<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styled(scene: &'a Scene) -> Self {
        SvgSurface {
            out: String::new(),
            visuals: Some(scene),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn box_visual(&self, id: BoxId) -> BoxVisual {
        self.visuals
            .and_then(|scene| scene.get_box(id))
            .map(|b| b.visual)
            .unwrap_or(BoxVisual::IDLE)
    }

    fn edge_visual(&self, key: EdgeKey) -> EdgeVisual {
        self.visuals
            .and_then(|scene| scene.get_edge(key))
            .map(|e| e.visual)
            .unwrap_or(EdgeVisual::IDLE)
    }
}

/// Element id of a box group
pub fn box_element_id(id: BoxId) -> String {
    format!("box-{}-{}", id.dimension, id.index)
}

/// Element id of an edge path
pub fn edge_element_id(key: EdgeKey) -> String {
    format!(
        "edge-{}-{}-{}-{}",
        key.from.dimension, key.from.index, key.to.dimension, key.to.index
    )
}

fn join(indices: &[usize]) -> String {
    indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl RenderSurface for SvgSurface<'_> {
    fn begin(&mut self, width: f64, height: f64) {
        self.out.clear();
        self.out.push_str(&format!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" style="max-width: 100%; height: auto; height: intrinsic;">"#,
            w = width,
            h = height
        ));
    }

    fn render_column(&mut self, dimension: Dimension, entities: &[EntityRecord], layout: &Layout) {
        let header = layout.header_origin(dimension);
        self.out.push_str(&format!(
            r#"<text class="entity-label entity-label-{dim}" x="{x}" y="{y}" font-size="15" font-weight="bold">{title}</text>"#,
            dim = dimension,
            x = header.x,
            y = header.y,
            title = dimension.title()
        ));

        for (index, entity) in entities.iter().enumerate() {
            let id = EntityId::new(dimension, index);
            let origin = layout.box_origin(id);
            let text = layout.text_origin(id);
            let visual = self.box_visual(id);
            let stroke = if visual.stroked {
                r#" stroke="black" stroke-width="1""#
            } else {
                ""
            };

            self.out.push_str(&format!(
                r#"<g id="{gid}" class="entity-box entity-box-{dim}" data-dimension="{dim}" data-index="{index}" data-papers="{papers}" data-related-left="{left}" data-related-right="{right}">"#,
                gid = box_element_id(id),
                dim = dimension,
                index = index,
                papers = join(entity.paper_indices()),
                left = join(entity.related_left()),
                right = join(entity.related_right()),
            ));
            self.out.push_str(&format!(
                r##"<rect class="entity-rect entity-rect-{dim}" x="{x}" y="{y}" width="{w}" height="{h}" fill="#cbd5e1" opacity="{opacity}"{stroke}/>"##,
                dim = dimension,
                x = origin.x,
                y = origin.y,
                w = layout.box_width(),
                h = layout.box_height(),
                opacity = visual.opacity,
                stroke = stroke,
            ));
            self.out.push_str(&format!(
                r#"<text class="entity-text entity-text-{dim}" x="{x}" y="{y}" font-size="11" opacity="{opacity}">{label}</text></g>"#,
                dim = dimension,
                x = text.x,
                y = text.y,
                opacity = visual.opacity,
                label = escape_xml(&entity.label),
            ));
        }
    }

    fn render_edge(&mut self, from: BoxId, to: BoxId, layout: &Layout) {
        let key = EdgeKey::new(from, to);
        let visual = self.edge_visual(key);
        self.out.push_str(&format!(
            r##"<path id="{id}" class="entity-connection entity-connection-{a}-{b}" d="{d}" fill="none" stroke="#64748b" opacity="{opacity}"/>"##,
            id = edge_element_id(key),
            a = key.from.dimension,
            b = key.to.dimension,
            d = layout.link_path(key.from, key.to),
            opacity = visual.opacity,
        ));
    }

    fn finish(&mut self) {
        self.out.push_str("</svg>");
    }
}
