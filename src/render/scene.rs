//! Retained scene: the drawn boxes and edges with their visual state
//!
//! The scene is itself a [`RenderSurface`]; rendering the graph into it
//! yields the element set the highlight engine dims and emphasizes.

use super::layout::Layout;
use super::surface::RenderSurface;
use crate::graph::{BoxId, Dimension, EdgeKey, EntityId, EntityRecord};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// Visual state of a box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxVisual {
    pub opacity: f64,
    pub stroked: bool,
}

impl BoxVisual {
    pub const IDLE: BoxVisual = BoxVisual {
        opacity: 1.0,
        stroked: false,
    };

    pub const EMPHASIZED: BoxVisual = BoxVisual {
        opacity: 1.0,
        stroked: true,
    };

    pub fn dimmed(opacity: f64) -> Self {
        BoxVisual {
            opacity,
            stroked: false,
        }
    }
}

/// Visual state of an edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeVisual {
    pub opacity: f64,
}

impl EdgeVisual {
    pub const IDLE: EdgeVisual = EdgeVisual { opacity: 1.0 };
}

/// A drawn entity box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneBox {
    pub id: BoxId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub paper_indices: Vec<usize>,
    pub related_left: Vec<usize>,
    pub related_right: Vec<usize>,
    pub visual: BoxVisual,
}

/// A drawn relation edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneEdge {
    pub key: EdgeKey,
    pub path: String,
    pub visual: EdgeVisual,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    width: f64,
    height: f64,
    columns: Vec<Dimension>,
    boxes: IndexMap<BoxId, SceneBox>,
    edges: IndexMap<EdgeKey, SceneEdge>,
    /// Edge positions touching each box
    incident: HashMap<BoxId, Vec<usize>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Dimensions drawn, in column order
    pub fn columns(&self) -> &[Dimension] {
        &self.columns
    }

    pub fn has_column(&self, dimension: Dimension) -> bool {
        self.columns.contains(&dimension)
    }

    pub fn contains_box(&self, id: BoxId) -> bool {
        self.boxes.contains_key(&id)
    }

    pub fn get_box(&self, id: BoxId) -> Option<&SceneBox> {
        self.boxes.get(&id)
    }

    pub fn get_edge(&self, key: EdgeKey) -> Option<&SceneEdge> {
        self.edges.get(&key)
    }

    pub fn boxes(&self) -> impl Iterator<Item = &SceneBox> {
        self.boxes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &SceneEdge> {
        self.edges.values()
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Dim every box and every edge
    pub fn dim_all(&mut self, box_opacity: f64, edge_opacity: f64) {
        for b in self.boxes.values_mut() {
            b.visual = BoxVisual::dimmed(box_opacity);
        }
        for e in self.edges.values_mut() {
            e.visual = EdgeVisual {
                opacity: edge_opacity,
            };
        }
    }

    /// Restore the idle baseline: full opacity, no stroke
    pub fn reset(&mut self) {
        for b in self.boxes.values_mut() {
            b.visual = BoxVisual::IDLE;
        }
        for e in self.edges.values_mut() {
            e.visual = EdgeVisual::IDLE;
        }
    }

    /// Restore full opacity and add a stroke. Returns false for unknown boxes.
    pub fn emphasize_box(&mut self, id: BoxId) -> bool {
        match self.boxes.get_mut(&id) {
            Some(b) => {
                b.visual = BoxVisual::EMPHASIZED;
                true
            }
            None => false,
        }
    }

    /// Un-dim every drawn edge touching `id`; returns how many were touched
    pub fn emphasize_edges_of(&mut self, id: BoxId) -> usize {
        let Some(positions) = self.incident.get(&id) else {
            return 0;
        };
        for &pos in positions {
            if let Some((_, edge)) = self.edges.get_index_mut(pos) {
                edge.visual = EdgeVisual::IDLE;
            }
        }
        positions.len()
    }

    pub fn emphasized_boxes(&self) -> Vec<BoxId> {
        self.boxes
            .values()
            .filter(|b| b.visual == BoxVisual::EMPHASIZED)
            .map(|b| b.id)
            .collect()
    }

    /// Edges at full opacity
    pub fn lit_edges(&self) -> Vec<EdgeKey> {
        self.edges
            .values()
            .filter(|e| e.visual == EdgeVisual::IDLE)
            .map(|e| e.key)
            .collect()
    }

    /// True when every element is at the idle baseline
    pub fn is_idle(&self) -> bool {
        self.boxes.values().all(|b| b.visual == BoxVisual::IDLE)
            && self.edges.values().all(|e| e.visual == EdgeVisual::IDLE)
    }
}

impl RenderSurface for Scene {
    fn begin(&mut self, width: f64, height: f64) {
        *self = Scene {
            width,
            height,
            ..Scene::default()
        };
    }

    fn render_column(&mut self, dimension: Dimension, entities: &[EntityRecord], layout: &Layout) {
        self.columns.push(dimension);
        for (index, entity) in entities.iter().enumerate() {
            let id = EntityId::new(dimension, index);
            let origin = layout.box_origin(id);
            self.boxes.insert(
                id,
                SceneBox {
                    id,
                    label: entity.label.clone(),
                    x: origin.x,
                    y: origin.y,
                    width: layout.box_width(),
                    height: layout.box_height(),
                    paper_indices: entity.paper_indices().to_vec(),
                    related_left: entity.related_left().to_vec(),
                    related_right: entity.related_right().to_vec(),
                    visual: BoxVisual::IDLE,
                },
            );
        }
    }

    fn render_edge(&mut self, from: BoxId, to: BoxId, layout: &Layout) {
        let key = EdgeKey::new(from, to);
        let (pos, _) = self.edges.insert_full(
            key,
            SceneEdge {
                key,
                path: layout.link_path(key.from, key.to),
                visual: EdgeVisual::IDLE,
            },
        );
        for endpoint in [key.from, key.to] {
            let positions = self.incident.entry(endpoint).or_default();
            if !positions.contains(&pos) {
                positions.push(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::graph::{build_relations, EntityGraph};
    use crate::render::render_graph;

    fn scene() -> Scene {
        let mut lists: [Vec<EntityRecord>; 4] = Default::default();
        for (dimension, label, paper) in [
            (Dimension::Group, "Vision", 0),
            (Dimension::Category, "Segmentation", 0),
            (Dimension::Category, "Tracking", 1),
            (Dimension::Year, "2021", 0),
        ] {
            let mut record = EntityRecord::new(dimension, label);
            record.add_paper(paper);
            lists[dimension.column()].push(record);
        }
        let mut graph = EntityGraph::from_lists(lists);
        build_relations(&mut graph);

        let mut scene = Scene::new();
        render_graph(&graph, &Layout::new(LayoutConfig::default()), &mut scene);
        scene
    }

    #[test]
    fn test_scene_mirrors_graph() {
        let scene = scene();
        assert_eq!(scene.box_count(), 4);
        assert_eq!(scene.edge_count(), 2);
        assert_eq!(scene.columns().len(), 4);
        assert!(scene.is_idle());

        let tracking = scene.get_box(EntityId::new(Dimension::Category, 1)).unwrap();
        assert_eq!(tracking.label, "Tracking");
        assert_eq!(tracking.paper_indices, vec![1]);
        assert_eq!(tracking.y, 50.0);
    }

    #[test]
    fn test_dim_emphasize_reset() {
        let mut scene = scene();
        scene.dim_all(0.1, 0.05);
        assert!(!scene.is_idle());
        assert!(scene.emphasized_boxes().is_empty());
        assert!(scene.lit_edges().is_empty());

        let seg = EntityId::new(Dimension::Category, 0);
        assert!(scene.emphasize_box(seg));
        assert_eq!(scene.emphasize_edges_of(seg), 2);
        assert_eq!(scene.emphasized_boxes(), vec![seg]);
        assert_eq!(scene.lit_edges().len(), 2);

        assert!(!scene.emphasize_box(EntityId::new(Dimension::Author, 0)));

        scene.reset();
        assert!(scene.is_idle());
    }

    #[test]
    fn test_begin_clears() {
        let mut scene = scene();
        scene.begin(100.0, 50.0);
        assert_eq!(scene.box_count(), 0);
        assert_eq!(scene.edge_count(), 0);
        assert!(scene.columns().is_empty());
        assert_eq!(scene.emphasize_edges_of(EntityId::new(Dimension::Group, 0)), 0);
    }
}
