//! Diagram geometry
//!
//! Columns start at fixed fractions of the canvas width, rows sit on a fixed
//! pitch below a top margin, and the canvas is as tall as the longest
//! visible column.

use crate::config::LayoutConfig;
use crate::graph::{Dimension, EntityGraph, EntityId};

const WITH_AUTHORS: [Dimension; 4] = Dimension::ALL;
const WITHOUT_AUTHORS: [Dimension; 3] = [Dimension::Group, Dimension::Category, Dimension::Year];

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Layout constants plus the author-column toggle
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    config: LayoutConfig,
}

impl Layout {
    pub fn new(config: LayoutConfig) -> Self {
        Layout { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn show_authors(&self) -> bool {
        self.config.show_authors
    }

    pub fn set_show_authors(&mut self, show: bool) {
        self.config.show_authors = show;
    }

    /// Dimensions drawn as columns
    pub fn visible_dimensions(&self) -> &'static [Dimension] {
        if self.config.show_authors {
            &WITH_AUTHORS
        } else {
            &WITHOUT_AUTHORS
        }
    }

    pub fn is_visible(&self, dimension: Dimension) -> bool {
        self.visible_dimensions().contains(&dimension)
    }

    pub fn width(&self) -> f64 {
        self.config.width
    }

    pub fn canvas_height(&self, graph: &EntityGraph) -> f64 {
        graph.max_len(self.visible_dimensions()) as f64 * self.config.row_pitch
            + self.config.canvas_padding
    }

    pub fn column_x(&self, dimension: Dimension) -> f64 {
        self.config.width * self.config.column_fractions[dimension.column()]
            + self.config.column_padding
    }

    pub fn box_y(&self, row: usize) -> f64 {
        self.config.top_margin + (row + 1) as f64 * self.config.row_pitch
    }

    pub fn box_width(&self) -> f64 {
        self.config.box_width
    }

    pub fn box_height(&self) -> f64 {
        self.config.box_height
    }

    /// Top-left corner of an entity's box
    pub fn box_origin(&self, id: EntityId) -> Point {
        Point {
            x: self.column_x(id.dimension),
            y: self.box_y(id.index),
        }
    }

    pub fn text_origin(&self, id: EntityId) -> Point {
        let origin = self.box_origin(id);
        Point {
            x: origin.x + self.config.text_offset_x,
            y: origin.y + self.config.text_offset_y,
        }
    }

    pub fn header_origin(&self, dimension: Dimension) -> Point {
        Point {
            x: self.column_x(dimension),
            y: self.config.header_y,
        }
    }

    /// Edge anchor on the right side of the left-hand box
    pub fn edge_source(&self, from: EntityId) -> Point {
        let origin = self.box_origin(from);
        Point {
            x: origin.x + self.config.box_width,
            y: origin.y + self.config.edge_offset_y,
        }
    }

    /// Edge anchor on the left side of the right-hand box
    pub fn edge_target(&self, to: EntityId) -> Point {
        let origin = self.box_origin(to);
        Point {
            x: origin.x,
            y: origin.y + self.config.edge_offset_y,
        }
    }

    /// Horizontal cubic link between two entities
    pub fn link_path(&self, from: EntityId, to: EntityId) -> String {
        link_horizontal(self.edge_source(from), self.edge_target(to))
    }
}

/// Cubic curve leaving and entering horizontally, control points at mid-x
pub fn link_horizontal(source: Point, target: Point) -> String {
    let mid = (source.x + target.x) / 2.0;
    format!(
        "M{},{}C{},{},{},{},{},{}",
        source.x, source.y, mid, source.y, mid, target.y, target.x, target.y
    )
}
