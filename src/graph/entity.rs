//! Entity records: one distinct value within a dimension
//!
//! An entity carries the row indices of the papers that reference it and,
//! once the relation graph is built, the indices of related entities in the
//! two neighbouring dimensions.

use super::types::Dimension;
use serde::{Deserialize, Serialize};

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// A single distinct value within a dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Dimension this entity belongs to
    pub dimension: Dimension,

    /// Label, unique within the dimension
    pub label: String,

    /// Paper row indices, duplicates collapsed, in insertion order
    paper_indices: Vec<usize>,

    /// Related indices into the left and right neighbour dimensions
    related: [Vec<usize>; 2],
}

impl EntityRecord {
    pub fn new(dimension: Dimension, label: impl Into<String>) -> Self {
        EntityRecord {
            dimension,
            label: label.into(),
            paper_indices: Vec::new(),
            related: [Vec::new(), Vec::new()],
        }
    }

    /// Record that paper `index` references this entity.
    ///
    /// Returns false when the index was already present.
    pub fn add_paper(&mut self, index: usize) -> bool {
        if self.paper_indices.contains(&index) {
            return false;
        }
        self.paper_indices.push(index);
        true
    }

    pub fn paper_indices(&self) -> &[usize] {
        &self.paper_indices
    }

    pub fn has_paper(&self, index: usize) -> bool {
        self.paper_indices.contains(&index)
    }

    pub fn paper_count(&self) -> usize {
        self.paper_indices.len()
    }

    fn slot(&self, other: Dimension) -> Option<usize> {
        if self.dimension.left() == Some(other) {
            Some(LEFT)
        } else if self.dimension.right() == Some(other) {
            Some(RIGHT)
        } else {
            None
        }
    }

    /// Related entity indices in `other`, or `None` when `other` is not an
    /// adjacent dimension.
    pub fn related_to(&self, other: Dimension) -> Option<&[usize]> {
        self.slot(other).map(|slot| self.related[slot].as_slice())
    }

    /// Record a relation to entity `index` of the adjacent dimension `other`.
    ///
    /// Returns false when the relation was already recorded or `other` is not
    /// adjacent.
    pub fn add_related(&mut self, other: Dimension, index: usize) -> bool {
        let Some(slot) = self.slot(other) else {
            return false;
        };
        let related = &mut self.related[slot];
        if related.contains(&index) {
            return false;
        }
        related.push(index);
        true
    }

    pub fn clear_relations(&mut self) {
        self.related[LEFT].clear();
        self.related[RIGHT].clear();
    }

    /// Related indices on the left side (empty for groups)
    pub fn related_left(&self) -> &[usize] {
        &self.related[LEFT]
    }

    /// Related indices on the right side (empty for authors)
    pub fn related_right(&self) -> &[usize] {
        &self.related[RIGHT]
    }
}
