//! In-memory entity graph
//!
//! Four sorted entity lists, one per dimension. Relations live on the
//! records themselves as integer indices into the neighbouring list, so the
//! graph needs no separate edge storage.

use super::entity::EntityRecord;
use super::types::{Dimension, EdgeKey, EntityId};
use serde::Serialize;

/// The four dimension lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityGraph {
    lists: [Vec<EntityRecord>; 4],
}

impl EntityGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from per-dimension lists, sorting each by label.
    ///
    /// Relations are not computed here; see [`build_relations`](super::build_relations).
    pub fn from_lists(mut lists: [Vec<EntityRecord>; 4]) -> Self {
        for list in lists.iter_mut() {
            list.sort_by(|a, b| a.label.cmp(&b.label));
        }
        EntityGraph { lists }
    }

    pub fn entities(&self, dimension: Dimension) -> &[EntityRecord] {
        &self.lists[dimension.column()]
    }

    pub(crate) fn entities_mut(&mut self, dimension: Dimension) -> &mut [EntityRecord] {
        &mut self.lists[dimension.column()]
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.entities(id.dimension).get(id.index)
    }

    /// Look up an entity by exact label
    pub fn find(&self, dimension: Dimension, label: &str) -> Option<EntityId> {
        self.entities(dimension)
            .binary_search_by(|e| e.label.as_str().cmp(label))
            .ok()
            .map(|index| EntityId::new(dimension, index))
    }

    pub fn len(&self, dimension: Dimension) -> usize {
        self.entities(dimension).len()
    }

    pub fn total_entities(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    /// Related entities of `id` in the adjacent dimension `toward`
    pub fn related(&self, id: EntityId, toward: Dimension) -> impl Iterator<Item = EntityId> + '_ {
        self.get(id)
            .and_then(|entity| entity.related_to(toward))
            .unwrap_or(&[])
            .iter()
            .map(move |&index| EntityId::new(toward, index))
    }

    /// Edges between `dimension` and the dimension to its right, in discovery order
    pub fn edges_from(&self, dimension: Dimension) -> Vec<EdgeKey> {
        let Some(right) = dimension.right() else {
            return Vec::new();
        };
        self.entities(dimension)
            .iter()
            .enumerate()
            .flat_map(|(i, entity)| {
                entity.related_right().iter().map(move |&j| {
                    EdgeKey::new(EntityId::new(dimension, i), EntityId::new(right, j))
                })
            })
            .collect()
    }

    /// All edges, grouped by column pair in column order
    pub fn edges(&self) -> Vec<EdgeKey> {
        Dimension::ALL
            .iter()
            .flat_map(|&dimension| self.edges_from(dimension))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.lists
            .iter()
            .flat_map(|list| list.iter())
            .map(|entity| entity.related_right().len())
            .sum()
    }

    /// Longest list among `dimensions`
    pub fn max_len(&self, dimensions: &[Dimension]) -> usize {
        dimensions.iter().map(|&d| self.len(d)).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dimension: Dimension, label: &str, papers: &[usize]) -> EntityRecord {
        let mut record = EntityRecord::new(dimension, label);
        for &p in papers {
            record.add_paper(p);
        }
        record
    }

    #[test]
    fn test_from_lists_sorts() {
        let graph = EntityGraph::from_lists([
            vec![record(Dimension::Group, "b", &[0]), record(Dimension::Group, "B", &[1])],
            vec![],
            vec![record(Dimension::Year, "2021", &[0]), record(Dimension::Year, "2019", &[1])],
            vec![],
        ]);
        let groups: Vec<&str> = graph.entities(Dimension::Group).iter().map(|e| e.label.as_str()).collect();
        assert_eq!(groups, vec!["B", "b"]);
        assert_eq!(graph.entities(Dimension::Year)[0].label, "2019");
        assert_eq!(graph.total_entities(), 4);
        assert_eq!(graph.max_len(&Dimension::ALL), 2);
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_find_and_get() {
        let graph = EntityGraph::from_lists([
            vec![],
            vec![],
            vec![],
            vec![
                record(Dimension::Author, "C", &[2]),
                record(Dimension::Author, "A", &[0]),
            ],
        ]);
        let id = graph.find(Dimension::Author, "C").unwrap();
        assert_eq!(id, EntityId::new(Dimension::Author, 1));
        assert_eq!(graph.get(id).unwrap().paper_indices(), &[2]);
        assert!(graph.find(Dimension::Author, "B").is_none());
        assert!(graph.get(EntityId::new(Dimension::Group, 0)).is_none());
    }

    #[test]
    fn test_empty_graph() {
        let graph = EntityGraph::new();
        assert!(graph.is_empty());
        assert!(graph.edges().is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.max_len(&[]), 0);
    }
}
