//! Relation graph construction
//!
//! For each adjacent pair of dimensions, two entities are related iff their
//! paper index sets intersect. The relation is recorded on both records.
//! Non-adjacent dimensions are never linked directly.

use super::store::EntityGraph;
use super::types::Dimension;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Populate bidirectional adjacency for group–category, category–year and
/// year–author, in that order.
///
/// Existing relations are cleared first, so rebuilding is idempotent.
/// Returns the number of edges recorded.
pub fn build_relations(graph: &mut EntityGraph) -> usize {
    for dimension in Dimension::ALL {
        for entity in graph.entities_mut(dimension) {
            entity.clear_relations();
        }
    }

    let mut total = 0;
    for left in Dimension::ALL {
        let Some(right) = left.right() else {
            continue;
        };
        let pairs = intersecting_pairs(graph, left, right);
        for &(i, j) in &pairs {
            graph.entities_mut(left)[i].add_related(right, j);
            graph.entities_mut(right)[j].add_related(left, i);
        }
        debug!("{} {}-{} relations", pairs.len(), left, right);
        total += pairs.len();
    }
    total
}

/// Index pairs `(i, j)` whose paper sets intersect, in discovery order
fn intersecting_pairs(graph: &EntityGraph, left: Dimension, right: Dimension) -> Vec<(usize, usize)> {
    let rights = graph.entities(right);
    let mut pairs = Vec::new();

    for (i, a) in graph.entities(left).iter().enumerate() {
        let papers: FxHashSet<usize> = a.paper_indices().iter().copied().collect();
        for (j, b) in rights.iter().enumerate() {
            if b.paper_indices().iter().any(|p| papers.contains(p)) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
