//! Hover highlighting
//!
//! Two states: `Idle` (everything at full opacity) and `Focused(box)`.
//! Entering a box dims the whole scene, then walks the relation graph
//! leftward and rightward from the focused box, emphasizing each box reached
//! and the edges touching it. The dimension order is a chain of four, so
//! each walk is at most three hops deep.

use super::detail::{PaperDetailPanel, PaperSummary};
use crate::config::LayoutConfig;
use crate::data::PaperStore;
use crate::error::{HighlightError, HighlightResult};
use crate::graph::{BoxId, Dimension, EntityGraph};
use crate::render::Scene;
use serde::Serialize;
use tracing::debug;

/// Hover focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "box", rename_all = "lowercase")]
pub enum HoverState {
    Idle,
    Focused(BoxId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    fn next(self, dimension: Dimension) -> Option<Dimension> {
        match self {
            Direction::Left => dimension.left(),
            Direction::Right => dimension.right(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HighlightEngine {
    state: HoverState,
    dimmed_box_opacity: f64,
    dimmed_edge_opacity: f64,
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl HighlightEngine {
    pub fn new(config: &LayoutConfig) -> Self {
        HighlightEngine {
            state: HoverState::Idle,
            dimmed_box_opacity: config.dimmed_box_opacity,
            dimmed_edge_opacity: config.dimmed_edge_opacity,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Pointer entered box `id`.
    ///
    /// Unknown boxes leave both the state and the scene untouched.
    pub fn pointer_enter(&mut self, graph: &EntityGraph, scene: &mut Scene, id: BoxId) -> HighlightResult<()> {
        if !scene.contains_box(id) {
            return Err(HighlightError::UnknownBox(id));
        }

        scene.dim_all(self.dimmed_box_opacity, self.dimmed_edge_opacity);
        self.walk(graph, scene, id, Direction::Left);
        self.walk(graph, scene, id, Direction::Right);
        self.state = HoverState::Focused(id);

        debug!(
            "Focused {}: {} boxes, {} edges lit",
            id,
            scene.emphasized_boxes().len(),
            scene.lit_edges().len()
        );
        Ok(())
    }

    /// Pointer left the focused box: back to the idle baseline
    pub fn pointer_leave(&mut self, scene: &mut Scene) {
        scene.reset();
        self.state = HoverState::Idle;
    }

    /// Forget the focus without touching a scene, used after a redraw
    pub fn clear(&mut self) {
        self.state = HoverState::Idle;
    }

    fn walk(&self, graph: &EntityGraph, scene: &mut Scene, id: BoxId, direction: Direction) {
        scene.emphasize_edges_of(id);
        scene.emphasize_box(id);

        let Some(next) = direction.next(id.dimension) else {
            return;
        };
        if !scene.has_column(next) {
            return;
        }
        for related in graph.related(id, next) {
            self.walk(graph, scene, related, direction);
        }
    }

    /// Show the papers behind box `id` in `panel`.
    ///
    /// The panel is always cleared first; an empty selection leaves it empty.
    /// Returns the number of papers shown. The hover state is not changed.
    pub fn click(
        &self,
        store: &PaperStore,
        scene: &Scene,
        id: BoxId,
        panel: &mut dyn PaperDetailPanel,
    ) -> HighlightResult<usize> {
        let target = scene.get_box(id).ok_or(HighlightError::UnknownBox(id))?;

        panel.clear();
        let mut shown = 0;
        for &index in &target.paper_indices {
            if let Some(paper) = store.get(index) {
                panel.show(&PaperSummary::from_paper(index, paper));
                shown += 1;
            }
        }
        if shown > 0 {
            panel.scroll_into_view();
        }
        Ok(shown)
    }
}
