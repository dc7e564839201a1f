//! Visualization controller
//!
//! Owns every piece of session state: the loaded tables, the derived entity
//! graph, the drawn scene, the hover focus and the detail panel. Host glue
//! (the HTTP visualizer, the CLI) drives it through `rebuild`, `render` and
//! the pointer entry points.

use crate::config::VizConfig;
use crate::data::PaperStore;
use crate::error::{ExtractionWarning, HighlightResult, VizResult};
use crate::graph::{build_relations, BoxId, Dimension, EntityExtractor, EntityGraph, EntityId, Extraction, TitleEntry};
use crate::highlight::{DetailPanel, HighlightEngine, HoverState, PaperDetailPanel};
use crate::render::{render_graph, Layout, RenderSurface, Scene, SvgSurface};
use tracing::info;

/// Everything one session holds
#[derive(Debug, Clone)]
pub struct VisualizationState {
    pub store: PaperStore,
    pub extraction: Extraction,
    pub scene: Scene,
    pub highlight: HighlightEngine,
    pub detail: DetailPanel,
}

#[derive(Debug, Clone)]
pub struct Visualization {
    config: VizConfig,
    layout: Layout,
    state: VisualizationState,
}

impl Visualization {
    /// Load both tables, then build and draw
    pub async fn load(config: VizConfig) -> VizResult<Self> {
        let store = PaperStore::load(&config.data).await?;
        Ok(Self::from_store(config, store))
    }

    pub fn from_store(config: VizConfig, store: PaperStore) -> Self {
        let layout = Layout::new(config.layout.clone());
        let highlight = HighlightEngine::new(&config.layout);
        let mut viz = Visualization {
            config,
            layout,
            state: VisualizationState {
                store,
                extraction: Extraction::default(),
                scene: Scene::new(),
                highlight,
                detail: DetailPanel::new(),
            },
        };
        viz.rebuild();
        viz.render();
        viz
    }

    /// Re-run extraction and relation building over the loaded tables
    pub fn rebuild(&mut self) {
        let mut extraction = EntityExtractor::new(&self.config.extraction).extract(&self.state.store);
        let edges = build_relations(&mut extraction.graph);
        info!(
            "Built entity graph: {} entities, {} relations",
            extraction.graph.total_entities(),
            edges
        );
        self.state.extraction = extraction;
    }

    /// Clear and redraw the scene; the hover focus and the panel are reset
    pub fn render(&mut self) {
        render_graph(&self.state.extraction.graph, &self.layout, &mut self.state.scene);
        self.state.highlight.clear();
        self.state.detail.clear();
    }

    /// Draw the current graph onto another surface
    pub fn render_to<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        render_graph(&self.state.extraction.graph, &self.layout, surface);
    }

    /// SVG of the current scene, including highlight state
    pub fn svg(&self) -> String {
        let mut surface = SvgSurface::styled(&self.state.scene);
        self.render_to(&mut surface);
        surface.into_string()
    }

    /// Author column toggle; triggers a full redraw
    pub fn set_show_authors(&mut self, show: bool) {
        self.layout.set_show_authors(show);
        self.config.layout.show_authors = show;
        self.rebuild();
        self.render();
    }

    /// Reset control: full redraw with the current settings
    pub fn reset(&mut self) {
        self.rebuild();
        self.render();
    }

    pub fn pointer_enter(&mut self, id: BoxId) -> HighlightResult<()> {
        let state = &mut self.state;
        state
            .highlight
            .pointer_enter(&state.extraction.graph, &mut state.scene, id)
    }

    pub fn pointer_leave(&mut self) {
        let state = &mut self.state;
        state.highlight.pointer_leave(&mut state.scene);
    }

    /// Click on box `id`, filling the session's own detail panel
    pub fn click(&mut self, id: BoxId) -> HighlightResult<&DetailPanel> {
        let state = &mut self.state;
        state
            .highlight
            .click(&state.store, &state.scene, id, &mut state.detail)?;
        Ok(&state.detail)
    }

    /// Click on box `id`, filling an external panel
    pub fn click_into(&self, id: BoxId, panel: &mut dyn PaperDetailPanel) -> HighlightResult<usize> {
        let state = &self.state;
        state.highlight.click(&state.store, &state.scene, id, panel)
    }

    /// Resolve a label to a box id
    pub fn find(&self, dimension: Dimension, label: &str) -> Option<EntityId> {
        self.graph().find(dimension, label)
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &VisualizationState {
        &self.state
    }

    pub fn store(&self) -> &PaperStore {
        &self.state.store
    }

    pub fn graph(&self) -> &EntityGraph {
        &self.state.extraction.graph
    }

    pub fn titles(&self) -> &[TitleEntry] {
        &self.state.extraction.titles
    }

    pub fn warnings(&self) -> &[ExtractionWarning] {
        &self.state.extraction.warnings
    }

    pub fn scene(&self) -> &Scene {
        &self.state.scene
    }

    pub fn hover_state(&self) -> HoverState {
        self.state.highlight.state()
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.state.detail
    }
}
