//! Paper Alluvial
//!
//! An interactive cross-reference diagram of an annotated paper index. Papers
//! are grouped along four dimensions (group, category, year, author) drawn as
//! columns of labelled boxes; curved links join boxes in adjacent columns that
//! share at least one paper. Hovering a box highlights everything reachable
//! from it, clicking a box lists the papers behind it.
//!
//! # Architecture
//!
//! - `data`: CSV loading into the paper store, author list parsing
//! - `graph`: entity extraction and the adjacency relations between columns
//! - `render`: layout geometry, the retained scene and SVG output
//! - `highlight`: the hover state machine and the detail panel
//! - `visualization`: the session controller tying them together
//! - `http`: the axum visualizer serving the page and a JSON API
//!
//! ## Example Usage
//!
//! ```rust
//! use paper_alluvial::{Dimension, PaperStore, Visualization, VizConfig};
//!
//! let store = PaperStore::from_csv(
//!     "Category,Subcategory\nVision,Segmentation\n",
//!     "Title,Abstract,Authors,Publication year,Labels filed in\n\
//!      Cuts,Abs,\"['A. Smith']\",2021,Segmentation\n",
//! )
//! .unwrap();
//! let mut viz = Visualization::from_store(VizConfig::default(), store);
//!
//! let year = viz.find(Dimension::Year, "2021").unwrap();
//! viz.pointer_enter(year).unwrap();
//! assert_eq!(viz.scene().emphasized_boxes().len(), 4);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod highlight;
pub mod http;
pub mod render;
pub mod visualization;

// Re-export main types for convenience
pub use config::{DataConfig, ExtractionConfig, LayoutConfig, ServerConfig, VizConfig};

pub use error::{ExtractionWarning, HighlightError, HighlightResult, VizError, VizResult};

pub use data::{parse_author_list, AuthorParseError, PaperRecord, PaperStore, TaxonomyRow};

pub use graph::{
    build_relations, BoxId, Dimension, EdgeKey, EntityExtractor, EntityGraph, EntityId,
    EntityRecord, Extraction, TitleEntry,
};

pub use render::{Layout, RenderSurface, Scene, SvgSurface};

pub use highlight::{DetailPanel, HighlightEngine, HoverState, PaperDetailPanel, PaperSummary};

pub use visualization::{Visualization, VisualizationState};

pub use http::HttpServer;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.3.0");
    }
}
