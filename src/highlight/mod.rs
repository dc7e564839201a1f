//! Interactive highlighting and paper details

pub mod detail;
pub mod engine;

pub use detail::{DetailPanel, PaperDetailPanel, PaperSummary};
pub use engine::{HighlightEngine, HoverState};
