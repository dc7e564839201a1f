//! Entity graph
//!
//! This module implements the cross-referenced entity model:
//! - Four fixed dimensions in column order: group, category, year, author
//! - Entity records holding the papers that reference them
//! - Bidirectional adjacency between neighbouring dimensions, derived from
//!   shared paper membership

pub mod entity;
pub mod extract;
pub mod relation;
pub mod store;
pub mod types;

// Re-export main types
pub use entity::EntityRecord;
pub use extract::{EntityExtractor, Extraction, TitleEntry};
pub use relation::build_relations;
pub use store::EntityGraph;
pub use types::{BoxId, Dimension, EdgeKey, EntityId};
