//! Source data: the taxonomy and paper tables
//!
//! - `store`: loading both CSV tables and indexed lookup by row number
//! - `record`: paper and taxonomy rows
//! - `authors`: strict parser for the serialized author list literal

pub mod authors;
pub mod record;
pub mod store;

pub use authors::{parse_author_list, AuthorParseError};
pub use record::{PaperRecord, TaxonomyRow};
pub use store::PaperStore;
