//! Entity extraction
//!
//! One pass over the paper store derives the four dimension lists. Label
//! tokens are resolved against the taxonomy by substring match on the
//! subcategory; the first matching taxonomy row wins.

use super::entity::EntityRecord;
use super::store::EntityGraph;
use super::types::Dimension;
use crate::config::ExtractionConfig;
use crate::data::PaperStore;
use crate::error::ExtractionWarning;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

/// A paper title with its row index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleEntry {
    pub title: String,
    pub paper_index: usize,
}

/// Output of one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Sorted dimension lists, relations not yet built
    pub graph: EntityGraph,
    /// Paper titles, sorted
    pub titles: Vec<TitleEntry>,
    /// Per-paper problems that were skipped
    pub warnings: Vec<ExtractionWarning>,
}

/// Accumulates entities per dimension, keyed by label
#[derive(Default)]
struct Accumulator {
    lists: [IndexMap<String, EntityRecord>; 4],
}

impl Accumulator {
    fn insert(&mut self, dimension: Dimension, label: &str, paper: usize) {
        self.lists[dimension.column()]
            .entry(label.to_string())
            .or_insert_with(|| EntityRecord::new(dimension, label))
            .add_paper(paper);
    }

    fn into_graph(self) -> EntityGraph {
        EntityGraph::from_lists(
            self.lists
                .map(|list| list.into_values().collect::<Vec<_>>()),
        )
    }
}

/// Derives the entity dimensions from a paper store
pub struct EntityExtractor<'a> {
    config: &'a ExtractionConfig,
}

impl<'a> EntityExtractor<'a> {
    pub fn new(config: &'a ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn extract(&self, store: &PaperStore) -> Extraction {
        let mut acc = Accumulator::default();
        let mut titles = Vec::with_capacity(store.len());
        let mut warnings = Vec::new();

        for (index, paper) in store.papers().iter().enumerate() {
            for token in paper.labels(self.config.label_delimiter) {
                if self.config.is_excluded(token) {
                    continue;
                }
                match store.resolve_label(token) {
                    Some(row) => {
                        acc.insert(Dimension::Group, &row.category, index);
                        acc.insert(Dimension::Category, &row.subcategory, index);
                    }
                    None => {
                        let warning = ExtractionWarning::UnresolvedLabel {
                            paper: index,
                            token: token.to_string(),
                        };
                        warn!("{}", warning);
                        warnings.push(warning);
                    }
                }
            }

            match paper.authors() {
                Ok(authors) => {
                    for author in &authors {
                        acc.insert(Dimension::Author, author, index);
                    }
                }
                Err(e) => {
                    let warning = ExtractionWarning::MalformedAuthorField {
                        paper: index,
                        raw: paper.authors_raw.clone(),
                        reason: e.reason(),
                    };
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }

            acc.insert(Dimension::Year, paper.year_label(), index);

            titles.push(TitleEntry {
                title: paper.title.trim().to_string(),
                paper_index: index,
            });
        }

        titles.sort_by(|a, b| a.title.cmp(&b.title));
        let graph = acc.into_graph();

        for dimension in Dimension::ALL {
            debug!("{} {} entities", graph.len(dimension), dimension);
        }
        info!(
            "Extracted {} entities from {} papers ({} warnings)",
            graph.total_entities(),
            store.len(),
            warnings.len()
        );

        Extraction {
            graph,
            titles,
            warnings,
        }
    }
}
