//! Paper store: the two source tables as loaded
//!
//! Both tables are fetched concurrently; extraction does not start until both
//! have been read and parsed. Either failure aborts the load.

use super::record::{PaperRecord, TaxonomyRow};
use crate::config::DataConfig;
use crate::error::{VizError, VizResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CATEGORY_COLUMN: &str = "Category";
pub const SUBCATEGORY_COLUMN: &str = "Subcategory";
pub const LABELS_COLUMN: &str = "Labels filed in";
pub const AUTHORS_COLUMN: &str = "Authors";
pub const TITLE_COLUMN: &str = "Title";
pub const ABSTRACT_COLUMN: &str = "Abstract";
pub const YEAR_COLUMN: &str = "Publication year";

/// Raw rows of the taxonomy and paper tables, indexed by row number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaperStore {
    taxonomy: Vec<TaxonomyRow>,
    papers: Vec<PaperRecord>,
}

impl PaperStore {
    pub fn new(taxonomy: Vec<TaxonomyRow>, papers: Vec<PaperRecord>) -> Self {
        PaperStore { taxonomy, papers }
    }

    /// Read and parse both tables concurrently
    pub async fn load(config: &DataConfig) -> VizResult<Self> {
        let (categories, papers) = tokio::try_join!(
            read_source(&config.categories_path),
            read_source(&config.papers_path),
        )?;

        let taxonomy = parse_taxonomy(&config.categories_path, &categories)?;
        let papers = parse_papers(&config.papers_path, &papers)?;

        info!(
            "Loaded {} taxonomy rows and {} papers",
            taxonomy.len(),
            papers.len()
        );
        Ok(Self::new(taxonomy, papers))
    }

    /// Parse both tables from in-memory CSV text
    pub fn from_csv(categories: &str, papers: &str) -> VizResult<Self> {
        let source = PathBuf::from("<memory>");
        Ok(Self::new(
            parse_taxonomy(&source, categories)?,
            parse_papers(&source, papers)?,
        ))
    }

    pub fn get(&self, index: usize) -> Option<&PaperRecord> {
        self.papers.get(index)
    }

    pub fn papers(&self) -> &[PaperRecord] {
        &self.papers
    }

    pub fn taxonomy(&self) -> &[TaxonomyRow] {
        &self.taxonomy
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// First taxonomy row whose subcategory contains `token`
    pub fn resolve_label(&self, token: &str) -> Option<&TaxonomyRow> {
        self.taxonomy.iter().find(|row| row.matches(token))
    }
}

async fn read_source(path: &Path) -> VizResult<String> {
    debug!("Reading {:?}", path);
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| VizError::DataLoad {
            path: path.to_path_buf(),
            source,
        })
}

struct Columns {
    headers: csv::StringRecord,
}

impl Columns {
    fn new(reader: &mut csv::Reader<&[u8]>, path: &Path) -> VizResult<Self> {
        let headers = reader.headers().map_err(|source| VizError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Columns {
            headers: headers.clone(),
        })
    }

    fn position(&self, column: &str, path: &Path) -> VizResult<usize> {
        self.headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
            .ok_or_else(|| VizError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })
    }
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes())
}

fn field(record: &csv::StringRecord, pos: usize) -> String {
    record.get(pos).unwrap_or("").to_string()
}

/// Parse the taxonomy table
pub fn parse_taxonomy(path: &Path, text: &str) -> VizResult<Vec<TaxonomyRow>> {
    let mut reader = reader(text);
    let columns = Columns::new(&mut reader, path)?;
    let category = columns.position(CATEGORY_COLUMN, path)?;
    let subcategory = columns.position(SUBCATEGORY_COLUMN, path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| VizError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(TaxonomyRow {
            category: field(&record, category).trim().to_string(),
            subcategory: field(&record, subcategory).trim().to_string(),
        });
    }
    Ok(rows)
}

/// Parse the paper table; row order defines paper identity
pub fn parse_papers(path: &Path, text: &str) -> VizResult<Vec<PaperRecord>> {
    let mut reader = reader(text);
    let columns = Columns::new(&mut reader, path)?;
    let labels = columns.position(LABELS_COLUMN, path)?;
    let authors = columns.position(AUTHORS_COLUMN, path)?;
    let title = columns.position(TITLE_COLUMN, path)?;
    let abstract_text = columns.position(ABSTRACT_COLUMN, path)?;
    let year = columns.position(YEAR_COLUMN, path)?;

    let mut papers = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| VizError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        papers.push(PaperRecord {
            title: field(&record, title),
            abstract_text: field(&record, abstract_text),
            authors_raw: field(&record, authors),
            year: field(&record, year),
            labels_raw: field(&record, labels),
        });
    }
    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: &str = "Category,Subcategory\nVision,Segmentation\nVision,Tracking\nLanguage,Parsing\n";
    const PAPERS: &str = "Title,Authors,Publication year,Labels filed in,Abstract,Extra\n\
        Paper A,\"['A. Smith', 'B. Lee']\",2021,Segmentation;NDI,First abstract,x\n\
        Paper B,\"['C. Wu']\",2020,Parsing,\"Second, with comma\",y\n";

    #[test]
    fn test_from_csv() {
        let store = PaperStore::from_csv(CATEGORIES, PAPERS).unwrap();
        assert_eq!(store.taxonomy().len(), 3);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());

        let paper = store.get(1).unwrap();
        assert_eq!(paper.title, "Paper B");
        assert_eq!(paper.abstract_text, "Second, with comma");
        assert_eq!(paper.year, "2020");
        assert_eq!(paper.authors().unwrap(), vec!["C. Wu"]);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let categories = "Category,Subcategory\nA,Object Tracking\nB,Tracking\n";
        let store = PaperStore::from_csv(categories, PAPERS).unwrap();
        assert_eq!(store.resolve_label("Tracking").unwrap().category, "A");
        assert!(store.resolve_label("Xyz").is_none());
    }

    #[test]
    fn test_missing_column() {
        let err = PaperStore::from_csv("Category,Sub\nA,B\n", PAPERS).unwrap_err();
        match err {
            VizError::MissingColumn { column, .. } => assert_eq!(column, SUBCATEGORY_COLUMN),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bom_header() {
        let categories = "\u{feff}Category,Subcategory\nVision,Segmentation\n";
        let store = PaperStore::from_csv(categories, PAPERS).unwrap();
        assert_eq!(store.taxonomy()[0].category, "Vision");
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let categories_path = dir.path().join("categories.csv");
        std::fs::write(&categories_path, CATEGORIES).unwrap();

        let config = DataConfig {
            categories_path,
            papers_path: dir.path().join("missing.csv"),
        };
        let err = PaperStore::load(&config).await.unwrap_err();
        match err {
            VizError::DataLoad { path, .. } => assert!(path.ends_with("missing.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_load_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataConfig {
            categories_path: dir.path().join("categories.csv"),
            papers_path: dir.path().join("papers.csv"),
        };
        std::fs::write(&config.categories_path, CATEGORIES).unwrap();
        std::fs::write(&config.papers_path, PAPERS).unwrap();

        let store = PaperStore::load(&config).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.taxonomy()[2].subcategory, "Parsing");
    }
}
