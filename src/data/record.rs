//! Rows of the two source tables

use super::authors::{parse_author_list, AuthorParseError};
use serde::{Deserialize, Serialize};

/// One row of the paper table.
///
/// Identity is the row index in the loaded table; the record itself does not
/// store it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Serialized author list literal, as found in the source
    pub authors_raw: String,
    /// Publication year, verbatim
    pub year: String,
    /// Raw `Labels filed in` field
    pub labels_raw: String,
}

impl PaperRecord {
    /// Label tokens split on `delimiter`, trimmed, empties skipped
    pub fn labels(&self, delimiter: char) -> impl Iterator<Item = &str> {
        self.labels_raw
            .trim()
            .split(delimiter)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Parse the author field
    pub fn authors(&self) -> Result<Vec<String>, AuthorParseError> {
        parse_author_list(&self.authors_raw)
    }

    /// Trimmed year, `None` when blank
    pub fn year(&self) -> Option<&str> {
        let year = self.year_label();
        (!year.is_empty()).then_some(year)
    }

    /// Year column label: the trimmed field, blank included
    pub fn year_label(&self) -> &str {
        self.year.trim()
    }
}

/// Maps a label token to a (Category, Subcategory) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRow {
    pub category: String,
    pub subcategory: String,
}

impl TaxonomyRow {
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        TaxonomyRow {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }

    /// Fuzzy match: the subcategory contains the token as a substring
    pub fn matches(&self, token: &str) -> bool {
        self.subcategory.contains(token)
    }
}
