//! Paper detail panel
//!
//! Clicking a box lists the papers behind it. The panel is a collaborator:
//! the engine only clears it, pushes summaries in order and asks for it to be
//! scrolled into view.

use crate::data::PaperRecord;
use serde::Serialize;

/// What the panel shows for one paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperSummary {
    pub paper_index: usize,
    pub title: String,
    /// `year · author, author`
    pub byline: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl PaperSummary {
    pub fn from_paper(paper_index: usize, paper: &PaperRecord) -> Self {
        let authors = match paper.authors() {
            Ok(names) => names.join(", "),
            Err(_) => paper.authors_raw.trim().to_string(),
        };
        let year = paper.year().unwrap_or("n.d.");
        let byline = if authors.is_empty() {
            year.to_string()
        } else {
            format!("{} · {}", year, authors)
        };

        PaperSummary {
            paper_index,
            title: paper.title.trim().to_string(),
            byline,
            abstract_text: paper.abstract_text.trim().to_string(),
        }
    }
}

pub trait PaperDetailPanel {
    fn clear(&mut self);
    fn show(&mut self, summary: &PaperSummary);
    fn scroll_into_view(&mut self) {}
}

/// In-memory panel; the visualizer serializes it for the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailPanel {
    pub summaries: Vec<PaperSummary>,
    /// Set once a non-empty selection asked to be scrolled into view
    pub scrolled: bool,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl PaperDetailPanel for DetailPanel {
    fn clear(&mut self) {
        self.summaries.clear();
        self.scrolled = false;
    }

    fn show(&mut self, summary: &PaperSummary) {
        self.summaries.push(summary.clone());
    }

    fn scroll_into_view(&mut self) {
        self.scrolled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(authors: &str, year: &str) -> PaperRecord {
        PaperRecord {
            title: " Deep Cuts ".to_string(),
            abstract_text: "We cut deeply.".to_string(),
            authors_raw: authors.to_string(),
            year: year.to_string(),
            labels_raw: String::new(),
        }
    }

    #[test]
    fn test_summary_fields() {
        let summary = PaperSummary::from_paper(4, &paper("['A. Smith', 'B. Lee']", "2021"));
        assert_eq!(summary.paper_index, 4);
        assert_eq!(summary.title, "Deep Cuts");
        assert_eq!(summary.byline, "2021 · A. Smith, B. Lee");
        assert_eq!(summary.abstract_text, "We cut deeply.");
    }

    #[test]
    fn test_summary_fallbacks() {
        let summary = PaperSummary::from_paper(0, &paper("A. Smith", ""));
        assert_eq!(summary.byline, "n.d. · A. Smith");

        let summary = PaperSummary::from_paper(0, &paper("[]", "2020"));
        assert_eq!(summary.byline, "2020");
    }

    #[test]
    fn test_panel_clear_resets_scroll() {
        let mut panel = DetailPanel::new();
        panel.show(&PaperSummary::from_paper(0, &paper("[]", "2020")));
        panel.scroll_into_view();
        assert!(panel.scrolled);
        panel.clear();
        assert!(panel.is_empty());
        assert!(!panel.scrolled);
    }
}
