//! Configuration for loading, extraction, layout and the visualizer server
//!
//! Every section has defaults matching the reference dataset layout, so an
//! empty YAML document (or no file at all) yields a working configuration.

use crate::error::{VizError, VizResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub data: DataConfig,
    pub extraction: ExtractionConfig,
    pub layout: LayoutConfig,
    pub server: ServerConfig,
}

impl VizConfig {
    pub fn from_yaml_str(yaml: &str) -> VizResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> VizResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| VizError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

/// Locations of the two source tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Taxonomy table with `Category` and `Subcategory` columns
    pub categories_path: PathBuf,
    /// Paper table
    pub papers_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            categories_path: PathBuf::from("resources/data/categories.csv"),
            papers_path: PathBuf::from("resources/data/ndi_papers.csv"),
        }
    }
}

/// Entity extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Delimiter inside `Labels filed in`
    pub label_delimiter: char,
    /// Administrative labels that are not real categories
    pub excluded_labels: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            label_delimiter: ';',
            excluded_labels: vec![
                "NDI".to_string(),
                "To Summarize".to_string(),
                "Image Segmentation".to_string(),
            ],
        }
    }
}

impl ExtractionConfig {
    pub fn is_excluded(&self, token: &str) -> bool {
        self.excluded_labels.iter().any(|label| label == token)
    }
}

/// Diagram geometry and highlight styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Total canvas width
    pub width: f64,
    /// Column start as a fraction of `width`, one per dimension
    pub column_fractions: [f64; 4],
    /// Added to every column start
    pub column_padding: f64,
    pub box_width: f64,
    pub box_height: f64,
    /// Vertical distance between rows
    pub row_pitch: f64,
    /// Offset of row 0's predecessor; row `i` sits at `top_margin + (i + 1) * row_pitch`
    pub top_margin: f64,
    /// Label position inside a box
    pub text_offset_x: f64,
    pub text_offset_y: f64,
    /// Edge anchor below the top of a box
    pub edge_offset_y: f64,
    /// Baseline of the column headers
    pub header_y: f64,
    /// Extra height below the longest column
    pub canvas_padding: f64,
    /// Draw the author column and its edges
    pub show_authors: bool,
    pub dimmed_box_opacity: f64,
    pub dimmed_edge_opacity: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            column_fractions: [0.0, 0.27, 0.54, 0.80],
            column_padding: 10.0,
            box_width: 250.0,
            box_height: 15.0,
            row_pitch: 20.0,
            top_margin: 10.0,
            text_offset_x: 5.0,
            text_offset_y: 12.0,
            edge_offset_y: 5.0,
            header_y: 12.0,
            canvas_padding: 40.0,
            show_authors: true,
            dimmed_box_opacity: 0.1,
            dimmed_edge_opacity: 0.05,
        }
    }
}

/// Visualizer HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(VizConfig::from_yaml_str("").unwrap(), VizConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
data:
  papers_path: /tmp/papers.csv
extraction:
  excluded_labels: [NDI]
layout:
  width: 900
  show_authors: false
server:
  port: 9000
"#;
        let config = VizConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.data.papers_path, PathBuf::from("/tmp/papers.csv"));
        assert_eq!(
            config.data.categories_path,
            PathBuf::from("resources/data/categories.csv")
        );
        assert_eq!(config.extraction.excluded_labels, vec!["NDI".to_string()]);
        assert_eq!(config.extraction.label_delimiter, ';');
        assert_eq!(config.layout.width, 900.0);
        assert!(!config.layout.show_authors);
        assert_eq!(config.layout.row_pitch, 20.0);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address, "127.0.0.1");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = VizConfig::from_yaml_str("layout: [1, 2").unwrap_err();
        assert!(matches!(err, VizError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = VizConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, VizError::ConfigIo { .. }));
    }

    #[test]
    fn test_default_exclusions() {
        let extraction = ExtractionConfig::default();
        assert!(extraction.is_excluded("NDI"));
        assert!(extraction.is_excluded("To Summarize"));
        assert!(extraction.is_excluded("Image Segmentation"));
        assert!(!extraction.is_excluded("Segmentation"));
    }
}
