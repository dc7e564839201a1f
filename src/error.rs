//! Error types shared across the crate

use crate::graph::EntityId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort loading or configuration
#[derive(Error, Debug)]
pub enum VizError {
    #[error("Failed to read {path}: {source}")]
    DataLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type VizResult<T> = Result<T, VizError>;

/// Recoverable per-paper problems found during extraction
#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionWarning {
    #[error("Paper {paper}: label '{token}' matches no taxonomy subcategory")]
    UnresolvedLabel { paper: usize, token: String },

    #[error("Paper {paper}: malformed author field {raw:?} ({reason})")]
    MalformedAuthorField {
        paper: usize,
        raw: String,
        reason: String,
    },
}

impl ExtractionWarning {
    pub fn paper(&self) -> usize {
        match self {
            ExtractionWarning::UnresolvedLabel { paper, .. } => *paper,
            ExtractionWarning::MalformedAuthorField { paper, .. } => *paper,
        }
    }
}

/// Errors raised by pointer interaction
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightError {
    #[error("No rendered box for {0}")]
    UnknownBox(EntityId),
}

pub type HighlightResult<T> = Result<T, HighlightError>;
