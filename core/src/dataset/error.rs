//! Error types for dataset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading the chart dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset JSON")]
    Parse(#[from] serde_json::Error),

    #[error("failed to parse dataset JSON in {path}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
