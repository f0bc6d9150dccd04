use std::path::PathBuf;

use kbcase_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("could not read KLE file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("KLE root must be an array")]
    Root,

    #[error("invalid KLE metadata: {0}")]
    Metadata(#[source] serde_json::Error),

    #[error("invalid KLE row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("metadata object at position {index}; only the first element may be metadata")]
    MisplacedMetadata { index: usize },

    #[error("row {row}: two modifier objects in a row before key {col}")]
    ConsecutiveModifiers { row: usize, col: usize },

    #[error("row {row}: modifier object is not followed by a key")]
    DanglingModifier { row: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
