//! Error types for chain data sources

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Data source not ready: {reason}")]
    NotReady { reason: String },

    #[error("Failed to read replay file {path}: {source}")]
    ReplayRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse replay file: {0}")]
    ReplayParse(#[from] serde_json::Error),
}
