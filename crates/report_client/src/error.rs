//! Errors that abort a client run.

use std::io;
use std::path::PathBuf;

/// Fatal client failures. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("No file at {}", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read data file path: {0}")]
    Prompt(#[source] io::Error),

    #[error("Unable to determine {what}: {source}")]
    Environment {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}
