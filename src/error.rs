//! Error types for the I/O boundary. The detection core never fails.

use std::path::PathBuf;

/// Failure to retrieve one commit's changed files.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("commit id '{0}' is not a hex object id")]
    InvalidId(String),

    #[error("commit '{sha}' not found at {path}")]
    NotFound { sha: String, path: PathBuf },

    #[error("commit '{sha}' details are malformed: {source}")]
    Malformed {
        sha: String,
        source: serde_json::Error,
    },

    #[error("reading commit '{sha}' failed: {source}")]
    Io { sha: String, source: std::io::Error },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("push event {path} is not valid JSON: {source}")]
    InvalidEvent {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("pattern '{0}' matched no files")]
    NoMatches(String),
}
