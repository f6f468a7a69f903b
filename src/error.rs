//! Error types, split by recovery behavior: store and remote failures stay
//! inside the pipeline, setup failures terminate the run.

use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the local metadata snapshot. A missing row is not an
/// error; lookups return `Option<NodeRecord>`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open store {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    #[error("store query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

/// A failed remote rename attempt. The driver treats every variant as
/// retryable up to the attempt ceiling; no cause taxonomy is kept.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service rejected rename: {0}")]
    Rejected(String),
}

/// Fatal setup failures. Nothing here is retried; the process exits non-zero.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read id list {path}: {source}")]
    IdList {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read credential file {path}: {source}")]
    Credentials {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write output file {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to build remote client: {0}")]
    Client(reqwest::Error),
}
