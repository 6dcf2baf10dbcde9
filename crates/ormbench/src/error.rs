//! Benchmark error types.

use thiserror::Error;

/// Errors raised while running the benchmark suite.
#[derive(Debug, Error)]
pub enum Error {
    /// Database layer error.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Report file I/O error.
    #[error("report error: {0}")]
    Report(#[from] std::io::Error),

    /// Configuration rejected before the run started.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias for benchmark operations.
pub type Result<T> = std::result::Result<T, Error>;
