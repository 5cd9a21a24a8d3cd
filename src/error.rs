//! Crate-level error types.
//!
//! [`WalletError`] covers the only fallible parts of the crate: loading
//! configuration and reading the balance/price source files. The balance
//! pipeline itself never fails.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Top-level error type returned by all fallible public APIs.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Configuration values were present but unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
