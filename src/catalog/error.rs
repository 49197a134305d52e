//! Catalog-specific error types
//!
//! These errors can only occur while *loading* a catalog from a source. Once a
//! `CountryCatalog` exists, every lookup on it is infallible.
//!
//! # Error Types
//!
//! - **`Io`**: The source file could not be read
//! - **`Decode`**: The source content is not a valid list of country records
//! - **`Unavailable`**: The source could not produce data for another reason

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON could not be decoded
    #[error("Failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),

    /// Source has nothing to offer (not configured, offline, ...)
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
