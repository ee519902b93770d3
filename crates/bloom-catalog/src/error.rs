//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Listing fetch failed (network, server, or decode).
    #[error("Listing fetch failed: {0}")]
    FetchFailed(String),

    /// Response decoding failed.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Deserialization(e.to_string())
    }
}
