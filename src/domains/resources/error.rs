//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested identifier is not present in the Pokedex.
    #[error("Unknown Pokemon: {0}")]
    NotFound(String),

    /// The record could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResourceError {
    /// Create a new "not found" error carrying the offending identifier.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}
