//! # Canvas Errors
//!
//! Error types for scene lookups, stroke building and material resolution.

use stroke_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur while mutating or querying a [`Scene`](crate::Scene).
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Malformed curve parameters, axis code or name.
    #[error(transparent)]
    InvalidArgument(#[from] GeometryError),

    /// A named item the caller asked to resolve does not exist.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// A required scene item is absent or a handle no longer resolves.
    #[error("Host state error: {message}")]
    HostState { message: String },

    /// Snapshot encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CanvasError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(GeometryError::invalid_argument(message))
    }

    /// Creates a not-found error.
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Creates a host state error.
    pub fn host_state(message: impl Into<String>) -> Self {
        Self::HostState {
            message: message.into(),
        }
    }
}

/// Result type alias for scene operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

// =============================================================================
// TESTS
// =============================================================================
