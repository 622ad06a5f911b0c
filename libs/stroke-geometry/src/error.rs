//! # Geometry Errors
//!
//! Error types for curve sampling and axis mapping.
//!
//! ## Error Policy
//!
//! - Parameters are validated before any point is produced
//! - Failures are returned immediately, never patched up with defaults

use thiserror::Error;

/// Errors that can occur while sampling curves or mapping axes.
///
/// ## Example
///
/// ```rust
/// use stroke_geometry::{AxisPermutation, GeometryError};
///
/// match "XXY".parse::<AxisPermutation>() {
///     Ok(_) => unreachable!(),
///     Err(GeometryError::InvalidArgument { message }) => assert!(message.contains("XXY")),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A curve parameter or axis code is missing or malformed.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl GeometryError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
