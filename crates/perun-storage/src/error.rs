//! Error types for storage and drawing.

use thiserror::Error;

/// Errors that can occur when drawing through a render backend.
#[derive(Debug, Error)]
pub enum Error {
    /// The mesh has no vertex storage to draw from.
    #[error("cannot draw a mesh without a vertex storage")]
    NoVertices,

    /// The mesh has no index storage for an indexed draw.
    #[error("cannot draw the mesh without an indices storage")]
    NoIndices,

    /// The render backend rejected an operation.
    #[error("render backend error: {0}")]
    Backend(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, Error>;
