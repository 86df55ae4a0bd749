//! Error types for perun-common.

use thiserror::Error;

/// Common error type used throughout Perun crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A sequential cursor operation would cross the buffer's limit.
    #[error("buffer exhausted: needed {needed} bytes at position {position}, limit is {limit}")]
    Exhausted {
        position: usize,
        needed: usize,
        limit: usize,
    },

    /// An absolute-offset operation would cross the buffer's capacity.
    #[error("offset out of bounds: needed {needed} bytes at offset {offset}, capacity is {capacity}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        capacity: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
