//! Common utilities for Perun.
//!
//! This crate provides the foundational types used across all Perun crates:
//!
//! - [`ByteCursor`] - position/limit cursor contract for staging buffers
//! - [`HeapBuffer`] / [`ViewBuffer`] - owned and borrowed cursor backends
//! - [`ReadExt`] - little-endian stream reading for asset parsers

mod buffer;
mod cursor;
mod error;
mod read;

pub use buffer::{HeapBuffer, ViewBuffer};
pub use cursor::ByteCursor;
pub use error::{Error, Result};
pub use read::ReadExt;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{Immutable, IntoBytes};
