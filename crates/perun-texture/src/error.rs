//! Error types for texture decoding.

use thiserror::Error;

use crate::dds::DdsFourCc;

/// Errors that can occur when working with texture assets.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid DDS magic.
    #[error("invalid DDS magic: expected 0x20534444, got {0:#010X}")]
    InvalidMagic(u32),

    /// Cube map surface flag is set.
    #[error("DDS cube map textures are not supported")]
    Cubemap,

    /// Header flags do not name a supported uncompressed layout.
    #[error(
        "unsupported uncompressed format: header flags {flags:#010X}, pixel flags {pixel_flags:#010X}"
    )]
    UnsupportedFormat { flags: u32, pixel_flags: u32 },

    /// Unknown compression tag.
    #[error("unsupported compression format: {0}")]
    UnsupportedFourCc(DdsFourCc),

    /// The texture has no images to encode.
    #[error("texture has no images")]
    Empty,
}

/// Result type for texture operations.
pub type Result<T> = std::result::Result<T, Error>;
