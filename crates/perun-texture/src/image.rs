//! Decoded image levels.

use perun_common::HeapBuffer;

use crate::ImageFormat;

/// One decoded mip level of a texture.
///
/// Holds the level's dimensions and its pixel payload, staged in a
/// [`HeapBuffer`] that arrives ready to drain (position zero, limit at the
/// payload length).
#[derive(Debug)]
pub struct Image {
    format: ImageFormat,
    width: u32,
    height: u32,
    depth: u32,
    level: u32,
    data: HeapBuffer,
}

impl Image {
    /// Create an image from a staged payload.
    pub fn new(
        format: ImageFormat,
        width: u32,
        height: u32,
        depth: u32,
        level: u32,
        data: HeapBuffer,
    ) -> Self {
        Self {
            format,
            width,
            height,
            depth,
            level,
            data,
        }
    }

    /// Pixel layout of the payload.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Width of this level in texels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of this level in texels. Zero for one-dimensional textures.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Depth of this level in texels.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Mip level index, zero being the base level.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Borrow the staged pixel payload.
    #[inline]
    pub fn data(&self) -> &HeapBuffer {
        &self.data
    }

    /// Consume the image and take its payload, for handing to an upload path.
    pub fn into_data(self) -> HeapBuffer {
        self.data
    }
}
