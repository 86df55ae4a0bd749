//! Pixel format registry for decoded images.

/// Pixel layout of a decoded image.
///
/// The discriminant is the native graphics constant for the format, so a
/// backend can hand it to the driver without a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ImageFormat {
    /// Single red channel, one byte per texel.
    Red = 0x1903,
    /// Red and green channels, two bytes per texel.
    Rg = 0x8227,
    /// Red, green and blue channels, three bytes per texel.
    Rgb = 0x1907,
    /// Red, green, blue and alpha channels, four bytes per texel.
    Rgba = 0x1908,
    /// Block-compressed RGB, 8 bytes per 4x4 block.
    RgbDxt1 = 0x83F0,
    /// Block-compressed RGBA with 1-bit alpha, 8 bytes per 4x4 block.
    RgbaDxt1 = 0x83F1,
    /// Block-compressed RGBA with explicit alpha, 16 bytes per 4x4 block.
    RgbaDxt3 = 0x83F2,
    /// Block-compressed RGBA with interpolated alpha, 16 bytes per 4x4 block.
    RgbaDxt5 = 0x83F3,
}

impl ImageFormat {
    /// Number of color components carried per texel.
    ///
    /// For uncompressed formats this doubles as the byte width of a texel.
    pub const fn components(self) -> usize {
        match self {
            Self::Red => 1,
            Self::Rg => 2,
            Self::Rgb | Self::RgbDxt1 => 3,
            Self::Rgba | Self::RgbaDxt1 | Self::RgbaDxt3 | Self::RgbaDxt5 => 4,
        }
    }

    /// Bytes per 4x4 block, or `None` for uncompressed formats.
    pub const fn block_size(self) -> Option<usize> {
        match self {
            Self::Red | Self::Rg | Self::Rgb | Self::Rgba => None,
            Self::RgbDxt1 | Self::RgbaDxt1 => Some(8),
            Self::RgbaDxt3 | Self::RgbaDxt5 => Some(16),
        }
    }

    /// Whether the format stores 4x4 blocks instead of raw texels.
    pub const fn is_compressed(self) -> bool {
        self.block_size().is_some()
    }

    /// Native graphics constant for this format.
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Byte length of one mip level with the given dimensions.
    pub fn level_size(self, width: u32, height: u32, depth: u32) -> usize {
        let (width, height, depth) = (width as usize, height as usize, depth as usize);
        match self.block_size() {
            Some(block) => (width + 3) / 4 * block * ((height + 3) / 4) * ((depth + 3) / 4),
            None => width * self.components() * height * depth,
        }
    }

    /// Get the string name for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Rg => "RG",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::RgbDxt1 => "RGB_DXT1",
            Self::RgbaDxt1 => "RGBA_DXT1",
            Self::RgbaDxt3 => "RGBA_DXT3",
            Self::RgbaDxt5 => "RGBA_DXT5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        assert_eq!(ImageFormat::Red.components(), 1);
        assert_eq!(ImageFormat::Rg.components(), 2);
        assert_eq!(ImageFormat::Rgb.components(), 3);
        assert_eq!(ImageFormat::Rgba.components(), 4);
        assert_eq!(ImageFormat::RgbDxt1.components(), 3);
        assert_eq!(ImageFormat::RgbaDxt1.components(), 4);
    }

    #[test]
    fn test_block_size_by_family() {
        assert_eq!(ImageFormat::Rgba.block_size(), None);
        assert_eq!(ImageFormat::RgbDxt1.block_size(), Some(8));
        assert_eq!(ImageFormat::RgbaDxt1.block_size(), Some(8));
        assert_eq!(ImageFormat::RgbaDxt3.block_size(), Some(16));
        assert_eq!(ImageFormat::RgbaDxt5.block_size(), Some(16));
    }

    #[test]
    fn test_level_size_uncompressed() {
        assert_eq!(ImageFormat::Rgba.level_size(128, 128, 1), 128 * 4 * 128);
        assert_eq!(ImageFormat::Rgb.level_size(5, 3, 2), 5 * 3 * 3 * 2);
        // A zero height yields an empty level rather than rounding up.
        assert_eq!(ImageFormat::Red.level_size(16, 0, 1), 0);
    }

    #[test]
    fn test_level_size_compressed_rounds_to_blocks() {
        assert_eq!(ImageFormat::RgbDxt1.level_size(64, 64, 1), 2048);
        assert_eq!(ImageFormat::RgbDxt1.level_size(1, 1, 1), 8);
        assert_eq!(ImageFormat::RgbaDxt5.level_size(1, 1, 1), 16);
        assert_eq!(ImageFormat::RgbaDxt3.level_size(8, 5, 1), 2 * 16 * 2);
    }

    #[test]
    fn test_values_are_native_constants() {
        assert_eq!(ImageFormat::Rgb.value(), 0x1907);
        assert_eq!(ImageFormat::RgbaDxt5.value(), 0x83F3);
    }
}
