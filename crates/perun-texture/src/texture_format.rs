//! GPU texture format registry.

/// Component type of a texture format's texels.
///
/// The discriminant is the native graphics constant for the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ComponentType {
    /// Unsigned 8-bit integer.
    UnsignedByte = 0x1401,
    /// Unsigned 16-bit integer.
    UnsignedShort = 0x1403,
    /// Unsigned 32-bit integer.
    UnsignedInt = 0x1405,
    /// 32-bit float.
    Float = 0x1406,
    /// 16-bit float.
    HalfFloat = 0x140B,
}

impl ComponentType {
    /// Native graphics constant for this type.
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Byte width of one component.
    pub const fn size(self) -> usize {
        match self {
            Self::UnsignedByte => 1,
            Self::UnsignedShort | Self::HalfFloat => 2,
            Self::UnsignedInt | Self::Float => 4,
        }
    }
}

/// Internal storage format of a GPU texture.
///
/// The discriminant is the native graphics constant for the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TextureFormat {
    /// Red/green/blue, 8-bit integers.
    Rgb8 = 0x8051,
    /// Red/green/blue/alpha, 8-bit integers.
    Rgba8 = 0x8058,
    /// Red/green/blue, 16-bit integers.
    Rgb16 = 0x8054,
    /// Red/green/blue/alpha, 16-bit integers.
    Rgba16 = 0x805B,
    /// Depth, 16-bit integer.
    DepthComponent16 = 0x81A5,
    /// Depth, 24-bit integer.
    DepthComponent24 = 0x81A6,
    /// Depth, 32-bit integer.
    DepthComponent32 = 0x81A7,
    /// Red, 8-bit integer.
    R8 = 0x8229,
    /// Red, 16-bit integer.
    R16 = 0x822A,
    /// Red/green, 8-bit integers.
    Rg8 = 0x822B,
    /// Red/green, 16-bit integers.
    Rg16 = 0x822C,
    /// Red, 16-bit float.
    R16F = 0x822D,
    /// Red, 32-bit float.
    R32F = 0x822E,
    /// Red/green, 16-bit floats.
    Rg16F = 0x822F,
    /// Red/green, 32-bit floats.
    Rg32F = 0x8230,
    /// Red/green/blue/alpha, 32-bit floats.
    Rgba32F = 0x8814,
    /// Red/green/blue, 32-bit floats.
    Rgb32F = 0x8815,
    /// Red/green/blue/alpha, 16-bit floats.
    Rgba16F = 0x881A,
    /// Red/green/blue, 16-bit floats.
    Rgb16F = 0x881B,
    /// Red, driver-compressed.
    CompressedRed = 0x8225,
    /// Red/green, driver-compressed.
    CompressedRg = 0x8226,
    /// Red/green/blue, driver-compressed.
    CompressedRgb = 0x84ED,
    /// Red/green/blue/alpha, driver-compressed.
    CompressedRgba = 0x84EE,
}

impl TextureFormat {
    /// Native graphics constant for this format.
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Whether the driver stores this format compressed.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            Self::CompressedRed | Self::CompressedRg | Self::CompressedRgb | Self::CompressedRgba
        )
    }

    /// Component type texel data is supplied as.
    pub const fn component_type(self) -> ComponentType {
        match self {
            Self::Rgb8
            | Self::Rgba8
            | Self::R8
            | Self::Rg8
            | Self::CompressedRed
            | Self::CompressedRg
            | Self::CompressedRgb
            | Self::CompressedRgba => ComponentType::UnsignedByte,
            Self::Rgb16 | Self::Rgba16 | Self::DepthComponent16 | Self::R16 | Self::Rg16 => {
                ComponentType::UnsignedShort
            }
            Self::DepthComponent24 | Self::DepthComponent32 => ComponentType::UnsignedInt,
            Self::R32F | Self::Rg32F | Self::Rgb32F | Self::Rgba32F => ComponentType::Float,
            Self::R16F | Self::Rg16F | Self::Rgb16F | Self::Rgba16F => ComponentType::HalfFloat,
        }
    }
}
