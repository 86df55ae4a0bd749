//! DDS container decoding and encoding.
//!
//! A DDS file is a little-endian header followed by the mip chain, largest
//! level first. Compressed layouts are carried as a FourCC tag in the pixel
//! format block; uncompressed layouts are described by flag bits alone.

use std::fmt;
use std::io::{Read, Write};

use perun_common::{ByteCursor, HeapBuffer, ReadExt};

use crate::{Error, Image, ImageFormat, Result};

/// DDS file magic, "DDS " as a little-endian u32.
pub const DDS_MAGIC: u32 = 0x2053_4444;

const DDSD_MIPMAP_COUNT: u32 = 0x0002_0000;

const DDPF_ALPHA_PIXELS: u32 = 0x0000_0001;
const DDPF_ALPHA: u32 = 0x0000_0002;
const DDPF_FOUR_CC: u32 = 0x0000_0004;
const DDPF_RGB: u32 = 0x0000_0040;
const DDPF_GRAY_SCALE: u32 = 0x0002_0000;

const DDSCAPS_TEXTURE: u32 = 0x0000_1000;
const DDSCAPS2_CUBEMAP: u32 = 0x0000_0200;
const DDSCAPS2_VOLUME: u32 = 0x0020_0000;

/// Four-character compression tag from the pixel format block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsFourCc(pub [u8; 4]);

impl DdsFourCc {
    /// DXT1 block compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT3 block compression.
    pub const DXT3: Self = Self(*b"DXT3");
    /// DXT5 block compression.
    pub const DXT5: Self = Self(*b"DXT5");
}

impl fmt::Display for DdsFourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }
        Ok(())
    }
}

/// Dimensionality of a decoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    /// One-dimensional texture, stored with a zero height.
    Tex1D,
    /// Two-dimensional texture.
    Tex2D,
    /// Volume texture.
    Tex3D,
}

impl TextureKind {
    /// Short label used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextureKind::Tex1D => "1D",
            TextureKind::Tex2D => "2D",
            TextureKind::Tex3D => "3D",
        }
    }
}

/// Header fields the decoder acts on.
///
/// Width, depth and mipmap count are clamped to at least one while parsing.
/// Height is kept exactly as stored: a zero height is what marks a
/// one-dimensional texture.
struct DdsHeader {
    flags: u32,
    height: u32,
    width: u32,
    depth: u32,
    mipmap_count: u32,
    pixel_flags: u32,
    four_cc: Option<DdsFourCc>,
    caps2: u32,
}

fn read_header<R: Read>(input: &mut R) -> Result<DdsHeader> {
    input.skip_bytes(4)?; // structure size
    let flags = input.read_u32_le()?;
    let height = input.read_u32_le()?;
    let width = input.read_u32_le()?.max(1);
    input.skip_bytes(4)?; // pitch or linear size
    let depth = input.read_u32_le()?.max(1);
    let mipmap_count = input.read_u32_le()?.max(1);
    input.skip_bytes(4 * 11)?; // reserved

    input.skip_bytes(4)?; // pixel format structure size
    let pixel_flags = input.read_u32_le()?;

    // The tag bytes are only consumed when the FourCC bit is set; without it
    // the remaining fields follow four bytes earlier.
    let four_cc = if pixel_flags & DDPF_FOUR_CC == 0 {
        None
    } else {
        let mut tag = [0u8; 4];
        input.read_exact(&mut tag)?;
        Some(DdsFourCc(tag))
    };

    input.skip_bytes(4 * 5)?; // bit count and channel masks
    input.skip_bytes(4)?; // caps
    let caps2 = input.read_u32_le()?;
    input.skip_bytes(4 * 3)?; // caps3, caps4, reserved

    Ok(DdsHeader {
        flags,
        height,
        width,
        depth,
        mipmap_count,
        pixel_flags,
        four_cc,
        caps2,
    })
}

/// Resolve an uncompressed pixel layout.
///
/// The color kind bits are tested on the header flags word; only the alpha
/// bit comes from the pixel format flags.
fn uncompressed_format(header: &DdsHeader) -> Result<ImageFormat> {
    let alpha = header.pixel_flags & DDPF_ALPHA_PIXELS != 0;
    if header.flags & DDPF_RGB != 0 {
        Ok(if alpha { ImageFormat::Rgba } else { ImageFormat::Rgb })
    } else if header.flags & (DDPF_ALPHA | DDPF_GRAY_SCALE) != 0 {
        Ok(if alpha { ImageFormat::Rg } else { ImageFormat::Red })
    } else {
        Err(Error::UnsupportedFormat {
            flags: header.flags,
            pixel_flags: header.pixel_flags,
        })
    }
}

/// Resolve a block-compressed pixel layout from its FourCC tag.
fn compressed_format(header: &DdsHeader, tag: DdsFourCc) -> Result<ImageFormat> {
    let alpha = header.pixel_flags & DDPF_ALPHA_PIXELS != 0;
    match tag {
        DdsFourCc::DXT1 => Ok(if alpha {
            ImageFormat::RgbaDxt1
        } else {
            ImageFormat::RgbDxt1
        }),
        DdsFourCc::DXT3 => Ok(ImageFormat::RgbaDxt3),
        DdsFourCc::DXT5 => Ok(ImageFormat::RgbaDxt5),
        _ => Err(Error::UnsupportedFourCc(tag)),
    }
}

fn read_levels<R: Read>(
    header: &DdsHeader,
    format: ImageFormat,
    input: &mut R,
) -> Result<Vec<Image>> {
    let mut width = header.width;
    let mut height = header.height;
    let mut depth = header.depth;

    let count = if header.flags & DDSD_MIPMAP_COUNT == 0 {
        1
    } else {
        header.mipmap_count
    };

    let mut images = Vec::with_capacity(count as usize);
    for level in 0..count {
        let length = format.level_size(width, height, depth);
        let data = input.read_exact_vec(length)?;

        images.push(Image::new(
            format,
            width,
            height,
            depth,
            level,
            HeapBuffer::from_vec(data),
        ));

        width = (width / 2).max(1);
        height = (height / 2).max(1);
        depth = (depth / 2).max(1);
    }
    Ok(images)
}

/// A decoded DDS texture: one mip chain in a single pixel format.
#[derive(Debug)]
pub struct DdsTexture {
    kind: TextureKind,
    format: ImageFormat,
    images: Vec<Image>,
}

impl DdsTexture {
    /// Assemble a texture from already-staged images, largest level first.
    pub fn new(kind: TextureKind, format: ImageFormat, images: Vec<Image>) -> Self {
        Self {
            kind,
            format,
            images,
        }
    }

    /// Decode a texture from a DDS stream.
    pub fn read<R: Read>(input: &mut R) -> Result<Self> {
        let magic = input.read_u32_le()?;
        if magic != DDS_MAGIC {
            return Err(Error::InvalidMagic(magic));
        }

        let header = read_header(input)?;

        if header.caps2 & DDSCAPS2_CUBEMAP != 0 {
            return Err(Error::Cubemap);
        }

        let kind = if header.caps2 & DDSCAPS2_VOLUME != 0 {
            TextureKind::Tex3D
        } else if header.height > 0 {
            TextureKind::Tex2D
        } else {
            TextureKind::Tex1D
        };

        let format = match header.four_cc {
            None => uncompressed_format(&header)?,
            Some(tag) => compressed_format(&header, tag)?,
        };
        let images = read_levels(&header, format, input)?;

        Ok(Self {
            kind,
            format,
            images,
        })
    }

    /// Decode a texture from an in-memory DDS file.
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self> {
        Self::read(&mut bytes)
    }

    /// Dimensionality of the texture.
    #[inline]
    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    /// Pixel layout shared by every level.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Decoded levels, largest first.
    #[inline]
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Consume the texture and take its levels.
    pub fn into_images(self) -> Vec<Image> {
        self.images
    }

    /// Serialize the texture into DDS bytes.
    ///
    /// Dimensions and flags are derived from the first image; levels are
    /// written back to back in storage order.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let base = self.images.first().ok_or(Error::Empty)?;

        let mut flags = match self.format {
            ImageFormat::Rgb | ImageFormat::Rgba => DDPF_RGB,
            ImageFormat::Red | ImageFormat::Rg => DDPF_GRAY_SCALE,
            _ => 0,
        };
        if self.images.len() > 1 {
            flags |= DDSD_MIPMAP_COUNT;
        }

        let alpha = matches!(
            self.format,
            ImageFormat::Rg
                | ImageFormat::Rgba
                | ImageFormat::RgbaDxt1
                | ImageFormat::RgbaDxt3
                | ImageFormat::RgbaDxt5
        );
        let mut pixel_flags = if alpha { DDPF_ALPHA_PIXELS } else { 0 };

        let four_cc = match self.format {
            ImageFormat::RgbDxt1 | ImageFormat::RgbaDxt1 => Some(DdsFourCc::DXT1),
            ImageFormat::RgbaDxt3 => Some(DdsFourCc::DXT3),
            ImageFormat::RgbaDxt5 => Some(DdsFourCc::DXT5),
            _ => None,
        };
        if four_cc.is_some() {
            pixel_flags |= DDPF_FOUR_CC;
        }

        let caps2 = match self.kind {
            TextureKind::Tex3D => DDSCAPS2_VOLUME,
            _ => 0,
        };

        let mut out = Vec::new();
        out.extend_from_slice(&DDS_MAGIC.to_le_bytes());
        out.extend_from_slice(&124u32.to_le_bytes()); // structure size
        out.extend_from_slice(&flags.to_le_bytes());
        out.extend_from_slice(&base.height().to_le_bytes());
        out.extend_from_slice(&base.width().to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // pitch or linear size
        out.extend_from_slice(&base.depth().to_le_bytes());
        out.extend_from_slice(&(self.images.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0u8; 4 * 11]); // reserved

        out.extend_from_slice(&32u32.to_le_bytes()); // pixel format structure size
        out.extend_from_slice(&pixel_flags.to_le_bytes());
        if let Some(tag) = four_cc {
            out.extend_from_slice(&tag.0);
        }
        let bit_count = match four_cc {
            Some(_) => 0,
            None => self.format.components() as u32 * 8,
        };
        out.extend_from_slice(&bit_count.to_le_bytes());
        out.extend_from_slice(&[0u8; 4 * 4]); // channel masks

        out.extend_from_slice(&DDSCAPS_TEXTURE.to_le_bytes());
        out.extend_from_slice(&caps2.to_le_bytes());
        out.extend_from_slice(&[0u8; 4 * 3]); // caps3, caps4, reserved

        for image in &self.images {
            out.extend_from_slice(image.data().data());
        }
        Ok(out)
    }

    /// Write the texture as a DDS stream.
    pub fn write_to<W: Write>(&self, output: &mut W) -> Result<()> {
        let bytes = self.to_bytes()?;
        output.write_all(&bytes)?;
        Ok(())
    }
}
