//! DDS texture asset decoding for Perun.
//!
//! A DDS container stores a texture as a header plus its mip chain, largest
//! level first. This crate decodes containers into [`Image`] levels staged
//! in cursor buffers, ready for a texture upload path, and encodes the same
//! model back into a container:
//!
//! - [`DdsTexture`] - decoded mip chain with its [`TextureKind`]
//! - [`ImageFormat`] - pixel layouts the decoder can produce
//! - [`TextureFormat`] - GPU-side storage formats for upload paths
//!
//! # Example
//!
//! ```
//! use perun_common::HeapBuffer;
//! use perun_texture::{DdsTexture, Image, ImageFormat, TextureKind};
//!
//! let base = Image::new(ImageFormat::Rgba, 2, 2, 1, 0, HeapBuffer::from_vec(vec![0u8; 16]));
//! let texture = DdsTexture::new(TextureKind::Tex2D, ImageFormat::Rgba, vec![base]);
//!
//! let bytes = texture.to_bytes()?;
//! let decoded = DdsTexture::from_bytes(&bytes)?;
//! assert_eq!(decoded.format(), ImageFormat::Rgba);
//! assert_eq!(decoded.images().len(), 1);
//! # Ok::<(), perun_texture::Error>(())
//! ```

mod dds;
mod error;
mod format;
mod image;
mod texture_format;

pub use dds::{DdsFourCc, DdsTexture, TextureKind, DDS_MAGIC};
pub use error::{Error, Result};
pub use format::ImageFormat;
pub use image::Image;
pub use texture_format::{ComponentType, TextureFormat};
