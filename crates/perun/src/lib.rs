//! Perun - DDS texture decoding and GPU buffer staging library.
//!
//! This crate provides a unified interface to the Perun library ecosystem
//! for loading texture assets and staging geometry for a render backend.
//!
//! # Crates
//!
//! - [`perun_common`] - Common utilities (cursor buffers, binary stream reading)
//! - [`perun_texture`] - DDS texture decoding (formats, mip chains, 1D/2D/3D)
//! - [`perun_storage`] - Vertex and index storage (layouts, meshes, render seam)
//!
//! # Example
//!
//! ```no_run
//! use perun::prelude::*;
//!
//! // Decode a texture asset
//! let bytes = std::fs::read("terrain.dds")?;
//! let texture = DdsTexture::from_bytes(&bytes)?;
//!
//! for image in texture.images() {
//!     println!(
//!         "{} level {}: {}x{}",
//!         texture.format().as_str(),
//!         image.level(),
//!         image.width(),
//!         image.height()
//!     );
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use perun_common as common;
pub use perun_storage as storage;
pub use perun_texture as texture;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use perun_common::{ByteCursor, HeapBuffer, ViewBuffer};
    pub use perun_storage::{
        IndexBuffer, Mesh, Primitive, Render, VertexBuffer, VertexFormat, VertexLayout,
        VertexStorage,
    };
    pub use perun_texture::{DdsTexture, Image, ImageFormat, TextureKind};
}

// Re-export commonly used types at the crate root
pub use perun_texture::DdsTexture;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
