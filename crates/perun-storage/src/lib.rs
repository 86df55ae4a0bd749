//! Vertex and index storage for a render backend.
//!
//! Geometry is staged into [`ByteCursor`](perun_common::ByteCursor) buffers,
//! described by a [`VertexLayout`], and grouped into a [`VertexStorage`] that
//! tracks how many users currently hold it on the backend. A [`Mesh`] wraps a
//! storage and drives [`Render`] to draw it.
//!
//! ```
//! use perun_common::{ByteCursor, HeapBuffer};
//! use perun_storage::{VertexBuffer, VertexFormat, VertexLayout, VertexStorage};
//!
//! let mut staging = HeapBuffer::new(4 * 8);
//! for [x, y] in [[0.0f32, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
//!     staging.write_f32(x)?;
//!     staging.write_f32(y)?;
//! }
//! staging.flip();
//!
//! let layout = VertexLayout::new(8).with_attribute(0, 2, VertexFormat::Float);
//! let vertices = VertexBuffer::new(Box::new(staging), layout);
//! assert_eq!(vertices.vertex_count(), 4);
//!
//! let storage = VertexStorage::new(vec![vertices], None);
//! assert!(storage.has_vertices());
//! # Ok::<(), perun_common::Error>(())
//! ```

mod error;
mod format;
mod mesh;
#[cfg(test)]
mod mock;
mod render;
mod storage;

pub use error::{Error, Result};
pub use format::{Primitive, VertexAttribute, VertexFormat, VertexLayout};
pub use mesh::Mesh;
pub use render::Render;
pub use storage::{IndexBuffer, VertexBuffer, VertexStorage};
