//! Render backend seam.

use crate::{Primitive, Result, VertexFormat, VertexStorage};

/// Draw-path contract a mesh renders through.
///
/// Implementations own whatever device objects stand behind a
/// [`VertexStorage`]; the storage itself only coordinates bind lifetimes
/// around draws.
pub trait Render {
    /// Make the storage's buffers current on the device.
    ///
    /// Called on the first acquisition only; nested acquisitions share the
    /// binding.
    fn bind(&mut self, storage: &VertexStorage) -> Result<()>;

    /// Undo [`bind`](Render::bind) once the last acquisition is released.
    fn unbind(&mut self, storage: &VertexStorage);

    /// Draw `count` vertices starting at `offset` from the bound storage.
    fn draw(&mut self, primitive: Primitive, offset: usize, count: usize) -> Result<()>;

    /// Draw `count` indices starting at `offset` from the bound storage.
    fn draw_indexed(
        &mut self,
        primitive: Primitive,
        offset: usize,
        count: usize,
        format: VertexFormat,
    ) -> Result<()>;
}
