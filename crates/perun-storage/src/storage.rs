//! Vertex and index storages with bind lifetime tracking.

use std::fmt;

use perun_common::ByteCursor;

use crate::{Render, Result, VertexFormat, VertexLayout};

/// Staged vertex data plus the layout describing it.
pub struct VertexBuffer {
    data: Box<dyn ByteCursor>,
    layout: VertexLayout,
}

impl VertexBuffer {
    /// Wrap a staged cursor with its layout.
    pub fn new(data: Box<dyn ByteCursor>, layout: VertexLayout) -> Self {
        Self { data, layout }
    }

    /// Borrow the staged bytes.
    #[inline]
    pub fn data(&self) -> &dyn ByteCursor {
        self.data.as_ref()
    }

    /// Mutably borrow the staged bytes, for filling or updating.
    #[inline]
    pub fn data_mut(&mut self) -> &mut dyn ByteCursor {
        self.data.as_mut()
    }

    /// Layout of the staged vertices.
    #[inline]
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Number of whole vertices in the active range.
    pub fn vertex_count(&self) -> usize {
        let stride = self.layout.stride();
        if stride == 0 {
            0
        } else {
            self.data.limit() / stride
        }
    }
}

impl fmt::Debug for VertexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexBuffer")
            .field("limit", &self.data.limit())
            .field("capacity", &self.data.capacity())
            .field("layout", &self.layout)
            .finish()
    }
}

/// Staged index data plus the component format of each index.
pub struct IndexBuffer {
    data: Box<dyn ByteCursor>,
    format: VertexFormat,
}

impl IndexBuffer {
    /// Wrap a staged cursor with its index format.
    pub fn new(data: Box<dyn ByteCursor>, format: VertexFormat) -> Self {
        Self { data, format }
    }

    /// Borrow the staged bytes.
    #[inline]
    pub fn data(&self) -> &dyn ByteCursor {
        self.data.as_ref()
    }

    /// Mutably borrow the staged bytes, for filling or updating.
    #[inline]
    pub fn data_mut(&mut self) -> &mut dyn ByteCursor {
        self.data.as_mut()
    }

    /// Component format of each index.
    #[inline]
    pub fn format(&self) -> VertexFormat {
        self.format
    }

    /// Number of whole indices in the active range.
    pub fn index_count(&self) -> usize {
        self.data.limit() / self.format.size()
    }
}

impl fmt::Debug for IndexBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexBuffer")
            .field("limit", &self.data.limit())
            .field("capacity", &self.data.capacity())
            .field("format", &self.format)
            .finish()
    }
}

/// Vertex buffers and an optional index buffer drawn as one unit.
///
/// The storage counts acquisitions so nested draws share a single backend
/// binding: the first acquisition binds, the last release unbinds.
#[derive(Debug)]
pub struct VertexStorage {
    vertices: Vec<VertexBuffer>,
    indices: Option<IndexBuffer>,
    acquired: usize,
}

impl VertexStorage {
    /// Assemble a storage from its buffers.
    pub fn new(vertices: Vec<VertexBuffer>, indices: Option<IndexBuffer>) -> Self {
        Self {
            vertices,
            indices,
            acquired: 0,
        }
    }

    /// Vertex buffers in attribute binding order.
    #[inline]
    pub fn vertices(&self) -> &[VertexBuffer] {
        &self.vertices
    }

    /// Mutable access to the vertex buffers.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [VertexBuffer] {
        &mut self.vertices
    }

    /// Vertex buffer at binding slot `index`.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&VertexBuffer> {
        self.vertices.get(index)
    }

    /// Mutable vertex buffer at binding slot `index`.
    #[inline]
    pub fn vertex_mut(&mut self, index: usize) -> Option<&mut VertexBuffer> {
        self.vertices.get_mut(index)
    }

    /// Index buffer, if the storage is indexed.
    #[inline]
    pub fn indices(&self) -> Option<&IndexBuffer> {
        self.indices.as_ref()
    }

    /// Mutable access to the index buffer.
    #[inline]
    pub fn indices_mut(&mut self) -> Option<&mut IndexBuffer> {
        self.indices.as_mut()
    }

    /// Whether any vertex buffer is present.
    #[inline]
    pub fn has_vertices(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Whether an index buffer is present.
    #[inline]
    pub fn has_indices(&self) -> bool {
        self.indices.is_some()
    }

    /// Whether the storage is currently bound on a backend.
    #[inline]
    pub fn is_acquired(&self) -> bool {
        self.acquired > 0
    }

    /// Acquire the storage for drawing, binding it on the first acquisition.
    ///
    /// A failed bind leaves the storage unacquired.
    pub fn acquire(&mut self, render: &mut dyn Render) -> Result<()> {
        if self.acquired == 0 {
            render.bind(&*self)?;
        }
        self.acquired += 1;
        Ok(())
    }

    /// Release one acquisition, unbinding once the last one is gone.
    ///
    /// An unmatched release is ignored.
    pub fn release(&mut self, render: &mut dyn Render) {
        debug_assert!(self.acquired > 0, "release without matching acquire");
        if self.acquired == 0 {
            return;
        }
        self.acquired -= 1;
        if self.acquired == 0 {
            render.unbind(&*self);
        }
    }
}

#[cfg(test)]
mod tests {
    use perun_common::HeapBuffer;

    use super::*;
    use crate::mock::{RecordingRender, RenderCall};

    fn quad_vertices() -> VertexBuffer {
        let mut staging = HeapBuffer::new(4 * 8);
        for [x, y] in [[0.0f32, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]] {
            staging.write_f32(x).unwrap();
            staging.write_f32(y).unwrap();
        }
        staging.flip();

        let layout = VertexLayout::new(8).with_attribute(0, 2, VertexFormat::Float);
        VertexBuffer::new(Box::new(staging), layout)
    }

    fn quad_indices() -> IndexBuffer {
        let mut staging = HeapBuffer::new(6 * 2);
        for index in [0u16, 1, 2, 2, 1, 3] {
            staging.write_u16(index).unwrap();
        }
        staging.flip();
        IndexBuffer::new(Box::new(staging), VertexFormat::UnsignedShort)
    }

    #[test]
    fn test_vertex_count_from_active_range() {
        let vertices = quad_vertices();
        assert_eq!(vertices.vertex_count(), 4);
        assert_eq!(vertices.layout().stride(), 8);
    }

    #[test]
    fn test_index_count_from_format() {
        let indices = quad_indices();
        assert_eq!(indices.index_count(), 6);
        assert_eq!(indices.format(), VertexFormat::UnsignedShort);
    }

    #[test]
    fn test_partial_fill_counts_whole_vertices() {
        let mut staging = HeapBuffer::new(64);
        staging.write_f32(1.0).unwrap();
        staging.write_f32(2.0).unwrap();
        staging.write_f32(3.0).unwrap();
        staging.flip();

        let layout = VertexLayout::new(8).with_attribute(0, 2, VertexFormat::Float);
        let vertices = VertexBuffer::new(Box::new(staging), layout);
        // Twelve staged bytes hold one whole 8-byte vertex.
        assert_eq!(vertices.vertex_count(), 1);
    }

    #[test]
    fn test_nested_acquire_binds_once() {
        let mut render = RecordingRender::new();
        let mut storage = VertexStorage::new(vec![quad_vertices()], None);

        storage.acquire(&mut render).unwrap();
        storage.acquire(&mut render).unwrap();
        assert!(storage.is_acquired());
        assert_eq!(render.calls, vec![RenderCall::Bind]);

        storage.release(&mut render);
        assert!(storage.is_acquired());
        assert_eq!(render.calls, vec![RenderCall::Bind]);

        storage.release(&mut render);
        assert!(!storage.is_acquired());
        assert_eq!(render.calls, vec![RenderCall::Bind, RenderCall::Unbind]);
    }

    #[test]
    fn test_failed_bind_leaves_storage_unacquired() {
        let mut render = RecordingRender::new();
        render.fail_bind = true;
        let mut storage = VertexStorage::new(vec![quad_vertices()], None);

        assert!(storage.acquire(&mut render).is_err());
        assert!(!storage.is_acquired());
        assert!(render.calls.is_empty());

        // The storage stays usable once the backend recovers.
        render.fail_bind = false;
        storage.acquire(&mut render).unwrap();
        assert!(storage.is_acquired());
        assert_eq!(render.calls, vec![RenderCall::Bind]);
        storage.release(&mut render);
    }
}
