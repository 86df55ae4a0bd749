//! Mesh drawing over a render backend.

use crate::{Error, Primitive, Render, Result, VertexBuffer, VertexLayout, VertexStorage};

/// Vertices and optional indices drawn as one object.
///
/// Every draw runs inside an acquire/release bracket on the underlying
/// [`VertexStorage`], so the backend sees a bind, the draw, then an unbind
/// even when the draw itself fails.
#[derive(Debug)]
pub struct Mesh {
    storage: VertexStorage,
}

impl Mesh {
    /// Build a mesh over an assembled storage.
    pub fn new(storage: VertexStorage) -> Self {
        Self { storage }
    }

    /// Build a mesh over a single unindexed vertex buffer.
    pub fn from_vertices(vertices: VertexBuffer) -> Self {
        Self::new(VertexStorage::new(vec![vertices], None))
    }

    /// The mesh's storage.
    #[inline]
    pub fn storage(&self) -> &VertexStorage {
        &self.storage
    }

    /// Mutable access to the mesh's storage, for staging data.
    #[inline]
    pub fn storage_mut(&mut self) -> &mut VertexStorage {
        &mut self.storage
    }

    /// Layout of the first vertex buffer, if any.
    pub fn layout(&self) -> Option<&VertexLayout> {
        self.storage.vertex(0).map(VertexBuffer::layout)
    }

    /// Draw `count` vertices starting at `offset`.
    ///
    /// Fails with [`Error::NoVertices`] before touching the backend when the
    /// storage holds no vertex buffers.
    pub fn draw(
        &mut self,
        render: &mut dyn Render,
        primitive: Primitive,
        offset: usize,
        count: usize,
    ) -> Result<()> {
        if !self.storage.has_vertices() {
            return Err(Error::NoVertices);
        }
        self.storage.acquire(render)?;
        let drawn = render.draw(primitive, offset, count);
        self.storage.release(render);
        drawn
    }

    /// Draw `count` indices starting at `offset`, using the index buffer's
    /// component format.
    ///
    /// Fails with [`Error::NoIndices`] before touching the backend when the
    /// storage holds no index buffer.
    pub fn draw_indexed(
        &mut self,
        render: &mut dyn Render,
        primitive: Primitive,
        offset: usize,
        count: usize,
    ) -> Result<()> {
        let format = match self.storage.indices() {
            Some(indices) => indices.format(),
            None => return Err(Error::NoIndices),
        };
        self.storage.acquire(render)?;
        let drawn = render.draw_indexed(primitive, offset, count, format);
        self.storage.release(render);
        drawn
    }
}

#[cfg(test)]
mod tests {
    use perun_common::{ByteCursor, HeapBuffer};

    use super::*;
    use crate::mock::{RecordingRender, RenderCall};
    use crate::{IndexBuffer, VertexFormat};

    fn triangle() -> VertexBuffer {
        let mut staging = HeapBuffer::new(3 * 8);
        for [x, y] in [[0.0f32, 0.0], [1.0, 0.0], [0.5, 1.0]] {
            staging.write_f32(x).unwrap();
            staging.write_f32(y).unwrap();
        }
        staging.flip();
        let layout = VertexLayout::new(8).with_attribute(0, 2, VertexFormat::Float);
        VertexBuffer::new(Box::new(staging), layout)
    }

    fn triangle_indices() -> IndexBuffer {
        let mut staging = HeapBuffer::new(3 * 2);
        for index in [0u16, 1, 2] {
            staging.write_u16(index).unwrap();
        }
        staging.flip();
        IndexBuffer::new(Box::new(staging), VertexFormat::UnsignedShort)
    }

    #[test]
    fn test_draw_brackets_backend_calls() {
        let mut render = RecordingRender::new();
        let mut mesh = Mesh::from_vertices(triangle());

        mesh.draw(&mut render, Primitive::Triangles, 0, 3).unwrap();
        assert_eq!(
            render.calls,
            vec![
                RenderCall::Bind,
                RenderCall::Draw {
                    primitive: Primitive::Triangles,
                    offset: 0,
                    count: 3,
                },
                RenderCall::Unbind,
            ]
        );
        assert!(!mesh.storage().is_acquired());
    }

    #[test]
    fn test_draw_indexed_uses_index_format() {
        let mut render = RecordingRender::new();
        let storage = VertexStorage::new(vec![triangle()], Some(triangle_indices()));
        let mut mesh = Mesh::new(storage);

        mesh.draw_indexed(&mut render, Primitive::Triangles, 0, 3)
            .unwrap();
        assert_eq!(
            render.calls,
            vec![
                RenderCall::Bind,
                RenderCall::DrawIndexed {
                    primitive: Primitive::Triangles,
                    offset: 0,
                    count: 3,
                    format: VertexFormat::UnsignedShort,
                },
                RenderCall::Unbind,
            ]
        );
    }

    #[test]
    fn test_draw_without_vertices_touches_nothing() {
        let mut render = RecordingRender::new();
        let mut mesh = Mesh::new(VertexStorage::new(Vec::new(), None));

        let err = mesh.draw(&mut render, Primitive::Points, 0, 1).unwrap_err();
        assert!(matches!(err, Error::NoVertices));
        assert!(render.calls.is_empty());
    }

    #[test]
    fn test_draw_indexed_without_indices_touches_nothing() {
        let mut render = RecordingRender::new();
        let mut mesh = Mesh::from_vertices(triangle());

        let err = mesh
            .draw_indexed(&mut render, Primitive::Triangles, 0, 3)
            .unwrap_err();
        assert!(matches!(err, Error::NoIndices));
        assert!(render.calls.is_empty());
    }

    #[test]
    fn test_failed_draw_still_releases() {
        let mut render = RecordingRender::new();
        render.fail_draw = true;
        let mut mesh = Mesh::from_vertices(triangle());

        let err = mesh
            .draw(&mut render, Primitive::Triangles, 0, 3)
            .unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
        assert_eq!(render.calls, vec![RenderCall::Bind, RenderCall::Unbind]);
        assert!(!mesh.storage().is_acquired());
    }

    #[test]
    fn test_failed_bind_propagates_without_draw() {
        let mut render = RecordingRender::new();
        render.fail_bind = true;
        let mut mesh = Mesh::from_vertices(triangle());

        let err = mesh
            .draw(&mut render, Primitive::Triangles, 0, 3)
            .unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
        assert!(render.calls.is_empty());
        assert!(!mesh.storage().is_acquired());
    }

    #[test]
    fn test_staging_through_storage_mut() {
        let mut mesh = Mesh::from_vertices(triangle());
        assert_eq!(mesh.layout().unwrap().stride(), 8);

        let buffer = mesh.storage_mut().vertex_mut(0).unwrap();
        buffer.data_mut().rewind();
        assert_eq!(buffer.data_mut().read_f32().unwrap(), 0.0);
        assert_eq!(buffer.vertex_count(), 3);
    }
}
