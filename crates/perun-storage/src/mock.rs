//! Recording render backend for unit tests (no GPU required).

use crate::{Error, Primitive, Render, Result, VertexFormat, VertexStorage};

/// One call observed by [`RecordingRender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Bind,
    Unbind,
    Draw {
        primitive: Primitive,
        offset: usize,
        count: usize,
    },
    DrawIndexed {
        primitive: Primitive,
        offset: usize,
        count: usize,
        format: VertexFormat,
    },
}

/// Render backend that records every call instead of talking to a GPU.
#[derive(Debug, Default)]
pub struct RecordingRender {
    pub calls: Vec<RenderCall>,
    pub fail_bind: bool,
    pub fail_draw: bool,
}

impl RecordingRender {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Render for RecordingRender {
    fn bind(&mut self, _storage: &VertexStorage) -> Result<()> {
        if self.fail_bind {
            return Err(Error::Backend("bind refused".into()));
        }
        self.calls.push(RenderCall::Bind);
        Ok(())
    }

    fn unbind(&mut self, _storage: &VertexStorage) {
        self.calls.push(RenderCall::Unbind);
    }

    fn draw(&mut self, primitive: Primitive, offset: usize, count: usize) -> Result<()> {
        if self.fail_draw {
            return Err(Error::Backend("draw refused".into()));
        }
        self.calls.push(RenderCall::Draw {
            primitive,
            offset,
            count,
        });
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        primitive: Primitive,
        offset: usize,
        count: usize,
        format: VertexFormat,
    ) -> Result<()> {
        if self.fail_draw {
            return Err(Error::Backend("draw refused".into()));
        }
        self.calls.push(RenderCall::DrawIndexed {
            primitive,
            offset,
            count,
            format,
        });
        Ok(())
    }
}
