//! Vertex data formats and layouts.

/// Primitive assembly mode for draw calls.
///
/// The discriminant is the native graphics constant for the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Primitive {
    /// Independent points.
    Points = 0x0,
    /// Independent line segments.
    Lines = 0x1,
    /// Connected segments, closed back to the first vertex.
    LineLoop = 0x2,
    /// Connected segments.
    LineStrip = 0x3,
    /// Independent triangles.
    Triangles = 0x4,
    /// Strip of triangles sharing edges.
    TriangleStrip = 0x5,
    /// Fan of triangles sharing the first vertex.
    TriangleFan = 0x6,
}

impl Primitive {
    /// Native graphics constant for this mode.
    pub const fn value(self) -> u32 {
        self as u32
    }
}

/// Component format of vertex or index data.
///
/// The discriminant is the native graphics constant for the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum VertexFormat {
    /// Signed 8-bit integer.
    Byte = 0x1400,
    /// Unsigned 8-bit integer.
    UnsignedByte = 0x1401,
    /// Signed 16-bit integer.
    Short = 0x1402,
    /// Unsigned 16-bit integer.
    UnsignedShort = 0x1403,
    /// Signed 32-bit integer.
    Int = 0x1404,
    /// Unsigned 32-bit integer.
    UnsignedInt = 0x1405,
    /// 32-bit float.
    Float = 0x1406,
    /// 64-bit float.
    Double = 0x140A,
    /// 16-bit float.
    HalfFloat = 0x140B,
}

impl VertexFormat {
    /// Byte size of one component.
    pub const fn size(self) -> usize {
        match self {
            Self::Byte | Self::UnsignedByte => 1,
            Self::Short | Self::UnsignedShort | Self::HalfFloat => 2,
            Self::Int | Self::UnsignedInt | Self::Float => 4,
            Self::Double => 8,
        }
    }

    /// Native graphics constant for this format.
    pub const fn value(self) -> u32 {
        self as u32
    }
}

/// One attribute within an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Byte offset of the attribute inside a vertex.
    pub offset: usize,
    /// Number of components, one through four.
    pub components: usize,
    /// Component storage format.
    pub format: VertexFormat,
}

impl VertexAttribute {
    /// Byte size of the whole attribute.
    pub fn size(&self) -> usize {
        self.components * self.format.size()
    }
}

/// Interleaved vertex attribute layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    stride: usize,
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Layout with the given byte stride and no attributes yet.
    pub fn new(stride: usize) -> Self {
        Self {
            stride,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute located `offset` bytes into each vertex.
    pub fn with_attribute(mut self, offset: usize, components: usize, format: VertexFormat) -> Self {
        self.attributes.push(VertexAttribute {
            offset,
            components,
            format,
        });
        self
    }

    /// Byte distance between consecutive vertices.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Attributes in declaration order.
    #[inline]
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }
}
