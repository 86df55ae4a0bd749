//! Concrete [`ByteCursor`] backends.
//!
//! [`HeapBuffer`] owns its storage and is what decoders hand out;
//! [`ViewBuffer`] borrows a caller's slice so a region of a larger
//! allocation can be staged without copying.

use std::fmt;

use crate::ByteCursor;

/// Heap-allocated byte buffer with cursor state.
///
/// The backing storage never grows or shrinks once created.
pub struct HeapBuffer {
    bytes: Box<[u8]>,
    position: usize,
    limit: usize,
}

impl HeapBuffer {
    /// Allocate a zero-filled buffer of `capacity` bytes, ready for filling:
    /// position 0, limit at capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0u8; capacity].into_boxed_slice(),
            position: 0,
            limit: capacity,
        }
    }

    /// Wrap an existing vector, ready for draining: position 0, limit at the
    /// vector's length.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let bytes = bytes.into_boxed_slice();
        let limit = bytes.len();
        Self {
            bytes,
            position: 0,
            limit,
        }
    }

    /// Consume the buffer and return the full backing storage.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}

impl ByteCursor for HeapBuffer {
    #[inline]
    fn data(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    fn data_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[inline]
    fn position(&self) -> usize {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    #[inline]
    fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }
}

impl fmt::Debug for HeapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapBuffer")
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("capacity", &self.bytes.len())
            .finish()
    }
}

/// Cursor over a borrowed byte slice.
///
/// Cursor state lives in the view; the bytes belong to the caller and keep
/// any writes after the view is dropped.
pub struct ViewBuffer<'a> {
    bytes: &'a mut [u8],
    position: usize,
    limit: usize,
}

impl<'a> ViewBuffer<'a> {
    /// Wrap a mutable slice, ready for filling: position 0, limit at the
    /// slice's length.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        let limit = bytes.len();
        Self {
            bytes,
            position: 0,
            limit,
        }
    }
}

impl ByteCursor for ViewBuffer<'_> {
    #[inline]
    fn data(&self) -> &[u8] {
        self.bytes
    }

    #[inline]
    fn data_mut(&mut self) -> &mut [u8] {
        self.bytes
    }

    #[inline]
    fn position(&self) -> usize {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    #[inline]
    fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }
}

impl fmt::Debug for ViewBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewBuffer")
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("capacity", &self.bytes.len())
            .finish()
    }
}
