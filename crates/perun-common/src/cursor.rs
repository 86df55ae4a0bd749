//! Cursor-based numeric I/O over fixed-capacity byte buffers.
//!
//! This module provides [`ByteCursor`], the contract shared by every staging
//! buffer the engine fills before handing it to a graphics or audio backend.
//! A cursor tracks a `position` and a `limit` over a fixed block of bytes and
//! offers typed access in two flavors: sequential (at the cursor, advancing
//! it) and absolute (`*_at`, at a caller-supplied offset, cursor untouched).
//!
//! Values are stored in native byte order, matching what the GPU expects from
//! a raw memory upload.

use zerocopy::{Immutable, IntoBytes};

use crate::{Error, Result};

/// Position/limit cursor over a fixed block of bytes.
///
/// Implementors only supply the storage and the two cursor fields; every
/// typed operation is provided on top of those. The setters do not validate
/// their argument - bounds are enforced lazily, by the read or write that
/// would cross them failing with [`Error::Exhausted`] or
/// [`Error::OutOfBounds`].
///
/// # Example
///
/// ```
/// use perun_common::{ByteCursor, HeapBuffer};
///
/// let mut staging = HeapBuffer::new(16);
/// staging.write_i32(7)?;
/// staging.write_f32(0.5)?;
/// staging.flip();
///
/// assert_eq!(staging.remaining(), 8);
/// assert_eq!(staging.read_i32()?, 7);
/// assert_eq!(staging.read_f32()?, 0.5);
/// # Ok::<(), perun_common::Error>(())
/// ```
pub trait ByteCursor {
    /// Borrow the full backing storage, independent of position and limit.
    fn data(&self) -> &[u8];

    /// Mutably borrow the full backing storage.
    fn data_mut(&mut self) -> &mut [u8];

    /// Current cursor position in bytes.
    fn position(&self) -> usize;

    /// Move the cursor. Not validated; a later access past the limit fails.
    fn set_position(&mut self, position: usize);

    /// Current limit in bytes.
    fn limit(&self) -> usize;

    /// Move the limit. Not validated; a later access past the capacity fails.
    fn set_limit(&mut self, limit: usize);

    /// Total size of the backing storage in bytes.
    #[inline]
    fn capacity(&self) -> usize {
        self.data().len()
    }

    /// Bytes left between the cursor and the limit.
    #[inline]
    fn remaining(&self) -> usize {
        self.limit().saturating_sub(self.position())
    }

    /// Whether any bytes are left between the cursor and the limit.
    #[inline]
    fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Borrow the bytes between the cursor and the limit.
    #[inline]
    fn remaining_bytes(&self) -> &[u8] {
        let end = self.limit().min(self.capacity());
        let start = self.position().min(end);
        &self.data()[start..end]
    }

    /// Reset for a fresh fill: limit to capacity, cursor to zero.
    fn clear(&mut self) {
        let capacity = self.capacity();
        self.set_limit(capacity);
        self.set_position(0);
    }

    /// Arm for draining: limit to the cursor, cursor to zero.
    ///
    /// Call this between writing a buffer and handing it off to a reader.
    fn flip(&mut self) {
        let position = self.position();
        self.set_limit(position);
        self.set_position(0);
    }

    /// Move the cursor back to zero, keeping the limit.
    fn rewind(&mut self) {
        self.set_position(0);
    }

    /// Validate that `needed` bytes fit between the cursor and the limit,
    /// returning the cursor position without advancing it.
    fn check_remaining(&self, needed: usize) -> Result<usize> {
        let position = self.position();
        let limit = self.limit();
        match position.checked_add(needed) {
            Some(end) if end <= limit => Ok(position),
            _ => Err(Error::Exhausted {
                position,
                needed,
                limit,
            }),
        }
    }

    /// Validate that `needed` bytes fit at `offset` within the capacity.
    fn check_offset(&self, offset: usize, needed: usize) -> Result<()> {
        let capacity = self.capacity();
        match offset.checked_add(needed) {
            Some(end) if end <= capacity => Ok(()),
            _ => Err(Error::OutOfBounds {
                offset,
                needed,
                capacity,
            }),
        }
    }

    /// Borrow `count` bytes at the cursor and advance past them.
    fn read_bytes(&mut self, count: usize) -> Result<&[u8]> {
        let position = self.check_remaining(count)?;
        self.check_offset(position, count)?;
        self.set_position(position + count);
        Ok(&self.data()[position..position + count])
    }

    /// Copy `src` to the cursor and advance past it.
    fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        let position = self.check_remaining(src.len())?;
        self.check_offset(position, src.len())?;
        self.data_mut()[position..position + src.len()].copy_from_slice(src);
        self.set_position(position + src.len());
        Ok(())
    }

    /// Write a slice of plain-data values at the cursor and advance past it.
    ///
    /// Accepts any type implementing zerocopy's [`IntoBytes`], which lets a
    /// `#[repr(C)]` vertex struct slice be staged in one call.
    fn write_slice<T: IntoBytes + Immutable>(&mut self, values: &[T]) -> Result<()>
    where
        Self: Sized,
    {
        self.write_bytes(values.as_bytes())
    }

    /// Read a `u8` at the cursor and advance past it.
    fn read_u8(&mut self) -> Result<u8> {
        let position = self.check_remaining(1)?;
        let value = self.read_u8_at(position)?;
        self.set_position(position + 1);
        Ok(value)
    }

    /// Read a `u8` at `offset` without touching the cursor.
    fn read_u8_at(&self, offset: usize) -> Result<u8> {
        self.check_offset(offset, 1)?;
        Ok(self.data()[offset])
    }

    /// Write a `u8` at the cursor and advance past it.
    fn write_u8(&mut self, value: u8) -> Result<()> {
        let position = self.check_remaining(1)?;
        self.write_u8_at(position, value)?;
        self.set_position(position + 1);
        Ok(())
    }

    /// Write a `u8` at `offset` without touching the cursor.
    fn write_u8_at(&mut self, offset: usize, value: u8) -> Result<()> {
        self.check_offset(offset, 1)?;
        self.data_mut()[offset] = value;
        Ok(())
    }

    /// Read an `i8` at the cursor and advance past it.
    #[inline]
    fn read_i8(&mut self) -> Result<i8> {
        self.read_u8().map(|v| v as i8)
    }

    /// Read an `i8` at `offset` without touching the cursor.
    #[inline]
    fn read_i8_at(&self, offset: usize) -> Result<i8> {
        self.read_u8_at(offset).map(|v| v as i8)
    }

    /// Write an `i8` at the cursor and advance past it.
    #[inline]
    fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Write an `i8` at `offset` without touching the cursor.
    #[inline]
    fn write_i8_at(&mut self, offset: usize, value: i8) -> Result<()> {
        self.write_u8_at(offset, value as u8)
    }

    /// Read a `u16` at the cursor and advance past it.
    fn read_u16(&mut self) -> Result<u16> {
        let position = self.check_remaining(2)?;
        let value = self.read_u16_at(position)?;
        self.set_position(position + 2);
        Ok(value)
    }

    /// Read a `u16` at `offset` without touching the cursor.
    fn read_u16_at(&self, offset: usize) -> Result<u16> {
        self.check_offset(offset, 2)?;
        let bytes = self.data();
        Ok(u16::from_ne_bytes([bytes[offset], bytes[offset + 1]]))
    }

    /// Write a `u16` at the cursor and advance past it.
    fn write_u16(&mut self, value: u16) -> Result<()> {
        let position = self.check_remaining(2)?;
        self.write_u16_at(position, value)?;
        self.set_position(position + 2);
        Ok(())
    }

    /// Write a `u16` at `offset` without touching the cursor.
    fn write_u16_at(&mut self, offset: usize, value: u16) -> Result<()> {
        self.check_offset(offset, 2)?;
        self.data_mut()[offset..offset + 2].copy_from_slice(&value.to_ne_bytes());
        Ok(())
    }

    /// Read an `i16` at the cursor and advance past it.
    #[inline]
    fn read_i16(&mut self) -> Result<i16> {
        self.read_u16().map(|v| v as i16)
    }

    /// Read an `i16` at `offset` without touching the cursor.
    #[inline]
    fn read_i16_at(&self, offset: usize) -> Result<i16> {
        self.read_u16_at(offset).map(|v| v as i16)
    }

    /// Write an `i16` at the cursor and advance past it.
    #[inline]
    fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_u16(value as u16)
    }

    /// Write an `i16` at `offset` without touching the cursor.
    #[inline]
    fn write_i16_at(&mut self, offset: usize, value: i16) -> Result<()> {
        self.write_u16_at(offset, value as u16)
    }

    /// Read a `u32` at the cursor and advance past it.
    fn read_u32(&mut self) -> Result<u32> {
        let position = self.check_remaining(4)?;
        let value = self.read_u32_at(position)?;
        self.set_position(position + 4);
        Ok(value)
    }

    /// Read a `u32` at `offset` without touching the cursor.
    fn read_u32_at(&self, offset: usize) -> Result<u32> {
        self.check_offset(offset, 4)?;
        let bytes = self.data();
        Ok(u32::from_ne_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ]))
    }

    /// Write a `u32` at the cursor and advance past it.
    fn write_u32(&mut self, value: u32) -> Result<()> {
        let position = self.check_remaining(4)?;
        self.write_u32_at(position, value)?;
        self.set_position(position + 4);
        Ok(())
    }

    /// Write a `u32` at `offset` without touching the cursor.
    fn write_u32_at(&mut self, offset: usize, value: u32) -> Result<()> {
        self.check_offset(offset, 4)?;
        self.data_mut()[offset..offset + 4].copy_from_slice(&value.to_ne_bytes());
        Ok(())
    }

    /// Read an `i32` at the cursor and advance past it.
    #[inline]
    fn read_i32(&mut self) -> Result<i32> {
        self.read_u32().map(|v| v as i32)
    }

    /// Read an `i32` at `offset` without touching the cursor.
    #[inline]
    fn read_i32_at(&self, offset: usize) -> Result<i32> {
        self.read_u32_at(offset).map(|v| v as i32)
    }

    /// Write an `i32` at the cursor and advance past it.
    #[inline]
    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_u32(value as u32)
    }

    /// Write an `i32` at `offset` without touching the cursor.
    #[inline]
    fn write_i32_at(&mut self, offset: usize, value: i32) -> Result<()> {
        self.write_u32_at(offset, value as u32)
    }

    /// Read a `u64` at the cursor and advance past it.
    fn read_u64(&mut self) -> Result<u64> {
        let position = self.check_remaining(8)?;
        let value = self.read_u64_at(position)?;
        self.set_position(position + 8);
        Ok(value)
    }

    /// Read a `u64` at `offset` without touching the cursor.
    fn read_u64_at(&self, offset: usize) -> Result<u64> {
        self.check_offset(offset, 8)?;
        let bytes = self.data();
        Ok(u64::from_ne_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
            bytes[offset + 4],
            bytes[offset + 5],
            bytes[offset + 6],
            bytes[offset + 7],
        ]))
    }

    /// Write a `u64` at the cursor and advance past it.
    fn write_u64(&mut self, value: u64) -> Result<()> {
        let position = self.check_remaining(8)?;
        self.write_u64_at(position, value)?;
        self.set_position(position + 8);
        Ok(())
    }

    /// Write a `u64` at `offset` without touching the cursor.
    fn write_u64_at(&mut self, offset: usize, value: u64) -> Result<()> {
        self.check_offset(offset, 8)?;
        self.data_mut()[offset..offset + 8].copy_from_slice(&value.to_ne_bytes());
        Ok(())
    }

    /// Read an `i64` at the cursor and advance past it.
    #[inline]
    fn read_i64(&mut self) -> Result<i64> {
        self.read_u64().map(|v| v as i64)
    }

    /// Read an `i64` at `offset` without touching the cursor.
    #[inline]
    fn read_i64_at(&self, offset: usize) -> Result<i64> {
        self.read_u64_at(offset).map(|v| v as i64)
    }

    /// Write an `i64` at the cursor and advance past it.
    #[inline]
    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_u64(value as u64)
    }

    /// Write an `i64` at `offset` without touching the cursor.
    #[inline]
    fn write_i64_at(&mut self, offset: usize, value: i64) -> Result<()> {
        self.write_u64_at(offset, value as u64)
    }

    /// Read an `f32` at the cursor and advance past it.
    #[inline]
    fn read_f32(&mut self) -> Result<f32> {
        self.read_u32().map(f32::from_bits)
    }

    /// Read an `f32` at `offset` without touching the cursor.
    #[inline]
    fn read_f32_at(&self, offset: usize) -> Result<f32> {
        self.read_u32_at(offset).map(f32::from_bits)
    }

    /// Write an `f32` at the cursor and advance past it.
    #[inline]
    fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_u32(value.to_bits())
    }

    /// Write an `f32` at `offset` without touching the cursor.
    #[inline]
    fn write_f32_at(&mut self, offset: usize, value: f32) -> Result<()> {
        self.write_u32_at(offset, value.to_bits())
    }

    /// Read an `f64` at the cursor and advance past it.
    #[inline]
    fn read_f64(&mut self) -> Result<f64> {
        self.read_u64().map(f64::from_bits)
    }

    /// Read an `f64` at `offset` without touching the cursor.
    #[inline]
    fn read_f64_at(&self, offset: usize) -> Result<f64> {
        self.read_u64_at(offset).map(f64::from_bits)
    }

    /// Write an `f64` at the cursor and advance past it.
    #[inline]
    fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_u64(value.to_bits())
    }

    /// Write an `f64` at `offset` without touching the cursor.
    #[inline]
    fn write_f64_at(&mut self, offset: usize, value: f64) -> Result<()> {
        self.write_u64_at(offset, value.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use zerocopy::{Immutable, IntoBytes};

    use super::*;
    use crate::HeapBuffer;

    #[test]
    fn test_fill_flip_drain() {
        let mut buffer = HeapBuffer::new(16);
        assert_eq!(buffer.position(), 0);
        assert_eq!(buffer.limit(), 16);
        assert_eq!(buffer.capacity(), 16);

        buffer.write_i32(0x0A0B0C0D).unwrap();
        assert_eq!(buffer.position(), 4);

        buffer.flip();
        assert_eq!(buffer.position(), 0);
        assert_eq!(buffer.limit(), 4);

        assert_eq!(buffer.read_i32().unwrap(), 0x0A0B0C0D);
        assert!(!buffer.has_remaining());
        assert!(matches!(
            buffer.read_i32(),
            Err(Error::Exhausted {
                position: 4,
                needed: 4,
                limit: 4,
            })
        ));
    }

    #[test]
    fn test_i64_bit_patterns() {
        let patterns = [0, -1, i64::MIN, i64::MAX, 0x0123_4567_89AB_CDEF];
        let mut buffer = HeapBuffer::new(64);

        for &value in &patterns {
            buffer.write_i64(value).unwrap();
        }
        buffer.flip();
        for &value in &patterns {
            assert_eq!(buffer.read_i64().unwrap(), value);
        }

        for (slot, &value) in patterns.iter().enumerate() {
            buffer.write_i64_at(slot * 8, value).unwrap();
            assert_eq!(buffer.read_i64_at(slot * 8).unwrap(), value);
        }
    }

    #[test]
    fn test_float_round_trip() {
        let mut buffer = HeapBuffer::new(12);
        buffer.write_f32(1.5).unwrap();
        buffer.write_f64(-0.25).unwrap();
        buffer.flip();
        assert_eq!(buffer.read_f32().unwrap(), 1.5);
        assert_eq!(buffer.read_f64().unwrap(), -0.25);
    }

    #[test]
    fn test_indexed_access_ignores_cursor() {
        let mut buffer = HeapBuffer::new(8);
        buffer.write_u16_at(6, 0xBEEF).unwrap();
        assert_eq!(buffer.position(), 0);
        assert_eq!(buffer.read_u16_at(6).unwrap(), 0xBEEF);
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn test_indexed_out_of_bounds() {
        let mut buffer = HeapBuffer::new(8);
        let err = buffer.write_u32_at(6, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfBounds {
                offset: 6,
                needed: 4,
                capacity: 8,
            }
        ));
        // The failed write must not leave partial bytes behind.
        assert_eq!(buffer.data(), &[0u8; 8]);
    }

    #[test]
    fn test_lazy_position_validation() {
        let mut buffer = HeapBuffer::new(16);
        buffer.set_position(1000);
        assert_eq!(buffer.position(), 1000);

        let err = buffer.read_u8().unwrap_err();
        assert!(matches!(err, Error::Exhausted { position: 1000, .. }));
        // A failed sequential access leaves the cursor where it was.
        assert_eq!(buffer.position(), 1000);
    }

    #[test]
    fn test_clear_resets_limit() {
        let mut buffer = HeapBuffer::new(8);
        buffer.write_u32(42).unwrap();
        buffer.flip();
        assert_eq!(buffer.limit(), 4);

        buffer.clear();
        assert_eq!(buffer.position(), 0);
        assert_eq!(buffer.limit(), 8);
        // Clearing does not scrub the bytes.
        assert_eq!(buffer.read_u32().unwrap(), 42);
    }

    #[test]
    fn test_rewind_rereads_active_range() {
        let mut buffer = HeapBuffer::new(8);
        buffer.write_u32(7).unwrap();
        buffer.flip();
        assert_eq!(buffer.read_u32().unwrap(), 7);

        buffer.rewind();
        assert_eq!(buffer.limit(), 4);
        assert_eq!(buffer.read_u32().unwrap(), 7);
    }

    #[test]
    fn test_write_slice_of_vertices() {
        #[derive(IntoBytes, Immutable)]
        #[repr(C)]
        struct Vertex {
            x: f32,
            y: f32,
        }

        let triangle = [
            Vertex { x: 0.0, y: 0.0 },
            Vertex { x: 1.0, y: 0.0 },
            Vertex { x: 1.0, y: 1.0 },
        ];

        let mut buffer = HeapBuffer::new(32);
        buffer.write_slice(&triangle).unwrap();
        assert_eq!(buffer.position(), 24);

        buffer.flip();
        assert_eq!(buffer.read_f32().unwrap(), 0.0);
        assert_eq!(buffer.read_f32().unwrap(), 0.0);
        assert_eq!(buffer.read_f32().unwrap(), 1.0);
    }

    #[test]
    fn test_read_bytes_borrow() {
        let mut buffer = HeapBuffer::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(buffer.read_bytes(3).unwrap(), &[1, 2, 3]);
        assert_eq!(buffer.position(), 3);
        assert!(buffer.read_bytes(3).is_err());
    }

    #[test]
    fn test_write_bytes_exhausted_leaves_state() {
        let mut buffer = HeapBuffer::new(4);
        buffer.write_u8(9).unwrap();
        let err = buffer.write_bytes(&[1, 2, 3, 4]).unwrap_err();
        assert!(matches!(
            err,
            Error::Exhausted {
                position: 1,
                needed: 4,
                limit: 4,
            }
        ));
        assert_eq!(buffer.position(), 1);
        assert_eq!(buffer.data(), &[9, 0, 0, 0]);
    }

    #[test]
    fn test_remaining_bytes_window() {
        let mut buffer = HeapBuffer::from_vec(vec![10, 20, 30, 40]);
        buffer.set_position(1);
        buffer.set_limit(3);
        assert_eq!(buffer.remaining_bytes(), &[20, 30]);

        // Degenerate cursor states clamp instead of panicking.
        buffer.set_position(9);
        assert_eq!(buffer.remaining_bytes(), &[] as &[u8]);
        buffer.set_limit(100);
        buffer.set_position(2);
        assert_eq!(buffer.remaining_bytes(), &[30, 40]);
    }
}
