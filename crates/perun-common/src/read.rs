//! Stream helpers for little-endian asset parsing.

use std::io::{self, Read};

/// Extension trait adding little-endian primitives to any [`Read`].
///
/// Asset containers on disk are little-endian regardless of host order, so
/// parsers read through these instead of the native-order cursor methods.
pub trait ReadExt: Read {
    /// Read a little-endian `u32`.
    #[inline]
    fn read_u32_le(&mut self) -> io::Result<u32> {
        let mut bytes = [0u8; 4];
        self.read_exact(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read exactly `count` bytes into a fresh vector.
    fn read_exact_vec(&mut self, count: usize) -> io::Result<Vec<u8>> {
        let mut bytes = vec![0u8; count];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    /// Discard exactly `count` bytes, failing on a short stream.
    fn skip_bytes(&mut self, count: usize) -> io::Result<()> {
        let mut scratch = [0u8; 64];
        let mut left = count;
        while left > 0 {
            let step = left.min(scratch.len());
            self.read_exact(&mut scratch[..step])?;
            left -= step;
        }
        Ok(())
    }
}

impl<R: Read> ReadExt for R {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u32_le() {
        let data = [0x01u8, 0x02, 0x03, 0x04, 0xFF];
        let mut stream = &data[..];
        assert_eq!(stream.read_u32_le().unwrap(), 0x04030201);
        assert_eq!(stream, &[0xFF]);
    }

    #[test]
    fn test_skip_bytes_spans_scratch() {
        let data = vec![7u8; 200];
        let mut stream = &data[..];
        stream.skip_bytes(130).unwrap();
        assert_eq!(stream.len(), 70);
        assert!(stream.skip_bytes(100).is_err());
    }

    #[test]
    fn test_read_exact_vec_short_stream() {
        let data = [1u8, 2, 3];
        let mut stream = &data[..];
        assert!(stream.read_exact_vec(4).is_err());
    }
}
