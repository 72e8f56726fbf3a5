//! A pure cursor over an in-memory byte buffer.
//!
//! The cursor is a `Copy` value pairing the buffer with a position.
//! Each read is a pure function from a cursor to the decoded value and
//! the advanced cursor, so decode steps can be composed without a
//! mutable offset variable and without intermediate copies: value data
//! is handed out as sub-slices of the original buffer.

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;

/// A read position over a byte buffer.
///
/// All reads are bounds-checked: a read past the end of the buffer
/// returns `None` and the original cursor remains usable.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the given buffer.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Retrieve the current position, in bytes from the buffer start.
    #[inline]
    pub fn position(self) -> usize {
        self.pos
    }

    /// Retrieve the number of bytes left to read.
    #[inline]
    pub fn remaining(self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check whether the cursor is at the end of the buffer.
    #[inline]
    pub fn is_at_end(self) -> bool {
        self.pos == self.buf.len()
    }

    /// Take the next `n` bytes as a sub-slice of the buffer,
    /// returning it with the advanced cursor.
    #[inline]
    pub fn take(self, n: usize) -> Option<(&'a [u8], Cursor<'a>)> {
        if n > self.remaining() {
            return None;
        }
        let slice = &self.buf[self.pos..self.pos + n];
        Some((
            slice,
            Cursor {
                buf: self.buf,
                pos: self.pos + n,
            },
        ))
    }

    /// Advance the cursor by `n` bytes without reading.
    #[inline]
    pub fn skip(self, n: usize) -> Option<Cursor<'a>> {
        self.take(n).map(|(_, c)| c)
    }

    /// Take all bytes left in the buffer,
    /// leaving the cursor at the end.
    #[inline]
    pub fn take_remaining(self) -> (&'a [u8], Cursor<'a>) {
        let slice = &self.buf[self.pos..];
        (
            slice,
            Cursor {
                buf: self.buf,
                pos: self.buf.len(),
            },
        )
    }

    /// Read one byte.
    #[inline]
    pub fn read_u8(self) -> Option<(u8, Cursor<'a>)> {
        let (bytes, next) = self.take(1)?;
        Some((bytes[0], next))
    }

    /// Read a 16-bit unsigned integer in the given byte order.
    #[inline]
    pub fn read_u16(self, byte_order: Endianness) -> Option<(u16, Cursor<'a>)> {
        let (bytes, next) = self.take(2)?;
        let value = match byte_order {
            Endianness::Little => LittleEndian::read_u16(bytes),
            Endianness::Big => BigEndian::read_u16(bytes),
        };
        Some((value, next))
    }

    /// Read a 32-bit unsigned integer in the given byte order.
    #[inline]
    pub fn read_u32(self, byte_order: Endianness) -> Option<(u32, Cursor<'a>)> {
        let (bytes, next) = self.take(4)?;
        let value = match byte_order {
            Endianness::Little => LittleEndian::read_u32(bytes),
            Endianness::Big => BigEndian::read_u32(bytes),
        };
        Some((value, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_thread_the_cursor() {
        let data = [0x02, 0x00, 0x10, 0x00, 0x14, 0x00, 0x00, 0x00];
        let cursor = Cursor::new(&data);

        let (group, cursor) = cursor.read_u16(Endianness::Little).unwrap();
        let (element, cursor) = cursor.read_u16(Endianness::Little).unwrap();
        let (len, cursor) = cursor.read_u32(Endianness::Little).unwrap();
        assert_eq!(group, 0x0002);
        assert_eq!(element, 0x0010);
        assert_eq!(len, 20);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn byte_order_is_honored() {
        let data = [0x00, 0x08];
        let cursor = Cursor::new(&data);
        assert_eq!(cursor.read_u16(Endianness::Little).unwrap().0, 0x0800);
        assert_eq!(cursor.read_u16(Endianness::Big).unwrap().0, 0x0008);
    }

    #[test]
    fn out_of_bounds_reads_return_none() {
        let data = [0x01, 0x02];
        let cursor = Cursor::new(&data);
        assert!(cursor.read_u32(Endianness::Little).is_none());
        assert!(cursor.take(3).is_none());
        // the original cursor is still usable after a failed read
        assert_eq!(cursor.read_u16(Endianness::Little).unwrap().0, 0x0201);
    }

    #[test]
    fn take_remaining_drains_the_buffer() {
        let data = [1, 2, 3, 4, 5];
        let cursor = Cursor::new(&data).skip(2).unwrap();
        let (rest, cursor) = cursor.take_remaining();
        assert_eq!(rest, &[3, 4, 5]);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), 0);
    }
}
