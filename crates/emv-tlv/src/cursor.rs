//! Read position over a borrowed byte buffer

/// Forward-only cursor used by the tag, length and TLV decoders
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Read one byte, or `None` once the buffer is exhausted
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.buffer.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    /// Read exactly `count` bytes, or `None` without advancing if fewer remain
    pub fn read_bytes(&mut self, count: usize) -> Option<&'a [u8]> {
        if count > self.remaining() {
            return None;
        }
        let start = self.position;
        self.position += count;
        Some(&self.buffer[start..start + count])
    }

    /// Read `count` bytes, clamped to whatever remains
    pub fn read_up_to(&mut self, count: usize) -> &'a [u8] {
        let count = count.min(self.remaining());
        let start = self.position;
        self.position += count;
        &self.buffer[start..start + count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_byte_until_exhausted() {
        let mut cursor = ByteCursor::new(&[0x01, 0x02]);
        assert_eq!(cursor.read_byte(), Some(0x01));
        assert_eq!(cursor.read_byte(), Some(0x02));
        assert_eq!(cursor.read_byte(), None);
        assert!(!cursor.has_remaining());
    }

    #[test]
    fn test_read_bytes_does_not_advance_on_short_buffer() {
        let mut cursor = ByteCursor::new(&[0x01, 0x02, 0x03]);
        assert_eq!(cursor.read_bytes(4), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_bytes(2), Some(&[0x01, 0x02][..]));
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_read_up_to_clamps() {
        let mut cursor = ByteCursor::new(&[0xAA, 0xBB]);
        assert_eq!(cursor.read_up_to(10), &[0xAA, 0xBB]);
        assert_eq!(cursor.read_up_to(1), &[] as &[u8]);
    }
}
