use crate::cursor::ByteReader;
use crate::error::DecodeError;

pub(crate) struct SliceCursor<'a> {
    slice: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(slice: &'a [u8]) -> Self {
        SliceCursor { slice, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }
}

impl ByteReader for SliceCursor<'_> {
    fn take(&mut self, n: usize) -> Result<&[u8], DecodeError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DecodeError::UnexpectedEof {
                wanted: n,
                remaining,
            });
        }
        let bytes = &self.slice[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn more(&self) -> bool {
        self.pos < self.slice.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_values() {
        let data = [
            0x07, 0xd0, // 2000
            0xff, 0xff, 0xb9, 0xb0, // -18000
            0x00, 0x03, b'E', b'S', b'T', // "EST"
            0x2a, // 42
        ];
        let mut cursor = SliceCursor::new(&data);
        assert!(cursor.more());
        assert_eq!(cursor.read_s2().unwrap(), 2000);
        assert_eq!(cursor.read_s4().unwrap(), -18000);
        assert_eq!(cursor.read_utf().unwrap(), "EST");
        assert_eq!(cursor.read_u1().unwrap(), 42);
        assert!(!cursor.more());
    }

    #[test]
    fn negative_two_byte_value() {
        let mut cursor = SliceCursor::new(&[0xff, 0xfe]);
        assert_eq!(cursor.read_s2().unwrap(), -2);
    }

    #[test]
    fn truncated_reads_fail() {
        let mut cursor = SliceCursor::new(&[0x00, 0x05, b'a', b'b']);
        match cursor.read_utf() {
            Err(DecodeError::UnexpectedEof { wanted, remaining }) => {
                assert_eq!(wanted, 5);
                assert_eq!(remaining, 2);
            }
            other => panic!("unexpected {:?}", other),
        }

        let mut cursor = SliceCursor::new(&[0x01]);
        assert!(cursor.read_s4().is_err());
    }

    #[test]
    fn invalid_utf8_fails() {
        let mut cursor = SliceCursor::new(&[0x00, 0x01, 0xff]);
        assert!(matches!(
            cursor.read_utf(),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }
}
