use crate::error::DecodeError;

/// Sequential big-endian reader over an encoded byte stream.
pub(crate) trait ByteReader {
    /// Take the next `n` bytes.
    fn take(&mut self, n: usize) -> Result<&[u8], DecodeError>;

    /// Whether any bytes remain.
    fn more(&self) -> bool;

    fn read_u1(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn read_u2(&mut self) -> Result<u16, DecodeError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn read_s2(&mut self) -> Result<i16, DecodeError> {
        let b = self.take(2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    fn read_s4(&mut self) -> Result<i32, DecodeError> {
        let b = self.take(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// UTF-8 string prefixed with its byte length as an unsigned 2-byte integer.
    fn read_utf(&mut self) -> Result<String, DecodeError> {
        let len = self.read_u2()? as usize;
        let bytes = self.take(len)?.to_vec();
        Ok(String::from_utf8(bytes)?)
    }
}
