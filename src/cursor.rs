use crate::endian;
use crate::error::{ParseError, Result};

/// Sequential reader over an in-memory buffer.
///
/// Every parser attempt gets its own cursor, so positions never leak between
/// attempts. Reads and seeks that would leave `[0, len]` fail without moving
/// the position.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(ParseError::UnexpectedEof {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    #[inline]
    pub fn read_be_u16(&mut self) -> Result<u16> {
        self.read_array().map(endian::be_u16)
    }

    #[inline]
    pub fn read_be_u32(&mut self) -> Result<u32> {
        self.read_array().map(endian::be_u32)
    }

    #[inline]
    pub fn read_le_u16(&mut self) -> Result<u16> {
        self.read_array().map(endian::le_u16)
    }

    #[inline]
    pub fn read_le_u32(&mut self) -> Result<u32> {
        self.read_array().map(endian::le_u32)
    }

    #[inline]
    pub fn read_le_i32(&mut self) -> Result<i32> {
        self.read_array().map(endian::le_i32)
    }

    /// Moves the position by `delta` bytes. Landing exactly on `len` is allowed.
    pub fn seek_relative(&mut self, delta: i64) -> Result<()> {
        let target = i64::try_from(self.pos)
            .ok()
            .and_then(|pos| pos.checked_add(delta))
            .and_then(|t| usize::try_from(t).ok())
            .filter(|&t| t <= self.data.len());

        match target {
            Some(t) => {
                self.pos = t;
                Ok(())
            }
            None => Err(ParseError::SeekOutOfBounds {
                offset: self.pos,
                delta,
                len: self.data.len(),
            }),
        }
    }

    pub fn skip(&mut self, n: u64) -> Result<()> {
        let delta = i64::try_from(n).map_err(|_| ParseError::SeekOutOfBounds {
            offset: self.pos,
            delta: i64::MAX,
            len: self.data.len(),
        })?;
        self.seek_relative(delta)
    }

    /// Consumes `signature.len()` bytes and reports whether they match.
    ///
    /// A buffer too short to hold the signature is a mismatch, not an error.
    pub fn match_signature(&mut self, signature: &[u8]) -> bool {
        match self.read_slice(signature.len()) {
            Ok(bytes) => bytes == signature,
            Err(_) => false,
        }
    }
}
