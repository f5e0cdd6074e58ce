// libtwn4/src/protocol/parser.rs

//! Cursor over a decoded response.

use crate::{Error, Result};

/// Forward-only cursor over a decoded response. Every read is bounds
/// checked and atomic: on `ShortResponse` the cursor does not move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseParser {
    data: Vec<u8>,
    pos: usize,
}

impl ResponseParser {
    /// Cursor at offset 0.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor offset from the start of the response.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True once every byte was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Unread bytes.
    pub fn rest(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    /// The whole response, including bytes already consumed.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give back the response bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    fn ensure(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(Error::ShortResponse {
                expected: n,
                actual: self.remaining(),
            });
        }
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&[u8]> {
        self.ensure(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..start + n])
    }

    /// One byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let b = self.take(1)?;
        Ok(b[0])
    }

    /// Little-endian 16-bit word.
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Little-endian 32-bit word.
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Exactly `n` bytes.
    pub fn read_fixed(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.take(n)?.to_vec())
    }

    /// One length byte followed by that many bytes. The length byte is
    /// only consumed if the payload is complete.
    pub fn read_var_bytes(&mut self) -> Result<Vec<u8>> {
        self.ensure(1)?;
        let len = self.data[self.pos] as usize;
        self.ensure(1 + len)?;
        self.pos += 1;
        self.read_fixed(len)
    }

    /// Length-prefixed ASCII text.
    pub fn read_ascii(&mut self) -> Result<String> {
        let start = self.pos;
        let bytes = self.read_var_bytes()?;
        if !bytes.is_ascii() {
            self.pos = start;
            return Err(Error::MalformedResponse(format!(
                "non-ascii string: {}",
                crate::utils::bytes_to_hex_spaced(&bytes)
            )));
        }
        // ascii is always valid utf-8
        Ok(bytes.iter().map(|&b| b as char).collect())
    }
}

impl From<Vec<u8>> for ResponseParser {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}
