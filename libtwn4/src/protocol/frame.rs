// libtwn4/src/protocol/frame.rs

//! Hex-ASCII framing of binary messages.

use crate::{Error, Result};

/// Simple Protocol line helper. A frame is the payload written as two
/// uppercase hex digits per byte; the `\r` terminator is added and
/// stripped by the session, not here.
pub struct Frame;

impl Frame {
    /// Encode raw bytes into a hex line (no terminator).
    pub fn encode(payload: &[u8]) -> String {
        hex::encode_upper(payload)
    }

    /// Decode a hex line back into bytes. Accepts either case; odd
    /// length or non-hex characters are rejected.
    pub fn decode(line: &str) -> Result<Vec<u8>> {
        hex::decode(line).map_err(|e| Error::FrameDecode(format!("{} in {:?}", e, line)))
    }

    /// Encode and append the line terminator.
    pub fn encode_line(payload: &[u8]) -> String {
        let mut line = Self::encode(payload);
        line.push(crate::constants::LINE_TERMINATOR);
        line
    }

    /// Strip trailing terminator/whitespace from a received line and decode.
    pub fn decode_line(line: &str) -> Result<Vec<u8>> {
        Self::decode(line.trim_end_matches(['\r', '\n']))
    }
}
