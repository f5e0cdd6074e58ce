//! Hex helpers for log lines and command-line input.

use crate::{Error, Result};

/// Uppercase hex without separators, the way bytes travel on the wire.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Uppercase hex with a single space between bytes, for logging.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex typed by a user; ASCII whitespace between digits is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    ::hex::decode(&cleaned).map_err(|e| Error::InvalidParameter(format!("'{}': {}", s, e)))
}
