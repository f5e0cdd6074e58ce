// libtwn4/src/protocol/commands/mod.rs

//! Request encoders.

pub mod iso14443;
pub mod rf;
pub mod system;

pub use iso14443::{
    encode_get_ats, encode_get_ats_default, encode_get_sak, encode_iso14443_3_transceive,
    encode_iso14443_4_transceive, encode_rats, encode_search_multi_tag,
};
pub use rf::{
    encode_get_supported_tag_types, encode_get_tag_types, encode_search_tag, encode_set_rf_off,
    encode_set_tag_types,
};
pub use system::{encode_get_last_error, encode_get_sys_ticks, encode_get_version_string};

use crate::constants::MAX_VAR_BYTES_LEN;
use crate::{Error, Result};

/// A remote call: `[api_group, function, params...]`. Multi-byte
/// parameters are little-endian; variable-length fields carry a one byte
/// length prefix. New functions get a per-group encoder in
/// `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    bytes: Vec<u8>,
}

impl Command {
    /// Call with no parameters yet.
    pub fn new(api_group: u8, function: u8) -> Self {
        Self {
            bytes: vec![api_group, function],
        }
    }

    /// Wrap pre-built bytes (e.g. a command captured from another tool).
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < 2 {
            return Err(Error::InvalidParameter(
                "command needs api group and function".into(),
            ));
        }
        Ok(Self { bytes })
    }

    /// Append one byte.
    pub fn u8(mut self, value: u8) -> Self {
        self.bytes.push(value);
        self
    }

    /// Append a little-endian u16.
    pub fn u16(mut self, value: u16) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Append a little-endian u32.
    pub fn u32(mut self, value: u32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Append 0x00 or 0x01.
    pub fn bool(self, value: bool) -> Self {
        self.u8(value as u8)
    }

    /// Append bytes without a length prefix.
    pub fn fixed(mut self, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(data);
        self
    }

    /// Append a length-prefixed field (at most 255 bytes).
    pub fn var_bytes(mut self, data: &[u8]) -> Result<Self> {
        if data.len() > MAX_VAR_BYTES_LEN {
            return Err(Error::InvalidParameter(format!(
                "variable field of {} bytes exceeds {}",
                data.len(),
                MAX_VAR_BYTES_LEN
            )));
        }
        self.bytes.push(data.len() as u8);
        self.bytes.extend_from_slice(data);
        Ok(self)
    }

    /// First byte.
    pub fn api_group(&self) -> u8 {
        self.bytes[0]
    }

    /// Second byte.
    pub fn function(&self) -> u8 {
        self.bytes[1]
    }

    /// Encoded request.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Raw bytes ready for framing.
    pub fn encode(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}
