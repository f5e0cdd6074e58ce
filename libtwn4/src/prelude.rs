// libtwn4/src/prelude.rs

//! Common imports.

pub use crate::card::{Chip, ChipSubType, IdentificationEvidence};
#[cfg(feature = "async")]
pub use crate::device::AsyncReader;
pub use crate::device::{Reader, ReaderBuilder};
pub use crate::protocol::{Command, ResponseParser, TagInfo, TagTypes};
#[cfg(feature = "serial")]
pub use crate::transport::SerialPortLink;
pub use crate::transport::{PortResolver, SerialLink, SessionConfig};
pub use crate::{
    ChipType, Error, HfTagTypes, LfTagTypes, ReaderError, ResponseError, Result, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms, parse_hex};
