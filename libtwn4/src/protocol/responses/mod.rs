// libtwn4/src/protocol/responses/mod.rs

//! Reply decoders and the status check.

pub mod iso14443;
pub mod rf;
pub mod system;

pub use iso14443::{decode_multi_tag, decode_sak, decode_transceive};
pub use rf::{TagInfo, TagTypes, decode_search_tag, decode_tag_types};
pub use system::{decode_last_error, decode_sys_ticks, decode_version_string};

use crate::protocol::ResponseParser;
use crate::types::ResponseError;
use crate::{Error, Result};

/// Consume the status byte every response starts with. Any value other
/// than `ResponseError::None` is returned as `Error::Protocol` carrying the
/// exact code, whatever the rest of the payload holds. Per-function
/// decoders below expect the parser to sit just past this byte.
pub fn expect_success(parser: &mut ResponseParser) -> Result<()> {
    let status = ResponseError::from_u8(parser.read_u8()?);
    if !status.is_ok() {
        return Err(Error::Protocol(status));
    }
    Ok(())
}
