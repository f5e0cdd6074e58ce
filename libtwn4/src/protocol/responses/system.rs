// libtwn4/src/protocol/responses/system.rs

//! System reply decoders.

use crate::Result;
use crate::protocol::ResponseParser;
use crate::types::ReaderError;

/// GetSysTicks payload: u32 milliseconds.
pub fn decode_sys_ticks(parser: &mut ResponseParser) -> Result<u32> {
    parser.read_u32()
}

/// GetVersionString payload: length-prefixed ASCII.
pub fn decode_version_string(parser: &mut ResponseParser) -> Result<String> {
    parser.read_ascii()
}

/// GetLastError payload: u32 firmware fault code.
pub fn decode_last_error(parser: &mut ResponseParser) -> Result<ReaderError> {
    Ok(ReaderError::from_code(parser.read_u32()?))
}
