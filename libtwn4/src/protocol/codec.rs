// libtwn4/src/protocol/codec.rs

//! Command line encoding and response line decoding.

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::parser::ResponseParser;

/// Encode a Command into a wire line (hex + `\r`).
pub fn encode_command_line(cmd: &Command) -> String {
    Frame::encode_line(cmd.as_bytes())
}

/// Decode a received line into a parser positioned at the status byte.
pub fn decode_response_line(line: &str) -> Result<ResponseParser> {
    Ok(ResponseParser::new(Frame::decode_line(line)?))
}
