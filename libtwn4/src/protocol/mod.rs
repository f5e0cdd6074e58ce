// libtwn4/src/protocol/mod.rs

//! Simple Protocol framing, request encoding and response decoding.

pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::Command;
pub use frame::Frame;
pub use parser::ResponseParser;
pub use responses::{TagInfo, TagTypes, expect_success};
