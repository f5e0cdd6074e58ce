// libtwn4/src/protocol/commands/system.rs

//! System requests.

use super::Command;
use crate::constants::{API_SYS, SYS_GET_LAST_ERROR, SYS_GET_SYS_TICKS, SYS_GET_VERSION_STRING};

/// GetSysTicks: milliseconds since power-up.
pub fn encode_get_sys_ticks() -> Command {
    Command::new(API_SYS, SYS_GET_SYS_TICKS)
}

/// GetVersionString, asking for at most `max_len` characters.
pub fn encode_get_version_string(max_len: u8) -> Command {
    Command::new(API_SYS, SYS_GET_VERSION_STRING).u8(max_len)
}

/// GetLastError: firmware fault code of the previous call.
pub fn encode_get_last_error() -> Command {
    Command::new(API_SYS, SYS_GET_LAST_ERROR)
}
