// libtwn4/src/protocol/commands/iso14443.rs

//! ISO14443 requests.

use super::Command;
use crate::Result;
use crate::constants::{
    API_ISO14443, GET_ATS_MAX_LEN, ISO14443_3_TDX, ISO14443_4_TDX, ISO14443_GET_ATS,
    ISO14443_GET_SAK, ISO14443A_SEARCH_MULTI_TAG, RATS_FRAME, RATS_MAX_RX, RATS_TIMEOUT,
};

/// GetATS of the currently selected layer-4 card.
pub fn encode_get_ats(max_len: u8) -> Command {
    Command::new(API_ISO14443, ISO14443_GET_ATS).u8(max_len)
}

/// GetSAK of the currently selected ISO14443A card.
pub fn encode_get_sak() -> Command {
    Command::new(API_ISO14443, ISO14443_GET_SAK)
}

/// Raw ISO14443-3 exchange: `tx` (with CRC), receive limit, timeout.
pub fn encode_iso14443_3_transceive(tx: &[u8], max_rx: u8, timeout: u16) -> Result<Command> {
    Ok(Command::new(API_ISO14443, ISO14443_3_TDX)
        .var_bytes(tx)?
        .u8(max_rx)
        .u16(timeout))
}

/// Layer-4 exchange carrying an APDU or native command.
pub fn encode_iso14443_4_transceive(tx: &[u8], max_rx: u8) -> Result<Command> {
    Ok(Command::new(API_ISO14443, ISO14443_4_TDX)
        .var_bytes(tx)?
        .u8(max_rx))
}

/// RATS wrapped in an ISO14443-3 exchange.
pub fn encode_rats() -> Command {
    Command::new(API_ISO14443, ISO14443_3_TDX)
        .u8(RATS_FRAME.len() as u8)
        .fixed(&RATS_FRAME)
        .u8(RATS_MAX_RX)
        .u16(RATS_TIMEOUT)
}

/// ISO14443A multi-tag search, returning at most `max_id_bytes` of ids.
pub fn encode_search_multi_tag(max_id_bytes: u8) -> Command {
    Command::new(API_ISO14443, ISO14443A_SEARCH_MULTI_TAG).u8(max_id_bytes)
}

/// GetATS with the default length limit.
pub fn encode_get_ats_default() -> Command {
    encode_get_ats(GET_ATS_MAX_LEN)
}
