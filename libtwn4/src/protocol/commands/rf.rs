// libtwn4/src/protocol/commands/rf.rs

//! RF and tag search requests.

use super::Command;
use crate::constants::{
    API_RF, RF_GET_SUPPORTED_TAG_TYPES, RF_GET_TAG_TYPES, RF_SEARCH_TAG, RF_SET_RF_OFF,
    RF_SET_TAG_TYPES,
};
use crate::types::{HfTagTypes, LfTagTypes};

/// SearchTag: look for any enabled transponder type, returning at most
/// `max_id_bytes` of id.
pub fn encode_search_tag(max_id_bytes: u8) -> Command {
    Command::new(API_RF, RF_SEARCH_TAG).u8(max_id_bytes)
}

/// SetRFOff
pub fn encode_set_rf_off() -> Command {
    Command::new(API_RF, RF_SET_RF_OFF)
}

/// SetTagTypes: LF mask first, then HF mask.
pub fn encode_set_tag_types(lf: LfTagTypes, hf: HfTagTypes) -> Command {
    Command::new(API_RF, RF_SET_TAG_TYPES)
        .u32(lf.bits())
        .u32(hf.bits())
}

/// GetTagTypes
pub fn encode_get_tag_types() -> Command {
    Command::new(API_RF, RF_GET_TAG_TYPES)
}

/// GetSupportedTagTypes
pub fn encode_get_supported_tag_types() -> Command {
    Command::new(API_RF, RF_GET_SUPPORTED_TAG_TYPES)
}
