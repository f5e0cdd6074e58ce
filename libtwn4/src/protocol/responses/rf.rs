// libtwn4/src/protocol/responses/rf.rs

//! RF and tag search reply decoders.

use crate::Result;
use crate::protocol::ResponseParser;
use crate::types::{ChipType, HfTagTypes, LfTagTypes, Uid};

/// A transponder found by SearchTag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// Coarse transponder type.
    pub chip_type: ChipType,
    /// Id length in bits as reported by the reader.
    pub id_bit_count: u8,
    /// Id bytes.
    pub uid: Uid,
}

/// LF/HF tag-type masks (GetTagTypes / GetSupportedTagTypes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagTypes {
    /// 125 kHz types.
    pub lf: LfTagTypes,
    /// 13.56 MHz types.
    pub hf: HfTagTypes,
}

/// SearchTag payload: `found`, then chip type, id bit count and the id
/// as variable bytes. `Ok(None)` when nothing is in the field.
pub fn decode_search_tag(parser: &mut ResponseParser) -> Result<Option<TagInfo>> {
    if !parser.read_bool()? {
        return Ok(None);
    }
    let chip_type = ChipType::from_u8(parser.read_u8()?);
    let id_bit_count = parser.read_u8()?;
    let uid = Uid::from_bytes(parser.read_var_bytes()?);
    Ok(Some(TagInfo {
        chip_type,
        id_bit_count,
        uid,
    }))
}

/// Two u32 masks: LF first, then HF.
pub fn decode_tag_types(parser: &mut ResponseParser) -> Result<TagTypes> {
    let lf = LfTagTypes::from_bits_retain(parser.read_u32()?);
    let hf = HfTagTypes::from_bits_retain(parser.read_u32()?);
    Ok(TagTypes { lf, hf })
}
