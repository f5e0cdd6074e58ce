// libtwn4/src/protocol/responses/iso14443.rs

//! ISO14443 reply decoders.

use crate::Result;
use crate::protocol::ResponseParser;
use crate::types::Uid;

/// GetSAK payload: `ok`, SAK byte. `Ok(None)` when the reader has no
/// selected ISO14443A card.
pub fn decode_sak(parser: &mut ResponseParser) -> Result<Option<u8>> {
    if !parser.read_bool()? {
        return Ok(None);
    }
    Ok(Some(parser.read_u8()?))
}

/// Transceive and GetATS payload: `ok`, then variable bytes.
pub fn decode_transceive(parser: &mut ResponseParser) -> Result<Option<Vec<u8>>> {
    if !parser.read_bool()? {
        return Ok(None);
    }
    Ok(Some(parser.read_var_bytes()?))
}

/// SearchMultiTag payload: `found`, count, then one variable-length id
/// per tag.
pub fn decode_multi_tag(parser: &mut ResponseParser) -> Result<Vec<Uid>> {
    if !parser.read_bool()? {
        return Ok(Vec::new());
    }
    let count = parser.read_u8()? as usize;
    let mut uids = Vec::with_capacity(count);
    for _ in 0..count {
        uids.push(Uid::from_bytes(parser.read_var_bytes()?));
    }
    Ok(uids)
}
