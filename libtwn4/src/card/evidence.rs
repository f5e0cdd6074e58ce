// libtwn4/src/card/evidence.rs

//! Reader calls that collect SAK, ATS and GetVersion for classification.

use crate::Result;
use crate::card::rules::sak_outcome;
use crate::constants::{DESFIRE_GET_VERSION, DESFIRE_GET_VERSION_MAX_RX, GET_ATS_MAX_LEN};
use crate::device::Reader;
use crate::protocol::commands;
use crate::protocol::responses::decode_transceive;
use crate::transport::SerialLink;

/// Replies at or below this length carry at most one ATS byte, so the
/// ATS is fetched separately with GetATS.
const RATS_SHORT_REPLY_LEN: usize = 4;

/// Max id bytes for the search that reselects the card before GetVersion.
const RESELECT_MAX_ID_BYTES: u8 = 0x20;

/// Raw material the classification works from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentificationEvidence {
    /// SAK byte; `None` when the reader reported no ISO14443A answer.
    pub sak: Option<u8>,
    /// ATS bytes, without the transceive length prefix.
    pub ats: Option<Vec<u8>>,
    /// Full layer-4 GetVersion reply, status byte included.
    pub version: Option<Vec<u8>>,
}

impl IdentificationEvidence {
    /// Evidence holding only a SAK.
    pub fn with_sak(sak: u8) -> Self {
        Self {
            sak: Some(sak),
            ..Self::default()
        }
    }

    /// Attach ATS bytes.
    pub fn ats(mut self, ats: impl Into<Vec<u8>>) -> Self {
        self.ats = Some(ats.into());
        self
    }

    /// Attach a GetVersion reply.
    pub fn version(mut self, version: impl Into<Vec<u8>>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Collect SAK and whatever else the SAK rule asks for. Any failing call
/// is returned as is; the caller decides to stay coarse.
pub fn gather_evidence<L: SerialLink>(reader: &mut Reader<L>) -> Result<IdentificationEvidence> {
    let Some(sak) = reader.get_sak()? else {
        return Ok(IdentificationEvidence::default());
    };
    let mut evidence = IdentificationEvidence::with_sak(sak);
    let outcome = sak_outcome(sak);

    if outcome.needs_ats() {
        evidence.ats = request_ats(reader)?;
    }
    if outcome.needs_version() {
        reader.search_tag_with_max(RESELECT_MAX_ID_BYTES)?;
        evidence.version = Some(request_version(reader)?);
    }
    Ok(evidence)
}

/// RATS through the ISO14443-3 exchange; falls back to GetATS when the
/// reply is too short to hold an ATS.
pub fn request_ats<L: SerialLink>(reader: &mut Reader<L>) -> Result<Option<Vec<u8>>> {
    let mut parser = reader.call_function(&commands::encode_rats())?;
    if parser.as_bytes().len() > RATS_SHORT_REPLY_LEN {
        return decode_transceive(&mut parser);
    }
    reader.get_ats(GET_ATS_MAX_LEN)
}

fn request_version<L: SerialLink>(reader: &mut Reader<L>) -> Result<Vec<u8>> {
    let cmd =
        commands::encode_iso14443_4_transceive(&[DESFIRE_GET_VERSION], DESFIRE_GET_VERSION_MAX_RX)?;
    Ok(reader.call_function(&cmd)?.into_inner())
}
