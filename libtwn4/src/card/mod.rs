// libtwn4/src/card/mod.rs

//! Chip identification: coarse type from the tag search, refined into a
//! `ChipSubType` from SAK, ATS and the DESFire GetVersion answer.

use log::{debug, warn};

use crate::device::Reader;
use crate::transport::SerialLink;
use crate::types::{ChipType, Uid};

pub mod ats;
pub mod desfire;
pub mod evidence;
pub mod rules;
pub mod subtype;

pub use evidence::{IdentificationEvidence, gather_evidence};
pub use rules::{SAK_RULES, SakOutcome, classify};
pub use subtype::ChipSubType;

/// A chip found in the field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chip {
    /// Id from the search.
    pub uid: Uid,
    /// Coarse type from the search.
    pub chip_type: ChipType,
    /// `None` when the chip was not refined or refinement was aborted.
    pub subtype: Option<ChipSubType>,
    /// What the refinement was based on.
    pub evidence: IdentificationEvidence,
}

impl Chip {
    /// Unrefined chip.
    pub fn new(uid: Uid, chip_type: ChipType) -> Self {
        Self {
            uid,
            chip_type,
            subtype: None,
            evidence: IdentificationEvidence::default(),
        }
    }

    /// Id bytes.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Coarse type.
    pub fn chip_type(&self) -> ChipType {
        self.chip_type
    }

    /// Refined subtype, if any.
    pub fn subtype(&self) -> Option<ChipSubType> {
        self.subtype
    }
}

/// Only Mifare chips, and ISO14443A chips found by the multi-tag search
/// alone, carry a SAK worth refining.
fn is_refinable(chip_type: ChipType) -> bool {
    matches!(chip_type, ChipType::Mifare | ChipType::NoTag)
}

/// Search for a single chip and identify it. Never fails: `None` means no
/// chip (or the search itself failed), and a failure while gathering
/// evidence leaves the chip coarse.
pub fn identify<L: SerialLink>(reader: &mut Reader<L>) -> Option<Chip> {
    let mut chip = match find_chip(reader) {
        Ok(Some(chip)) => chip,
        Ok(None) => return None,
        Err(e) => {
            warn!("tag search failed: {}", e);
            return None;
        }
    };

    if !is_refinable(chip.chip_type) {
        return Some(chip);
    }

    match gather_evidence(reader) {
        Ok(evidence) => {
            chip.subtype = classify(&evidence);
            chip.evidence = evidence;
            debug!("{:?} {} -> {:?}", chip.chip_type, chip.uid, chip.subtype);
        }
        Err(e) => warn!("identification of {} aborted: {}", chip.uid, e),
    }
    Some(chip)
}

/// SearchTag, then the ISO14443A multi-tag search when nothing answered.
/// Some SmartMX cards are only seen by the latter; they come back as
/// `NoTag`.
fn find_chip<L: SerialLink>(reader: &mut Reader<L>) -> crate::Result<Option<Chip>> {
    if let Some(tag) = reader.search_tag()? {
        return Ok(Some(Chip::new(tag.uid, tag.chip_type)));
    }
    let uids = reader.search_multi_tag()?;
    Ok(uids
        .into_iter()
        .next()
        .map(|uid| Chip::new(uid, ChipType::NoTag)))
}
