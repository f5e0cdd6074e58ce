// libtwn4/src/card/rules.rs

//! SAK decision table and the pure classification over gathered evidence.

use log::trace;

use crate::card::ats::{self, AtsSignature};
use crate::card::desfire::DesfireVersion;
use crate::card::evidence::IdentificationEvidence;
use crate::card::subtype::ChipSubType;

/// Capacity family selected by the SAK before the ATS is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityClass {
    /// Mifare 1K or 2K
    OneK,
    /// Mifare 4K
    FourK,
}

/// What a matching SAK rule decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SakOutcome {
    /// Final subtype, no further evidence needed.
    Subtype(ChipSubType),
    /// Fetch the ATS and look for Mifare Plus signatures.
    AtsStage(CapacityClass),
    /// Fetch the ATS and the layer-4 GetVersion answer.
    Layer4Stage,
    /// Keep the coarse chip type (Tag'n'Play).
    KeepCoarse,
}

impl SakOutcome {
    /// The ATS must be fetched.
    pub fn needs_ats(&self) -> bool {
        matches!(self, Self::AtsStage(_) | Self::Layer4Stage)
    }

    /// The layer-4 GetVersion must be fetched.
    pub fn needs_version(&self) -> bool {
        matches!(self, Self::Layer4Stage)
    }
}

/// One row of the table: matches when `sak & mask == value`.
#[derive(Debug, Clone, Copy)]
pub struct SakRule {
    /// Bits of the SAK that are compared.
    pub mask: u8,
    /// Required value of the masked bits.
    pub value: u8,
    /// Decision on match.
    pub outcome: SakOutcome,
    /// Label for trace output.
    pub name: &'static str,
}

impl SakRule {
    /// True when `sak` falls under this rule.
    pub fn matches(&self, sak: u8) -> bool {
        sak & self.mask == self.value
    }
}

const fn rule(mask: u8, value: u8, outcome: SakOutcome, name: &'static str) -> SakRule {
    SakRule {
        mask,
        value,
        outcome,
        name,
    }
}

/// Ordered SAK rules; the first match wins. A SAK matching none of them
/// is a Mifare Ultralight.
pub const SAK_RULES: [SakRule; 11] = [
    rule(0x02, 0x02, SakOutcome::Subtype(ChipSubType::Unspecified), "rfu bit"),
    rule(0x19, 0x19, SakOutcome::Subtype(ChipSubType::Mifare2K), "classic 2k"),
    rule(0x39, 0x38, SakOutcome::Subtype(ChipSubType::SmartMxMifare4K), "smartmx classic 4k"),
    rule(0x39, 0x18, SakOutcome::AtsStage(CapacityClass::FourK), "classic/plus 4k"),
    rule(0x19, 0x09, SakOutcome::Subtype(ChipSubType::MifareMini), "mini"),
    rule(0x39, 0x28, SakOutcome::Subtype(ChipSubType::SmartMxMifare1K), "smartmx classic 1k"),
    rule(0x39, 0x08, SakOutcome::AtsStage(CapacityClass::OneK), "classic/plus 1k/2k"),
    rule(0x19, 0x11, SakOutcome::Subtype(ChipSubType::MifarePlusSl2_4K), "plus sl2 4k"),
    rule(0x19, 0x10, SakOutcome::Subtype(ChipSubType::MifarePlusSl2_2K), "plus sl2 2k"),
    rule(0x19, 0x01, SakOutcome::KeepCoarse, "tag'n'play"),
    rule(0x39, 0x20, SakOutcome::Layer4Stage, "layer 4"),
];

const ULTRALIGHT: SakOutcome = SakOutcome::Subtype(ChipSubType::MifareUltralight);

/// Decision of the first matching rule.
pub fn sak_outcome(sak: u8) -> SakOutcome {
    match SAK_RULES.iter().find(|r| r.matches(sak)) {
        Some(r) => {
            trace!("sak {:02X}: rule '{}'", sak, r.name);
            r.outcome
        }
        None => {
            trace!("sak {:02X}: no rule, ultralight", sak);
            ULTRALIGHT
        }
    }
}

/// Refine a Mifare chip from its evidence. Deterministic; `None` keeps
/// the coarse type.
pub fn classify(evidence: &IdentificationEvidence) -> Option<ChipSubType> {
    let sak = evidence.sak?;
    let ats = evidence.ats.as_deref().unwrap_or(&[]);
    match sak_outcome(sak) {
        SakOutcome::Subtype(s) => Some(s),
        SakOutcome::KeepCoarse => None,
        SakOutcome::AtsStage(class) => classify_ats(class, ats),
        SakOutcome::Layer4Stage => {
            classify_layer4(evidence.version.as_deref().unwrap_or(&[]), ats)
        }
    }
}

/// Mifare Plus SL1 versus Classic from the ATS signature.
pub fn classify_ats(class: CapacityClass, ats: &[u8]) -> Option<ChipSubType> {
    let signature = ats::match_signature(ats);
    match class {
        CapacityClass::FourK => match signature {
            Some(sig) if sig.is_s_or_x() => Some(ChipSubType::MifarePlusSl1_4K),
            _ if ats::is_usable(ats) => None,
            _ => Some(ChipSubType::Mifare4K),
        },
        CapacityClass::OneK => match signature {
            Some(sig) if sig.is_s_or_x() => Some(ChipSubType::MifarePlusSl1_2K),
            Some(AtsSignature::PlusSe) => Some(ChipSubType::MifarePlusSl0_1K),
            _ => Some(ChipSubType::Mifare1K),
        },
    }
}

/// DESFire family from GetVersion; when the card gave no valid version
/// the ATS decides between Mifare Plus SL3 and a SmartMX emulation.
pub fn classify_layer4(version: &[u8], ats: &[u8]) -> Option<ChipSubType> {
    if let Some(v) = DesfireVersion::parse(version) {
        return v.subtype();
    }
    match ats::match_signature(ats) {
        Some(sig) if sig.is_s_or_x() => Some(ChipSubType::MifarePlusSl3_4K),
        _ if ats::is_usable(ats) => Some(ChipSubType::Unspecified),
        _ => Some(ChipSubType::SmartMxMifare4K),
    }
}
