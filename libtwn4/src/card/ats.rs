// libtwn4/src/card/ats.rs

//! ATS inspection.

use crate::constants::{
    ATS_MIFARE_PLUS_S, ATS_MIFARE_PLUS_SE, ATS_MIFARE_PLUS_X, ATS_MIN_USABLE_LEN,
};

/// Mifare Plus product recognised from its ATS historical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtsSignature {
    /// Mifare Plus S
    PlusS,
    /// Mifare Plus X
    PlusX,
    /// Mifare Plus SE
    PlusSe,
}

impl AtsSignature {
    /// Byte sequence searched for in the ATS.
    pub fn pattern(&self) -> &'static [u8] {
        match self {
            Self::PlusS => &ATS_MIFARE_PLUS_S,
            Self::PlusX => &ATS_MIFARE_PLUS_X,
            Self::PlusSe => &ATS_MIFARE_PLUS_SE,
        }
    }

    /// Plus S and Plus X share every classification outcome.
    pub fn is_s_or_x(&self) -> bool {
        matches!(self, Self::PlusS | Self::PlusX)
    }
}

/// True when the ATS is long enough to carry historical bytes.
pub fn is_usable(ats: &[u8]) -> bool {
    ats.len() >= ATS_MIN_USABLE_LEN
}

/// First signature (S, then X, then SE) occurring anywhere in `ats`.
pub fn match_signature(ats: &[u8]) -> Option<AtsSignature> {
    [AtsSignature::PlusS, AtsSignature::PlusX, AtsSignature::PlusSe]
        .into_iter()
        .find(|sig| contains(ats, sig.pattern()))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}
