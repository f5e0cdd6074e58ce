// libtwn4/src/card/subtype.rs

//! Refined chip subtypes.

use derive_more::Display;

/// Refined chip classification produced by identification. The numeric
/// values continue the coarse `ChipType` code space (0xB0 and up).
/// Variant names spell out family, generation and capacity.
#[allow(missing_docs)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChipSubType {
    Unspecified = 0xB0,
    Ntag = 0xB1,
    MifareMini = 0xB2,
    Mifare1K = 0xB3,
    Mifare2K = 0xB4,
    Mifare4K = 0xB5,
    SamAv1 = 0xB6,
    SamAv2 = 0xB7,
    MifarePlusSl0_1K = 0xB9,
    MifarePlusSl0_2K = 0xBA,
    MifarePlusSl0_4K = 0xBB,
    MifarePlusSl1_1K = 0xBC,
    MifarePlusSl1_2K = 0xBD,
    MifarePlusSl1_4K = 0xBE,
    MifarePlusSl2_1K = 0xBF,
    MifarePlusSl2_2K = 0xC0,
    MifarePlusSl2_4K = 0xC1,
    MifarePlusSl3_1K = 0xC2,
    MifarePlusSl3_2K = 0xC3,
    MifarePlusSl3_4K = 0xC4,
    Desfire = 0xC5,
    DesfireEv1 = 0xC6,
    DesfireEv2 = 0xC7,
    DesfireEv3 = 0xC8,
    SmartMxDesfireGeneric = 0xC9,
    SmartMxDesfire2K = 0xCA,
    SmartMxDesfire4K = 0xCB,
    SmartMxDesfire8K = 0xCC,
    SmartMxDesfire16K = 0xCD,
    SmartMxDesfire32K = 0xCE,
    Desfire256 = 0xD0,
    Desfire2K = 0xD1,
    Desfire4K = 0xD2,
    DesfireEv1_256 = 0xD3,
    DesfireEv1_2K = 0xD4,
    DesfireEv1_4K = 0xD5,
    DesfireEv1_8K = 0xD6,
    DesfireEv2_2K = 0xD7,
    DesfireEv2_4K = 0xD8,
    DesfireEv2_8K = 0xD9,
    DesfireEv2_16K = 0xDA,
    DesfireEv2_32K = 0xDB,
    DesfireEv3_2K = 0xDC,
    DesfireEv3_4K = 0xDD,
    DesfireEv3_8K = 0xDE,
    DesfireEv3_16K = 0xDF,
    DesfireEv3_32K = 0xE0,
    DesfireLight = 0xE1,
    SmartMxMifare1K = 0xF9,
    SmartMxMifare4K = 0xFA,
    MifareUltralight = 0xFB,
    MifareUltralightC = 0xFC,
    /// Generic ISO14443A contactless card
    GenericTClA = 0xFF,
}

impl ChipSubType {
    /// Every subtype in code order.
    pub const ALL: [ChipSubType; 53] = [
        Self::Unspecified,
        Self::Ntag,
        Self::MifareMini,
        Self::Mifare1K,
        Self::Mifare2K,
        Self::Mifare4K,
        Self::SamAv1,
        Self::SamAv2,
        Self::MifarePlusSl0_1K,
        Self::MifarePlusSl0_2K,
        Self::MifarePlusSl0_4K,
        Self::MifarePlusSl1_1K,
        Self::MifarePlusSl1_2K,
        Self::MifarePlusSl1_4K,
        Self::MifarePlusSl2_1K,
        Self::MifarePlusSl2_2K,
        Self::MifarePlusSl2_4K,
        Self::MifarePlusSl3_1K,
        Self::MifarePlusSl3_2K,
        Self::MifarePlusSl3_4K,
        Self::Desfire,
        Self::DesfireEv1,
        Self::DesfireEv2,
        Self::DesfireEv3,
        Self::SmartMxDesfireGeneric,
        Self::SmartMxDesfire2K,
        Self::SmartMxDesfire4K,
        Self::SmartMxDesfire8K,
        Self::SmartMxDesfire16K,
        Self::SmartMxDesfire32K,
        Self::Desfire256,
        Self::Desfire2K,
        Self::Desfire4K,
        Self::DesfireEv1_256,
        Self::DesfireEv1_2K,
        Self::DesfireEv1_4K,
        Self::DesfireEv1_8K,
        Self::DesfireEv2_2K,
        Self::DesfireEv2_4K,
        Self::DesfireEv2_8K,
        Self::DesfireEv2_16K,
        Self::DesfireEv2_32K,
        Self::DesfireEv3_2K,
        Self::DesfireEv3_4K,
        Self::DesfireEv3_8K,
        Self::DesfireEv3_16K,
        Self::DesfireEv3_32K,
        Self::DesfireLight,
        Self::SmartMxMifare1K,
        Self::SmartMxMifare4K,
        Self::MifareUltralight,
        Self::MifareUltralightC,
        Self::GenericTClA,
    ];

    /// Numeric code.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Subtype for a code, if one is assigned.
    pub fn from_u8(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_u8() == code)
    }

    /// Native DESFire or a SmartMX DESFire emulation.
    pub fn is_desfire(&self) -> bool {
        (0xC5..=0xE1).contains(&self.as_u8())
    }

    /// Any Mifare Plus security level.
    pub fn is_mifare_plus(&self) -> bool {
        (0xB9..=0xC4).contains(&self.as_u8())
    }
}
