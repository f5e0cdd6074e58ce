// libtwn4/src/card/desfire.rs

//! DESFire GetVersion decoding.

use crate::card::subtype::ChipSubType;
use crate::constants::DESFIRE_ADDITIONAL_FRAME;

/// Byte offsets into the full layer-4 GetVersion reply as returned by the
/// reader: status, ok flag, length, then the card's own answer.
const MARKER_IDX: usize = 3;
const VENDOR_IDX: usize = 4;
const TYPE_IDX: usize = 5;
const MAJOR_IDX: usize = 7;
const STORAGE_IDX: usize = 9;

/// Native DESFire silicon or a DESFire emulation (SmartMX).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// Type byte 0x01.
    Native,
    /// Type byte 0x81.
    Emulated,
    /// Anything else; identification stays coarse.
    Other(u8),
}

impl ProductKind {
    fn from_u8(b: u8) -> Self {
        match b {
            0x01 => Self::Native,
            0x81 => Self::Emulated,
            other => Self::Other(other),
        }
    }
}

/// Storage size code of the hardware version block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageSize {
    /// 0x10
    B256,
    /// 0x16
    K2,
    /// 0x18
    K4,
    /// 0x1A
    K8,
    /// 0x1C
    K16,
    /// 0x1E
    K32,
    /// Unassigned code.
    Other(u8),
}

impl StorageSize {
    /// Decode the storage size byte.
    pub fn from_code(code: u8) -> Self {
        match code {
            0x10 => Self::B256,
            0x16 => Self::K2,
            0x18 => Self::K4,
            0x1A => Self::K8,
            0x1C => Self::K16,
            0x1E => Self::K32,
            other => Self::Other(other),
        }
    }

    /// Capacity in bytes for known codes.
    pub fn bytes(&self) -> Option<usize> {
        match self {
            Self::B256 => Some(256),
            Self::K2 => Some(2048),
            Self::K4 => Some(4096),
            Self::K8 => Some(8192),
            Self::K16 => Some(16384),
            Self::K32 => Some(32768),
            Self::Other(_) => None,
        }
    }
}

/// Hardware part of a DESFire GetVersion answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesfireVersion {
    /// Vendor id (0x04 for NXP).
    pub vendor: u8,
    /// Native or emulated.
    pub kind: ProductKind,
    /// Major version byte; the low nibble is the generation.
    pub major: u8,
    /// Storage size code.
    pub storage: StorageSize,
}

impl DesfireVersion {
    /// Parse the full reply (status byte included). `None` unless the
    /// card answered with the additional-frame marker and the reply
    /// reaches the storage size byte.
    pub fn parse(response: &[u8]) -> Option<Self> {
        if response.len() <= STORAGE_IDX || response[MARKER_IDX] != DESFIRE_ADDITIONAL_FRAME {
            return None;
        }
        Some(Self {
            vendor: response[VENDOR_IDX],
            kind: ProductKind::from_u8(response[TYPE_IDX]),
            major: response[MAJOR_IDX],
            storage: StorageSize::from_code(response[STORAGE_IDX]),
        })
    }

    /// EV generation from the low nibble of the major version.
    pub fn generation(&self) -> u8 {
        self.major & 0x0F
    }

    /// Map generation and size onto a subtype. `None` for product types
    /// that are neither native nor emulated DESFire.
    pub fn subtype(&self) -> Option<ChipSubType> {
        match self.kind {
            ProductKind::Native => Some(native_subtype(self.generation(), self.storage)),
            ProductKind::Emulated => Some(emulated_subtype(self.generation(), self.storage)),
            ProductKind::Other(_) => None,
        }
    }
}

fn native_subtype(generation: u8, size: StorageSize) -> ChipSubType {
    use ChipSubType::*;
    use StorageSize::*;
    match (generation, size) {
        (0, B256) => Desfire256,
        (0, K2) => Desfire2K,
        (0, K4) => Desfire4K,
        (0, _) => Desfire,
        (1, B256) => DesfireEv1_256,
        (1, K2) => DesfireEv1_2K,
        (1, K4) => DesfireEv1_4K,
        (1, K8) => DesfireEv1_8K,
        (1, _) => DesfireEv1,
        (2, K2) => DesfireEv2_2K,
        (2, K4) => DesfireEv2_4K,
        (2, K8) => DesfireEv2_8K,
        (2, K16) => DesfireEv2_16K,
        (2, K32) => DesfireEv2_32K,
        (2, _) => DesfireEv2,
        (3, K2) => DesfireEv3_2K,
        (3, K4) => DesfireEv3_4K,
        (3, K8) => DesfireEv3_8K,
        (3, K16) => DesfireEv3_16K,
        (3, K32) => DesfireEv3_32K,
        (3, _) => DesfireEv3,
        _ => Unspecified,
    }
}

fn emulated_subtype(generation: u8, size: StorageSize) -> ChipSubType {
    use ChipSubType::*;
    use StorageSize::*;
    match (generation, size) {
        (0..=3, K2) => SmartMxDesfire2K,
        (0..=3, K4) => SmartMxDesfire4K,
        (1..=3, K8) => SmartMxDesfire8K,
        (2..=3, K16) => SmartMxDesfire16K,
        (2..=3, K32) => SmartMxDesfire32K,
        (0..=3, _) => SmartMxDesfireGeneric,
        _ => Unspecified,
    }
}
