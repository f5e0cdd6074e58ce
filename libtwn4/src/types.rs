// libtwn4/src/types.rs

//! Value types shared by the protocol and device layers.

use crate::Error;

/// Transponder id as reported by a tag search (variable length).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Wrap raw id bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw id bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Id length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length id.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uppercase hex, the way the reader itself prints ids.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() {
            return Err(Error::MalformedResponse("empty uid".into()));
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Protocol-level status: byte 0 of every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseError {
    /// Success.
    #[error("no error")]
    None,
    /// API group or function number not known to the firmware.
    #[error("unknown function")]
    UnknownFunction,
    /// The request ended before all parameters were read.
    #[error("missing parameter")]
    MissingParameter,
    /// Bytes were left over after the last parameter.
    #[error("unused parameters")]
    UnusedParameters,
    /// The function exists but cannot be called this way.
    #[error("invalid function")]
    InvalidFunction,
    /// The request line was not valid hex.
    #[error("parser error")]
    ParserError,
    /// A status code this crate does not know.
    #[error("unknown status {0:#04x}")]
    Other(u8),
}

impl ResponseError {
    /// Decode a status byte; unknown values become `Other`.
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => Self::None,
            1 => Self::UnknownFunction,
            2 => Self::MissingParameter,
            3 => Self::UnusedParameters,
            4 => Self::InvalidFunction,
            5 => Self::ParserError,
            other => Self::Other(other),
        }
    }

    /// Status byte on the wire.
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::UnknownFunction => 1,
            Self::MissingParameter => 2,
            Self::UnusedParameters => 3,
            Self::InvalidFunction => 4,
            Self::ParserError => 5,
            Self::Other(code) => *code,
        }
    }

    /// True for `None` (success).
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Coarse grouping of `ReaderError` codes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderErrorCategory {
    None,
    General,
    Storage,
    FileSystem,
    I2c,
    Unknown,
}

/// Firmware fault code returned by `GetLastError` (system function 10).
/// Variants carry the firmware names; `Display` gives the text.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReaderError {
    #[error("no error")]
    None,
    // general
    #[error("out of memory")]
    OutOfMemory,
    #[error("already initialised")]
    IsAlreadyInit,
    #[error("not initialised")]
    NotInit,
    #[error("already open")]
    IsAlreadyOpen,
    #[error("not open")]
    NotOpen,
    #[error("value out of range")]
    Range,
    #[error("invalid parameter")]
    Parameter,
    #[error("general error")]
    General,
    #[error("not supported")]
    NotSupported,
    #[error("invalid state")]
    State,
    #[error("compatibility error")]
    Compatibility,
    #[error("data error")]
    Data,
    // storage
    #[error("unknown storage id")]
    UnknownStorageId,
    #[error("wrong index")]
    WrongIndex,
    #[error("flash erase failed")]
    FlashErase,
    #[error("flash write failed")]
    FlashWrite,
    #[error("sector not found")]
    SectorNotFound,
    #[error("storage full")]
    StorageFull,
    #[error("storage invalid")]
    StorageInvalid,
    #[error("transaction limit reached")]
    TransactionLimit,
    // file system
    #[error("unknown file system")]
    UnknownFs,
    #[error("file not found")]
    FileNotFound,
    #[error("file already exists")]
    FileAlreadyExists,
    #[error("end of file")]
    EndOfFile,
    #[error("storage not found")]
    StorageNotFound,
    #[error("storage already mounted")]
    StorageAlreadyMounted,
    #[error("access denied")]
    AccessDenied,
    #[error("file corrupt")]
    FileCorrupt,
    #[error("invalid file environment")]
    InvalidFileEnv,
    #[error("invalid file id")]
    InvalidFileId,
    #[error("resource limit")]
    ResourceLimit,
    // i2c
    #[error("i2c timeout")]
    I2cTimeout,
    #[error("i2c pec error")]
    I2cPec,
    #[error("i2c overrun")]
    I2cOvr,
    #[error("i2c acknowledge failure")]
    I2cAf,
    #[error("i2c arbitration lost")]
    I2cArlo,
    #[error("i2c bus error")]
    I2cBerr,
    #[error("reader error code {0}")]
    Other(u32),
}

impl ReaderError {
    /// Decode a fault code; unknown values become `Other`.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::OutOfMemory,
            2 => Self::IsAlreadyInit,
            3 => Self::NotInit,
            4 => Self::IsAlreadyOpen,
            5 => Self::NotOpen,
            6 => Self::Range,
            7 => Self::Parameter,
            8 => Self::General,
            9 => Self::NotSupported,
            10 => Self::State,
            11 => Self::Compatibility,
            12 => Self::Data,
            100 => Self::UnknownStorageId,
            101 => Self::WrongIndex,
            102 => Self::FlashErase,
            103 => Self::FlashWrite,
            104 => Self::SectorNotFound,
            105 => Self::StorageFull,
            106 => Self::StorageInvalid,
            107 => Self::TransactionLimit,
            200 => Self::UnknownFs,
            201 => Self::FileNotFound,
            202 => Self::FileAlreadyExists,
            203 => Self::EndOfFile,
            204 => Self::StorageNotFound,
            205 => Self::StorageAlreadyMounted,
            206 => Self::AccessDenied,
            207 => Self::FileCorrupt,
            208 => Self::InvalidFileEnv,
            209 => Self::InvalidFileId,
            210 => Self::ResourceLimit,
            300 => Self::I2cTimeout,
            301 => Self::I2cPec,
            302 => Self::I2cOvr,
            303 => Self::I2cAf,
            304 => Self::I2cArlo,
            305 => Self::I2cBerr,
            other => Self::Other(other),
        }
    }

    /// Numeric fault code.
    pub fn code(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::OutOfMemory => 1,
            Self::IsAlreadyInit => 2,
            Self::NotInit => 3,
            Self::IsAlreadyOpen => 4,
            Self::NotOpen => 5,
            Self::Range => 6,
            Self::Parameter => 7,
            Self::General => 8,
            Self::NotSupported => 9,
            Self::State => 10,
            Self::Compatibility => 11,
            Self::Data => 12,
            Self::UnknownStorageId => 100,
            Self::WrongIndex => 101,
            Self::FlashErase => 102,
            Self::FlashWrite => 103,
            Self::SectorNotFound => 104,
            Self::StorageFull => 105,
            Self::StorageInvalid => 106,
            Self::TransactionLimit => 107,
            Self::UnknownFs => 200,
            Self::FileNotFound => 201,
            Self::FileAlreadyExists => 202,
            Self::EndOfFile => 203,
            Self::StorageNotFound => 204,
            Self::StorageAlreadyMounted => 205,
            Self::AccessDenied => 206,
            Self::FileCorrupt => 207,
            Self::InvalidFileEnv => 208,
            Self::InvalidFileId => 209,
            Self::ResourceLimit => 210,
            Self::I2cTimeout => 300,
            Self::I2cPec => 301,
            Self::I2cOvr => 302,
            Self::I2cAf => 303,
            Self::I2cArlo => 304,
            Self::I2cBerr => 305,
            Self::Other(code) => *code,
        }
    }

    /// Range the code falls in.
    pub fn category(&self) -> ReaderErrorCategory {
        match self.code() {
            0 => ReaderErrorCategory::None,
            1..=12 => ReaderErrorCategory::General,
            100..=107 => ReaderErrorCategory::Storage,
            200..=210 => ReaderErrorCategory::FileSystem,
            300..=305 => ReaderErrorCategory::I2c,
            _ => ReaderErrorCategory::Unknown,
        }
    }
}

macro_rules! chip_types {
    ($($(#[$doc:meta])* $name:ident = $code:literal,)*) => {
        /// Coarse transponder class reported by a tag search.
        /// Variants without docs carry the firmware name.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum ChipType {
            /// Nothing in the field.
            #[default]
            NoTag,
            $($(#[$doc])* $name,)*
            /// A type code this crate does not know.
            Unknown(u8),
        }

        impl ChipType {
            /// Decode a type code; unknown values become `Unknown`.
            pub fn from_u8(code: u8) -> Self {
                match code {
                    0 => Self::NoTag,
                    $($code => Self::$name,)*
                    other => Self::Unknown(other),
                }
            }

            /// Type code on the wire.
            pub fn as_u8(&self) -> u8 {
                match self {
                    Self::NoTag => 0,
                    $(Self::$name => $code,)*
                    Self::Unknown(code) => *code,
                }
            }
        }
    };
}

chip_types! {
    /// EM4x02 / CASI-RUSCO
    Em4102 = 0x40,
    Hitag1S = 0x41,
    Hitag2 = 0x42,
    Em4150 = 0x43,
    /// T55x7
    At5555 = 0x44,
    /// ISO FDX-B
    IsoFdx = 0x45,
    Em4026 = 0x46,
    HitagU = 0x47,
    Em4305 = 0x48,
    HidProx = 0x49,
    /// ISO HDX / TIRIS
    Tiris = 0x4A,
    Cotag = 0x4B,
    IoProx = 0x4C,
    /// Indala
    Inditag = 0x4D,
    /// NexWatch
    Honeytag = 0x4E,
    Awid = 0x4F,
    GProx = 0x50,
    Pyramid = 0x51,
    Keri = 0x52,
    Deister = 0x53,
    Cardax = 0x54,
    Nedap = 0x55,
    Pac = 0x56,
    Idteck = 0x57,
    UltraProx = 0x58,
    Ict = 0x59,
    Isonas = 0x5A,
    /// ISO14443A / MIFARE
    Mifare = 0x80,
    Iso14443B = 0x81,
    Iso15693 = 0x82,
    Legic = 0x83,
    HidIclass = 0x84,
    Felica = 0x85,
    Srx = 0x86,
    NfcP2p = 0x87,
    Ble = 0x88,
    Topaz = 0x89,
    /// CTS256 / CTS512
    Cts = 0x8A,
    /// Bluetooth Low Energy LEGIC Connect
    BleLc = 0x8B,
}

impl ChipType {
    /// 125 kHz transponders.
    pub fn is_lf(&self) -> bool {
        (0x40..0x80).contains(&self.as_u8())
    }

    /// 13.56 MHz transponders.
    pub fn is_hf(&self) -> bool {
        self.as_u8() >= 0x80
    }
}

// Flag names follow the firmware tag type names.
#[allow(missing_docs)]
mod tag_types {
    use bitflags::bitflags;

    bitflags! {
        /// LF transponder selection for SetTagTypes / GetTagTypes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct LfTagTypes: u32 {
            const EM4102 = 1 << 0;
            const HITAG1S = 1 << 1;
            const HITAG2 = 1 << 2;
            const EM4150 = 1 << 3;
            const AT5555 = 1 << 4;
            const ISOFDX = 1 << 5;
            const EM4026 = 1 << 6;
            const HITAGU = 1 << 7;
            const EM4305 = 1 << 8;
            const HIDPROX = 1 << 9;
            const TIRIS = 1 << 10;
            const COTAG = 1 << 11;
            const IOPROX = 1 << 12;
            const INDITAG = 1 << 13;
            const HONEYTAG = 1 << 14;
            const AWID = 1 << 15;
            const GPROX = 1 << 16;
            const PYRAMID = 1 << 17;
            const KERI = 1 << 18;
            const DEISTER = 1 << 19;
            const CARDAX = 1 << 20;
            const NEDAP = 1 << 21;
            const PAC = 1 << 22;
            const IDTECK = 1 << 23;
            const ULTRAPROX = 1 << 24;
            const ICT = 1 << 25;
            const ISONAS = 1 << 26;

            // firmware may define bits beyond the ones named here
            const _ = !0;
        }
    }

    bitflags! {
        /// HF transponder selection for SetTagTypes / GetTagTypes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct HfTagTypes: u32 {
            const MIFARE = 1 << 0;
            const ISO14443B = 1 << 1;
            const ISO15693 = 1 << 2;
            const LEGIC = 1 << 3;
            const HIDICLASS = 1 << 4;
            const FELICA = 1 << 5;
            const SRX = 1 << 6;
            const NFCP2P = 1 << 7;
            const BLE = 1 << 8;
            const TOPAZ = 1 << 9;
            const CTS = 1 << 10;
            const BLELC = 1 << 11;

            const _ = !0;
        }
    }
}

pub use tag_types::{HfTagTypes, LfTagTypes};
