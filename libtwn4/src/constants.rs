// libtwn4/src/constants.rs
//! Common protocol constants used across the crate

/// Serial line settings: 9600 baud, 8 data bits, no parity, 1 stop bit.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Every request and response line ends with a carriage return.
pub const LINE_TERMINATOR: char = '\r';

/// Read/write timeout for a single call.
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Additional open attempts made after an access-denied failure.
pub const DEFAULT_OPEN_RETRIES: u32 = 3;

/// Fixed delay between open attempts.
pub const DEFAULT_OPEN_RETRY_DELAY_MS: u64 = 1000;

/// Upper bound for a length-prefixed field.
pub const MAX_VAR_BYTES_LEN: usize = 255;

// API groups (first byte of every command)

/// System functions.
pub const API_SYS: u8 = 0x00;
/// Peripherals (LEDs, beeper, GPIO).
pub const API_PERIPH: u8 = 0x04;
/// RF field and tag search.
pub const API_RF: u8 = 0x05;
/// Mifare Classic.
pub const API_MIFARE_CLASSIC: u8 = 0x0B;
/// DESFire.
pub const API_DESFIRE: u8 = 0x0F;
/// ISO14443 layers 3 and 4.
pub const API_ISO14443: u8 = 0x12;

// System functions

/// Milliseconds since reset.
pub const SYS_GET_SYS_TICKS: u8 = 3;
/// Firmware version text.
pub const SYS_GET_VERSION_STRING: u8 = 4;
/// Last firmware fault code.
pub const SYS_GET_LAST_ERROR: u8 = 10;

// RF functions

/// Search for one tag of the enabled types.
pub const RF_SEARCH_TAG: u8 = 0;
/// Switch the field off.
pub const RF_SET_RF_OFF: u8 = 1;
/// Select the tag types searched for.
pub const RF_SET_TAG_TYPES: u8 = 2;
/// Currently selected tag types.
pub const RF_GET_TAG_TYPES: u8 = 3;
/// Tag types the reader hardware supports.
pub const RF_GET_SUPPORTED_TAG_TYPES: u8 = 4;

// ISO14443 functions

/// ATS of the selected card.
pub const ISO14443_GET_ATS: u8 = 0;
/// Layer-4 exchange.
pub const ISO14443_4_TDX: u8 = 3;
/// SAK of the selected card.
pub const ISO14443_GET_SAK: u8 = 5;
/// Layer-3 exchange.
pub const ISO14443_3_TDX: u8 = 7;
/// Ids of every ISO14443A card in the field.
pub const ISO14443A_SEARCH_MULTI_TAG: u8 = 8;

/// Default maximum id length requested from SearchTag.
pub const SEARCH_TAG_MAX_ID_BYTES: u8 = 0xFF;

/// Maximum ATS length requested from GetATS.
pub const GET_ATS_MAX_LEN: u8 = 0x20;

/// RATS frame sent through the ISO14443-3 transceive (with CRC).
pub const RATS_FRAME: [u8; 4] = [0xE0, 0x50, 0xBC, 0xA5];

/// Receive limit used with the RATS frame.
pub const RATS_MAX_RX: u8 = 0xFF;
/// Timeout used with the RATS frame.
pub const RATS_TIMEOUT: u16 = 0x00FF;

/// DESFire native GetVersion command byte.
pub const DESFIRE_GET_VERSION: u8 = 0x60;

/// Maximum reply length for the layer-4 GetVersion exchange.
pub const DESFIRE_GET_VERSION_MAX_RX: u8 = 0x20;

/// GetVersion reply marker ("additional frame").
pub const DESFIRE_ADDITIONAL_FRAME: u8 = 0xAF;

// ATS historical-byte signatures of Mifare Plus products

/// Mifare Plus S.
pub const ATS_MIFARE_PLUS_S: [u8; 7] = [0xC1, 0x05, 0x2F, 0x2F, 0x00, 0x35, 0xC7];
/// Mifare Plus X.
pub const ATS_MIFARE_PLUS_X: [u8; 7] = [0xC1, 0x05, 0x2F, 0x2F, 0x01, 0xBC, 0xD6];
/// Mifare Plus SE.
pub const ATS_MIFARE_PLUS_SE: [u8; 7] = [0xC1, 0x05, 0x21, 0x30, 0x00, 0xF6, 0xD1];

/// An ATS shorter than this carries no historical bytes worth matching.
pub const ATS_MIN_USABLE_LEN: usize = 4;
