// fixtures.rs: provides commonly used reply payloads

use libtwn4::constants::{ATS_MIFARE_PLUS_S, ATS_MIFARE_PLUS_SE, ATS_MIFARE_PLUS_X};

pub fn sample_uid_bytes() -> [u8; 7] {
    [0x04, 0x5A, 0x3B, 0x22, 0x61, 0x2C, 0x80]
}

/// SearchTag reply: status, found, chip type, id bit count, id.
pub fn search_tag_reply(chip_type: u8) -> Vec<u8> {
    let uid = sample_uid_bytes();
    let mut r = vec![0x00, 0x01, chip_type, (uid.len() * 8) as u8, uid.len() as u8];
    r.extend_from_slice(&uid);
    r
}

pub fn mifare_found() -> Vec<u8> {
    search_tag_reply(0x80)
}

pub fn nothing_found() -> Vec<u8> {
    vec![0x00, 0x00]
}

pub fn sak_reply(sak: u8) -> Vec<u8> {
    vec![0x00, 0x01, sak]
}

/// Transceive/GetATS reply carrying `data`.
pub fn transceive_reply(data: &[u8]) -> Vec<u8> {
    let mut r = vec![0x00, 0x01, data.len() as u8];
    r.extend_from_slice(data);
    r
}

/// RATS reply too short to hold an ATS; forces the GetATS fallback.
pub fn short_rats_reply() -> Vec<u8> {
    vec![0x00, 0x01, 0x00]
}

/// An ATS whose historical bytes carry `signature`.
pub fn ats_with(signature: &[u8]) -> Vec<u8> {
    let mut ats = vec![0x0C, 0x75, 0x77, 0x80, 0x02];
    ats.extend_from_slice(signature);
    ats
}

pub fn plus_s_ats() -> Vec<u8> {
    ats_with(&ATS_MIFARE_PLUS_S)
}

pub fn plus_x_ats() -> Vec<u8> {
    ats_with(&ATS_MIFARE_PLUS_X)
}

pub fn plus_se_ats() -> Vec<u8> {
    ats_with(&ATS_MIFARE_PLUS_SE)
}

/// Usable ATS without any Mifare Plus signature.
pub fn plain_ats() -> Vec<u8> {
    vec![0x06, 0x75, 0x77, 0x81, 0x02, 0x80]
}

/// Full layer-4 GetVersion reply as the reader returns it.
pub fn get_version_reply(product: u8, major: u8, storage: u8) -> Vec<u8> {
    vec![
        0x00, 0x01, 0x08, 0xAF, 0x04, product, 0x01, major, 0x00, storage, 0x05,
    ]
}
