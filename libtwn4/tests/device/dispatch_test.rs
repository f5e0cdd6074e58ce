#[path = "../common/mod.rs"]
mod common;

use common::helpers::{logged_reader, sent};
use libtwn4::Error;
use libtwn4::protocol::Command;
use libtwn4::types::{HfTagTypes, LfTagTypes, ResponseError};

#[test]
fn every_nonzero_status_fails_with_its_code() {
    for code in 1u8..=5 {
        // payload that would decode fine on success
        let mut reader = logged_reader(vec![vec![code, 0x01, 0x08]]);
        match reader.get_sak() {
            Err(Error::Protocol(e)) => assert_eq!(e.as_u8(), code),
            other => panic!("status {}: expected protocol error, got: {:?}", code, other),
        }
    }
}

#[test]
fn call_raw_returns_status_and_payload() {
    let mut reader = logged_reader(vec![vec![0x02, 0xAA, 0xBB]]);
    let raw = reader.call_raw(&Command::new(0x04, 0x08)).unwrap();
    assert_eq!(raw, vec![0x02, 0xAA, 0xBB]);
}

#[test]
fn call_function_parser_sits_after_status() {
    let mut reader = logged_reader(vec![vec![0x00, 0xAA, 0xBB]]);
    let p = reader.call_function(&Command::new(0x04, 0x08)).unwrap();
    assert_eq!(p.position(), 1);
    assert_eq!(p.rest(), &[0xAA, 0xBB]);
}

#[test]
fn protocol_error_is_not_retried() {
    let mut reader = logged_reader(vec![vec![0x01], vec![0x00, 0x01, 0x08]]);
    let err = reader.get_sak().unwrap_err();
    assert_eq!(err.response_error(), Some(ResponseError::UnknownFunction));
    assert_eq!(sent(&reader).len(), 1);
}

#[test]
fn tag_type_masks_roundtrip_through_reader() {
    let mut reader = logged_reader(vec![
        vec![0x00],
        vec![0x00, 0x01, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00],
        vec![0x00, 0xFF, 0xFF, 0xFF, 0x07, 0xFF, 0x0F, 0x00, 0x00],
    ]);
    reader
        .set_tag_types(LfTagTypes::EM4102, HfTagTypes::MIFARE | HfTagTypes::LEGIC)
        .unwrap();
    let current = reader.get_tag_types().unwrap();
    assert_eq!(current.lf, LfTagTypes::EM4102);
    assert_eq!(current.hf, HfTagTypes::MIFARE | HfTagTypes::LEGIC);
    let supported = reader.get_supported_tag_types().unwrap();
    assert!(supported.lf.contains(LfTagTypes::ISONAS));
    assert!(supported.hf.contains(HfTagTypes::BLELC));
}

#[test]
fn transceive_passes_bytes_through() {
    let mut reader = logged_reader(vec![vec![0x00, 0x01, 0x02, 0x90, 0x00]]);
    let reply = reader.iso14443_4_transceive(&[0x90, 0x60, 0x00, 0x00, 0x00], 0xFF).unwrap();
    assert_eq!(reply, Some(vec![0x90, 0x00]));
    assert_eq!(
        sent(&reader)[0],
        vec![0x12, 0x03, 0x05, 0x90, 0x60, 0x00, 0x00, 0x00, 0xFF]
    );
}

#[test]
fn rf_off_and_ticks() {
    let mut reader = logged_reader(vec![vec![0x00], vec![0x00, 0xE8, 0x03, 0x00, 0x00]]);
    reader.set_rf_off().unwrap();
    assert_eq!(reader.sys_ticks().unwrap(), 1000);
    assert_eq!(sent(&reader), vec![vec![0x05, 0x01], vec![0x00, 0x03]]);
}
