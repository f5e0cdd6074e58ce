#[path = "../common/mod.rs"]
mod common;

use libtwn4::Error;
use libtwn4::protocol::ResponseParser;
use libtwn4::protocol::responses::{self, expect_success};
use libtwn4::types::{ChipType, ReaderError, ReaderErrorCategory, ResponseError};

#[test]
fn status_checked_before_payload() {
    let mut reply = common::fixtures::mifare_found();
    reply[0] = 0x04;
    let mut p = ResponseParser::new(reply);
    match expect_success(&mut p) {
        Err(Error::Protocol(code)) => assert_eq!(code, ResponseError::InvalidFunction),
        other => panic!("expected protocol error, got: {:?}", other),
    }
}

#[test]
fn unknown_status_is_kept() {
    let mut p = ResponseParser::new(vec![0x42]);
    let err = expect_success(&mut p).unwrap_err();
    assert_eq!(err.response_error(), Some(ResponseError::Other(0x42)));
}

#[test]
fn search_tag_reply() {
    let mut p = ResponseParser::new(common::fixtures::mifare_found());
    expect_success(&mut p).unwrap();
    let tag = responses::decode_search_tag(&mut p).unwrap().unwrap();
    assert_eq!(tag.chip_type, ChipType::Mifare);
    assert_eq!(tag.id_bit_count, 56);
    assert_eq!(tag.uid.as_bytes(), &common::fixtures::sample_uid_bytes());
}

#[test]
fn multi_tag_reply() {
    let mut p = ResponseParser::new(vec![0x00, 0x01, 0x02, 0x04, 1, 2, 3, 4, 0x02, 9, 9]);
    expect_success(&mut p).unwrap();
    let uids = responses::decode_multi_tag(&mut p).unwrap();
    assert_eq!(uids.len(), 2);
    assert_eq!(uids[1].as_bytes(), &[9, 9]);
}

#[test]
fn last_error_categories() {
    let mut p = ResponseParser::new(vec![0x00, 0x2C, 0x01, 0x00, 0x00]);
    expect_success(&mut p).unwrap();
    let err = responses::decode_last_error(&mut p).unwrap();
    assert_eq!(err, ReaderError::I2cTimeout);
    assert_eq!(err.category(), ReaderErrorCategory::I2c);
}
