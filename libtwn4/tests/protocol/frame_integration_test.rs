use libtwn4::Error;
use libtwn4::protocol::codec::{decode_response_line, encode_command_line};
use libtwn4::protocol::{Command, Frame};
use proptest::prelude::*;

#[test]
fn command_line_is_hex_plus_cr() {
    let cmd = Command::new(0x05, 0x00).u8(0xFF);
    assert_eq!(encode_command_line(&cmd), "0500FF\r");
}

#[test]
fn response_line_decodes_into_parser() {
    let mut p = decode_response_line("0001803807\r").unwrap();
    assert_eq!(p.read_u8().unwrap(), 0x00);
    assert_eq!(p.rest(), &[0x01, 0x80, 0x38, 0x07]);
}

#[test]
fn odd_length_line_rejected() {
    assert!(matches!(Frame::decode("050"), Err(Error::FrameDecode(_))));
}

#[test]
fn non_hex_line_rejected() {
    assert!(matches!(
        decode_response_line("00ZZ\r"),
        Err(Error::FrameDecode(_))
    ));
}

proptest! {
    #[test]
    fn line_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let line = Frame::encode_line(&payload);
        prop_assert!(line.ends_with('\r'));
        prop_assert_eq!(Frame::decode_line(&line).unwrap(), payload);
    }
}
