use libtwn4::Error;
use libtwn4::protocol::{Command, commands};
use libtwn4::types::{HfTagTypes, LfTagTypes};

#[test]
fn system_commands() {
    assert_eq!(commands::encode_get_sys_ticks().encode(), vec![0x00, 0x03]);
    assert_eq!(commands::encode_get_version_string(0xFF).encode(), vec![0x00, 0x04, 0xFF]);
    assert_eq!(commands::encode_get_last_error().encode(), vec![0x00, 0x0A]);
}

#[test]
fn rf_commands() {
    assert_eq!(commands::encode_search_tag(0xFF).encode(), vec![0x05, 0x00, 0xFF]);
    assert_eq!(commands::encode_set_rf_off().encode(), vec![0x05, 0x01]);
    assert_eq!(
        commands::encode_set_tag_types(LfTagTypes::EM4102, HfTagTypes::MIFARE | HfTagTypes::LEGIC)
            .encode(),
        vec![0x05, 0x02, 0x01, 0, 0, 0, 0x09, 0, 0, 0]
    );
    assert_eq!(commands::encode_get_tag_types().encode(), vec![0x05, 0x03]);
    assert_eq!(commands::encode_get_supported_tag_types().encode(), vec![0x05, 0x04]);
}

#[test]
fn iso14443_commands() {
    assert_eq!(commands::encode_get_sak().encode(), vec![0x12, 0x05]);
    assert_eq!(commands::encode_get_ats_default().encode(), vec![0x12, 0x00, 0x20]);
    assert_eq!(commands::encode_search_multi_tag(0xFF).encode(), vec![0x12, 0x08, 0xFF]);
    assert_eq!(
        commands::encode_rats().encode(),
        vec![0x12, 0x07, 0x04, 0xE0, 0x50, 0xBC, 0xA5, 0xFF, 0xFF, 0x00]
    );
    assert_eq!(
        commands::encode_iso14443_4_transceive(&[0x60], 0x20).unwrap().encode(),
        vec![0x12, 0x03, 0x01, 0x60, 0x20]
    );
}

#[test]
fn oversized_variable_field_rejected() {
    let big = vec![0u8; 256];
    assert!(matches!(
        Command::new(0x12, 0x03).var_bytes(&big),
        Err(Error::InvalidParameter(_))
    ));
    assert!(Command::new(0x12, 0x03).var_bytes(&big[..255]).is_ok());
}

#[test]
fn from_bytes_needs_group_and_function() {
    assert!(Command::from_bytes(vec![0x05]).is_err());
    let cmd = Command::from_bytes(vec![0x05, 0x00, 0x10]).unwrap();
    assert_eq!(cmd.api_group(), 0x05);
    assert_eq!(cmd.function(), 0x00);
}
