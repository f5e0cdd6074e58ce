#[path = "../common/mod.rs"]
mod common;

use std::time::{Duration, Instant};

use libtwn4::Error;
use libtwn4::device::Reader;
use libtwn4::transport::{MockLink, SessionConfig};

fn reader_with(link: MockLink, config: SessionConfig) -> Reader<MockLink> {
    common::helpers::init_logging();
    Reader::with_link(link, "COM4", config)
}

#[test]
fn three_denials_then_success() {
    let mut link = MockLink::new();
    link.deny_opens(3);
    link.push_response(vec![0x00, 0x01, 0x00]);
    let config = SessionConfig::default().with_open_retry_delay_ms(10);
    let mut reader = reader_with(link, config);

    let start = Instant::now();
    assert_eq!(reader.get_sak().unwrap(), Some(0x00));
    assert!(start.elapsed() >= Duration::from_millis(30));
    assert_eq!(reader.link().open_attempts, 4);
    assert_eq!(reader.link().opens, 1);
}

#[test]
fn fourth_denial_is_terminal() {
    let mut link = MockLink::new();
    link.deny_opens(4);
    link.push_response(vec![0x00, 0x01, 0x00]);
    let mut reader = reader_with(link, SessionConfig::default().with_open_retry_delay_ms(1));

    assert!(matches!(reader.get_sak(), Err(Error::AccessDenied { .. })));
    assert_eq!(reader.link().open_attempts, 4);
    // nothing was written
    assert!(reader.link().written.is_empty());
}

#[test]
fn other_open_failures_are_immediate() {
    let mut link = MockLink::new();
    link.fail_opens("no such device");
    let mut reader = reader_with(link, SessionConfig::default().with_open_retry_delay_ms(1));
    assert!(matches!(reader.sys_ticks(), Err(Error::OpenFailed { .. })));
    assert_eq!(reader.link().open_attempts, 1);
}

#[test]
fn port_closed_after_every_call() {
    let mut link = MockLink::new();
    link.push_response(vec![0x00, 0x01, 0x00, 0x00, 0x00]);
    link.push_response(vec![0x00, 0x02, 0x00, 0x00, 0x00]);
    let mut reader = reader_with(link, SessionConfig::default());
    reader.sys_ticks().unwrap();
    assert!(!reader.session().is_open());
    reader.sys_ticks().unwrap();
    assert_eq!(reader.link().opens, 2);
    assert_eq!(reader.link().closes, 2);
    assert_eq!(reader.link().discards, 2);
}

#[test]
fn timeout_closes_port() {
    let mut reader = reader_with(MockLink::new(), SessionConfig::default());
    assert!(matches!(reader.sys_ticks(), Err(Error::Timeout)));
    assert!(!reader.session().is_open());
    assert_eq!(reader.link().closes, 1);
}

#[test]
fn persistent_session_stays_open_until_failure() {
    let mut link = MockLink::new();
    link.push_response(vec![0x00, 0x01, 0x00, 0x00, 0x00]);
    link.push_response(vec![0x00, 0x02, 0x00, 0x00, 0x00]);
    link.push_line("XYZ");
    let mut reader = reader_with(link, SessionConfig::default().with_keep_open(true));

    reader.sys_ticks().unwrap();
    reader.sys_ticks().unwrap();
    assert!(reader.session().is_open());
    assert_eq!(reader.link().opens, 1);

    assert!(matches!(reader.sys_ticks(), Err(Error::FrameDecode(_))));
    assert!(!reader.session().is_open());
}

#[test]
fn session_config_reaches_link() {
    let mut link = MockLink::new();
    link.push_response(vec![0x00]);
    let config = SessionConfig::default().with_baud_rate(115_200);
    let mut reader = reader_with(link, config.clone());
    reader.set_rf_off().unwrap();
    assert_eq!(reader.link().last_config.as_ref(), Some(&config));
    assert_eq!(reader.link().last_port.as_deref(), Some("COM4"));
}
