#![cfg(feature = "hardware-tests")]

#[path = "common.rs"]
mod common;

use libtwn4::Result;
use serial_test::serial;

// These tests require a real reader on the port named by TWN4_PORT. They
// are marked `#[ignore]` so CI does not attempt to run them. Run manually
// with:
//
// TWN4_PORT=/dev/ttyACM0 cargo test -p libtwn4 --test hardware --features hardware-tests -- --ignored

#[test]
#[ignore]
#[serial]
fn reads_version_string() -> Result<()> {
    let Some(mut reader) = common::reader_from_env() else {
        return Ok(());
    };
    let version = reader.version_string()?;
    assert!(!version.is_empty());
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn sys_ticks_advance() -> Result<()> {
    let Some(mut reader) = common::reader_from_env() else {
        return Ok(());
    };
    let a = reader.sys_ticks()?;
    std::thread::sleep(std::time::Duration::from_millis(50));
    let b = reader.sys_ticks()?;
    assert!(b > a);
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn identify_whatever_is_on_the_reader() -> Result<()> {
    let Some(mut reader) = common::reader_from_env() else {
        return Ok(());
    };
    if let Some(chip) = reader.get_single_chip() {
        println!("{:?} {} {:?}", chip.chip_type, chip.uid, chip.subtype);
    }
    Ok(())
}
