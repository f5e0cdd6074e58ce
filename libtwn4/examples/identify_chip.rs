// Identify the chip on a TWN4 reader.
//
//   cargo run --example identify_chip -- /dev/ttyACM0
//
// Set RUST_LOG=debug to see every line on the wire.

use anyhow::Context;
use libtwn4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .context("usage: identify_chip <port>")?;

    let mut reader = ReaderBuilder::new()
        .port(port)
        .config(SessionConfig::default().with_keep_open(true))
        .build()?;

    println!("Reader: {}", reader.version_string()?);

    match reader.get_single_chip() {
        Some(chip) => {
            println!("UID:      {}", chip.uid);
            println!("Type:     {:?}", chip.chip_type);
            match chip.subtype {
                Some(sub) => println!("Subtype:  {} ({:#04X})", sub, sub.as_u8()),
                None => println!("Subtype:  -"),
            }
            if let Some(sak) = chip.evidence.sak {
                println!("SAK:      {:02X}", sak);
            }
            if let Some(ats) = &chip.evidence.ats {
                println!("ATS:      {}", bytes_to_hex_spaced(ats));
            }
        }
        None => println!("No chip in the field"),
    }
    Ok(())
}
