// Send one raw Simple Protocol command and print the reply.
//
//   cargo run --example raw_call -- COM3 "05 00 FF"
//
// A nonzero status byte is printed together with the reader's last error.

use anyhow::Context;
use libtwn4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let port = args.next().context("usage: raw_call <port> <hex>")?;
    let hex = args.next().context("usage: raw_call <port> <hex>")?;

    let cmd = Command::from_bytes(parse_hex(&hex)?)?;
    let mut reader = Reader::serial(port);

    match reader.call_function(&cmd) {
        Ok(parser) => println!("OK {}", bytes_to_hex_spaced(parser.rest())),
        Err(Error::Protocol(status)) => {
            println!("status: {} ({:#04x})", status, status.as_u8());
            let last = reader.last_error()?;
            println!("last error: {} (code {}, {:?})", last, last.code(), last.category());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
