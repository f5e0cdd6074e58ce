// libtwn4/src/transport/serial.rs

//! `SerialLink` over the `serialport` crate.

use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::constants::LINE_TERMINATOR;
use crate::transport::config::SessionConfig;
use crate::transport::traits::SerialLink;
use crate::{Error, Result};

/// `SerialLink` over a real port (USB CDC or RS-232) using `serialport`.
#[derive(Default)]
pub struct SerialPortLink {
    port: Option<Box<dyn SerialPort>>,
}

impl SerialPortLink {
    /// Closed link; the port is opened by the session.
    pub fn new() -> Self {
        Self::default()
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or(Error::Disconnected)
    }
}

impl std::fmt::Debug for SerialPortLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialPortLink")
            .field("port", &self.port.as_ref().and_then(|p| p.name()))
            .finish()
    }
}

/// Map an open failure so that a port held by another process comes out
/// as `AccessDenied`. Windows reports this as a `NoDevice` error with an
/// "Access is denied" description, unix as `EACCES`/`EBUSY`.
fn map_open_error(port: &str, err: serialport::Error) -> Error {
    let desc = err.description.to_ascii_lowercase();
    let denied = match err.kind {
        serialport::ErrorKind::Io(io::ErrorKind::PermissionDenied) => true,
        serialport::ErrorKind::NoDevice | serialport::ErrorKind::Io(_) => {
            desc.contains("denied") || desc.contains("busy")
        }
        _ => false,
    };
    if denied {
        Error::AccessDenied {
            port: port.to_string(),
        }
    } else {
        Error::OpenFailed {
            port: port.to_string(),
            reason: err.description,
        }
    }
}

impl SerialLink for SerialPortLink {
    fn open(&mut self, port: &str, config: &SessionConfig) -> Result<()> {
        let opened = serialport::new(port, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.timeout())
            .open()
            .map_err(|e| map_open_error(port, e))?;
        self.port = Some(opened);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // dropping the handle releases the OS port
        self.port = None;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn discard_input(&mut self) -> Result<()> {
        self.port_mut()?.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let port = self.port_mut()?;
        port.write_all(line.as_bytes()).map_err(map_io)?;
        port.flush().map_err(map_io)?;
        Ok(())
    }

    fn read_line(&mut self, timeout_ms: u64) -> Result<String> {
        let port = self.port_mut()?;
        read_line_within(&mut **port, Duration::from_millis(timeout_ms), |p, left| {
            Ok(p.set_timeout(left)?)
        })
    }
}

/// Read up to the line terminator. Each blocking read is limited to the
/// time left before the deadline, so the whole line is bounded by
/// `timeout`.
fn read_line_within<R, F>(src: &mut R, timeout: Duration, mut set_timeout: F) -> Result<String>
where
    R: Read + ?Sized,
    F: FnMut(&mut R, Duration) -> Result<()>,
{
    let deadline = Instant::now() + timeout;
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return Err(Error::Timeout);
        }
        set_timeout(src, left)?;
        match src.read(&mut byte) {
            Ok(0) => continue,
            Ok(_) if byte[0] == LINE_TERMINATOR as u8 => break,
            Ok(_) => line.push(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(map_io(e)),
        }
    }
    String::from_utf8(line).map_err(|e| Error::FrameDecode(e.to_string()))
}

fn map_io(e: io::Error) -> Error {
    match e.kind() {
        io::ErrorKind::TimedOut => Error::Timeout,
        io::ErrorKind::BrokenPipe | io::ErrorKind::NotConnected => Error::Disconnected,
        _ => Error::Io(e),
    }
}
