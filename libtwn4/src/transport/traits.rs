// libtwn4/src/transport/traits.rs

//! Link and port resolution traits.

use crate::Result;
use crate::transport::config::SessionConfig;

/// Line-oriented serial link. Abstracts the physical port away from the
/// session so tests can script replies.
pub trait SerialLink {
    /// Open `port` with the given line settings. A port held by another
    /// process must fail with `Error::AccessDenied` so the session can retry.
    fn open(&mut self, port: &str, config: &SessionConfig) -> Result<()>;

    /// Release the port. Closing a closed link is a no-op.
    fn close(&mut self) -> Result<()>;

    /// True between a successful `open` and `close`.
    fn is_open(&self) -> bool;

    /// Drop whatever is sitting in the receive buffer.
    fn discard_input(&mut self) -> Result<()>;

    /// Write one complete line, terminator included.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Read up to (not including) the next `\r`, failing with
    /// `Error::Timeout` after `timeout_ms`.
    fn read_line(&mut self, timeout_ms: u64) -> Result<String>;
}

impl<T: SerialLink + ?Sized> SerialLink for Box<T> {
    fn open(&mut self, port: &str, config: &SessionConfig) -> Result<()> {
        (**self).open(port, config)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn discard_input(&mut self) -> Result<()> {
        (**self).discard_input()
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn read_line(&mut self, timeout_ms: u64) -> Result<String> {
        (**self).read_line(timeout_ms)
    }
}

/// Supplies the name of the port the reader is attached to. Discovery
/// itself is platform specific and left to implementors.
pub trait PortResolver {
    /// Port name, or `DeviceNotFound`.
    fn resolve(&self) -> Result<String>;
}

impl PortResolver for &str {
    fn resolve(&self) -> Result<String> {
        Ok((*self).to_string())
    }
}

impl PortResolver for String {
    fn resolve(&self) -> Result<String> {
        Ok(self.clone())
    }
}
