// libtwn4/src/transport/session.rs

//! Per-call open, exchange and close.

use std::thread;

use log::{debug, warn};

use crate::protocol::Frame;
use crate::transport::config::SessionConfig;
use crate::transport::traits::SerialLink;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Owns the link to one reader port and runs single request/response
/// exchanges over it.
///
/// Each call opens the port (retrying while access is denied), discards
/// stale input, writes the request line, reads one reply line and closes
/// the port again. With `keep_open` the port stays open between calls and
/// is only closed on failure, on `close()` or on drop.
pub struct Session<L: SerialLink> {
    link: L,
    port: String,
    config: SessionConfig,
}

impl<L: SerialLink> Session<L> {
    /// Session on `port`; nothing is opened until the first call.
    pub fn new(link: L, port: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            link,
            port: port.into(),
            config,
        }
    }

    /// Port name.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Settings in use.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Underlying link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Underlying link, mutably.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// True while the port is held open.
    pub fn is_open(&self) -> bool {
        self.link.is_open()
    }

    /// Send `request` and return the decoded reply bytes (status first).
    pub fn call(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        let result = self.exchange(request);
        if result.is_err() || !self.config.keep_open {
            self.close_quietly();
        }
        result
    }

    fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        if !self.link.is_open() {
            self.open()?;
        }
        self.link.discard_input()?;

        debug!("{} -> {}", self.port, bytes_to_hex_spaced(request));
        self.link.write_line(&Frame::encode_line(request))?;

        let line = self.link.read_line(self.config.timeout_ms)?;
        let reply = Frame::decode_line(&line)?;
        debug!("{} <- {}", self.port, bytes_to_hex_spaced(&reply));
        Ok(reply)
    }

    /// Open the port. Only `AccessDenied` is retried, up to
    /// `open_retries` more times with a fixed delay; the last denial is
    /// returned once they are used up.
    pub fn open(&mut self) -> Result<()> {
        let mut retries = 0u32;
        loop {
            match self.link.open(&self.port, &self.config) {
                Ok(()) => {
                    if retries > 0 {
                        debug!("{} opened after {} retries", self.port, retries);
                    }
                    return Ok(());
                }
                Err(e @ Error::AccessDenied { .. }) if retries < self.config.open_retries => {
                    retries += 1;
                    warn!(
                        "{} (retry {}/{} in {} ms)",
                        e, retries, self.config.open_retries, self.config.open_retry_delay_ms
                    );
                    thread::sleep(self.config.open_retry_delay());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Close the port if it is open.
    pub fn close(&mut self) -> Result<()> {
        if self.link.is_open() {
            self.link.close()?;
        }
        Ok(())
    }

    fn close_quietly(&mut self) {
        if let Err(e) = self.close() {
            debug!("closing {} failed: {}", self.port, e);
        }
    }
}

impl<L: SerialLink> Drop for Session<L> {
    fn drop(&mut self) {
        self.close_quietly();
    }
}
