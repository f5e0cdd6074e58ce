// libtwn4/src/transport/mock.rs

//! Scripted in-memory link for tests.

use crate::protocol::Frame;
use crate::transport::config::SessionConfig;
use crate::transport::traits::SerialLink;
use crate::{Error, Result};

/// Mock link for unit tests. It records written lines and returns queued
/// reply lines; opens can be scripted to be denied or to fail outright.
#[derive(Debug, Default)]
pub struct MockLink {
    /// Reply lines, consumed front first (terminator optional).
    pub responses: Vec<String>,
    /// Lines written by the session, terminator included.
    pub written: Vec<String>,
    /// Calls to `open`, failed ones included.
    pub open_attempts: usize,
    /// Successful opens.
    pub opens: usize,
    /// Calls to `close`.
    pub closes: usize,
    /// Calls to `discard_input`.
    pub discards: usize,
    /// Testing hook: number of upcoming opens that fail with AccessDenied
    pub denied_opens: usize,
    /// Testing hook: every open fails with OpenFailed carrying this reason
    pub open_failure: Option<String>,
    /// Port passed to the last open.
    pub last_port: Option<String>,
    /// Settings passed to the last open.
    pub last_config: Option<SessionConfig>,
    open: bool,
}

impl MockLink {
    /// Closed link with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply given as raw response bytes (status byte first).
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Frame::encode_line(&resp));
    }

    /// Queue a reply line verbatim, e.g. to inject malformed hex.
    pub fn push_line(&mut self, line: &str) {
        self.responses.push(line.to_string());
    }

    /// Let the next `n` opens fail with `AccessDenied`.
    pub fn deny_opens(&mut self, n: usize) {
        self.denied_opens = n;
    }

    /// Make every open fail with `OpenFailed`.
    pub fn fail_opens(&mut self, reason: &str) {
        self.open_failure = Some(reason.to_string());
    }

    /// Written lines decoded back into command bytes.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.written
            .iter()
            .filter_map(|l| Frame::decode_line(l).ok())
            .collect()
    }
}

impl SerialLink for MockLink {
    fn open(&mut self, port: &str, config: &SessionConfig) -> Result<()> {
        self.open_attempts += 1;
        self.last_port = Some(port.to_string());
        self.last_config = Some(config.clone());
        if let Some(reason) = &self.open_failure {
            return Err(Error::OpenFailed {
                port: port.to_string(),
                reason: reason.clone(),
            });
        }
        if self.denied_opens > 0 {
            self.denied_opens -= 1;
            return Err(Error::AccessDenied {
                port: port.to_string(),
            });
        }
        self.opens += 1;
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.open {
            self.closes += 1;
            self.open = false;
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn discard_input(&mut self) -> Result<()> {
        if !self.open {
            return Err(Error::Disconnected);
        }
        self.discards += 1;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        if !self.open {
            return Err(Error::Disconnected);
        }
        self.written.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, _timeout_ms: u64) -> Result<String> {
        if !self.open {
            return Err(Error::Disconnected);
        }
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            let line = self.responses.remove(0);
            Ok(line.trim_end_matches('\r').to_string())
        }
    }
}
