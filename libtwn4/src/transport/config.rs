// libtwn4/src/transport/config.rs

//! Session settings.

use std::time::Duration;

use crate::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_OPEN_RETRIES, DEFAULT_OPEN_RETRY_DELAY_MS, DEFAULT_TIMEOUT_MS,
};

/// Session settings. The defaults match the reader's factory setup:
/// 9600-8-N-1, 2 s timeout, three retries 1 s apart when the port is
/// held by someone else, and the port closed again after every call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Line speed.
    pub baud_rate: u32,
    /// Bound on reading one reply line.
    pub timeout_ms: u64,
    /// Extra open attempts after `AccessDenied`.
    pub open_retries: u32,
    /// Pause before each extra attempt.
    pub open_retry_delay_ms: u64,
    /// Keep the port open between calls instead of reopening per call.
    pub keep_open: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            open_retries: DEFAULT_OPEN_RETRIES,
            open_retry_delay_ms: DEFAULT_OPEN_RETRY_DELAY_MS,
            keep_open: false,
        }
    }
}

impl SessionConfig {
    /// Set `baud_rate`.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set `timeout_ms`.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set `open_retries`.
    pub fn with_open_retries(mut self, retries: u32) -> Self {
        self.open_retries = retries;
        self
    }

    /// Set `open_retry_delay_ms`.
    pub fn with_open_retry_delay_ms(mut self, delay_ms: u64) -> Self {
        self.open_retry_delay_ms = delay_ms;
        self
    }

    /// Set `keep_open`.
    pub fn with_keep_open(mut self, keep_open: bool) -> Self {
        self.keep_open = keep_open;
        self
    }

    /// `timeout_ms` as a `Duration`.
    pub fn timeout(&self) -> Duration {
        crate::utils::ms(self.timeout_ms)
    }

    /// `open_retry_delay_ms` as a `Duration`.
    pub fn open_retry_delay(&self) -> Duration {
        crate::utils::ms(self.open_retry_delay_ms)
    }
}
