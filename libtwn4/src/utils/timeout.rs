//! Millisecond timeout helpers.

use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_MS;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default per-call read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_TIMEOUT_MS)
}
