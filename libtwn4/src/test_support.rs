//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockLink setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::Reader;
use crate::transport::{MockLink, SessionConfig};

/// Port name used by mock readers.
pub const MOCK_PORT: &str = "MOCK0";

/// Build a MockLink pre-seeded with the given replies (raw response
/// bytes, status byte first).
#[doc(hidden)]
pub fn mock_link_with_responses(responses: Vec<Vec<u8>>) -> MockLink {
    let mut link = MockLink::new();
    for resp in responses {
        link.push_response(resp);
    }
    link
}

/// Session settings for tests: no delay between open retries.
#[doc(hidden)]
pub fn fast_config() -> SessionConfig {
    SessionConfig::default().with_open_retry_delay_ms(0)
}

/// Convenience: a Reader over a MockLink seeded with `responses`.
#[doc(hidden)]
pub fn mock_reader(responses: Vec<Vec<u8>>) -> Reader<MockLink> {
    Reader::with_link(mock_link_with_responses(responses), MOCK_PORT, fast_config())
}
