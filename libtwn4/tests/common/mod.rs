// Shared helpers for integration tests. Each aggregator pulls this in via
// `#[path]`, so not every item is used by every test crate.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
