// libtwn4/src/lib.rs

//! libtwn4
//!
//! Pure Rust client for TWN4 readers speaking the Simple Protocol
//! (hex lines over a 9600-8-N-1 serial port), with chip identification.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the wire types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
