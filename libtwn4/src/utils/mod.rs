//! Small helpers shared across the crate: hex formatting for logs and
//! millisecond timeouts.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use timeout::*;
