// libtwn4/src/transport/mod.rs

//! Serial links and the session that drives them.

pub mod config;
pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod session;
pub mod traits;

pub use config::SessionConfig;
pub use mock::MockLink;
#[cfg(feature = "serial")]
pub use serial::SerialPortLink;
pub use session::Session;
pub use traits::{PortResolver, SerialLink};
