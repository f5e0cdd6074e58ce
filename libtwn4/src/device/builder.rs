// libtwn4/src/device/builder.rs

//! Builder for `Reader`.

use crate::device::reader::Reader;
use crate::transport::{PortResolver, SerialLink, SessionConfig};
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    port: Option<String>,
    resolver: Option<Box<dyn PortResolver>>,
    config: SessionConfig,
    link: Option<Box<dyn SerialLink + Send>>,
}

impl ReaderBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Port name, e.g. `COM3` or `/dev/ttyACM0`.
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Ask `resolver` for the port name at build time. An explicit
    /// `port()` takes precedence.
    pub fn resolver(mut self, resolver: impl PortResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Session settings.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide an already-created link instance (e.g. MockLink)
    pub fn with_link(mut self, link: impl SerialLink + Send + 'static) -> Self {
        self.link = Some(Box::new(link));
        self
    }

    /// Consume the builder. Without a port name (or a resolver) this
    /// returns `DeviceNotFound`; without a link the serial port link is
    /// used when the `serial` feature is enabled.
    pub fn build(self) -> Result<Reader> {
        let port = match (self.port, self.resolver) {
            (Some(port), _) => port,
            (None, Some(resolver)) => resolver.resolve()?,
            (None, None) => return Err(Error::DeviceNotFound),
        };
        let link = match self.link {
            Some(link) => link,
            None => default_link()?,
        };
        Ok(Reader::with_link(link, port, self.config))
    }
}

#[cfg(feature = "serial")]
fn default_link() -> Result<Box<dyn SerialLink + Send>> {
    Ok(Box::new(crate::transport::SerialPortLink::new()))
}

#[cfg(not(feature = "serial"))]
fn default_link() -> Result<Box<dyn SerialLink + Send>> {
    Err(Error::UnsupportedOperation(
        "no link given and the serial feature is disabled".to_string(),
    ))
}
