// libtwn4/src/error.rs

//! Crate-wide error type.

use thiserror::Error;

use crate::types::ResponseError;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No port name was given or resolved.
    #[error("device not found")]
    DeviceNotFound,

    /// The port is held by another process; retried by the session.
    #[error("access denied opening port {port}")]
    AccessDenied {
        /// Port that refused the open.
        port: String,
    },

    /// Opening the port failed for any other reason.
    #[error("failed to open port {port}: {reason}")]
    OpenFailed {
        /// Port that failed to open.
        port: String,
        /// Driver description of the failure.
        reason: String,
    },

    /// Error from the `serialport` driver.
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    /// I/O error on the link.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// No complete response line before the read timeout.
    #[error("operation timed out")]
    Timeout,

    /// The link is closed or went away mid-call.
    #[error("port is not open")]
    Disconnected,

    /// A response line was not valid hex.
    #[error("frame decode error: {0}")]
    FrameDecode(String),

    /// A parser read ran past the end of the response.
    #[error("short response: expected {expected} more bytes, got {actual}")]
    ShortResponse {
        /// Bytes the read asked for.
        expected: usize,
        /// Bytes that were left.
        actual: usize,
    },

    /// The response decoded but its content is inconsistent.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The reader answered with a non-zero status byte.
    #[error("reader returned {0}")]
    Protocol(ResponseError),

    /// A caller-supplied argument is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The operation is not available in this build.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A blocking task of the async adapter panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),
}

impl Error {
    /// True for failures of the serial link itself (as opposed to framing,
    /// parsing or a status reported by the reader).
    pub fn is_transport(&self) -> bool {
        match self {
            Self::DeviceNotFound
            | Self::AccessDenied { .. }
            | Self::OpenFailed { .. }
            | Self::Io(_)
            | Self::Timeout
            | Self::Disconnected => true,
            #[cfg(feature = "serial")]
            Self::Serial(_) => true,
            _ => false,
        }
    }

    /// The status code carried by a `Protocol` error, if any.
    pub fn response_error(&self) -> Option<ResponseError> {
        match self {
            Self::Protocol(code) => Some(*code),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
