// libtwn4/src/device/async_reader.rs

//! Async adapter that runs blocking reader calls on tokio's blocking pool.

use std::sync::{Arc, Mutex};

use crate::card::Chip;
use crate::device::reader::Reader;
use crate::protocol::{Command, TagInfo};
use crate::transport::SerialLink;
use crate::types::{ReaderError, Uid};
use crate::{Error, Result};

/// Shares one `Reader` between tasks; the mutex keeps a single command
/// in flight per port.
pub struct AsyncReader<L: SerialLink + Send + 'static = Box<dyn SerialLink + Send>> {
    inner: Arc<Mutex<Reader<L>>>,
}

impl<L: SerialLink + Send + 'static> Clone for AsyncReader<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: SerialLink + Send + 'static> AsyncReader<L> {
    /// Take ownership of `reader`.
    pub fn new(reader: Reader<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(reader)),
        }
    }

    /// Run `f` against the reader on the blocking pool.
    pub async fn with_reader<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Reader<L>) -> Result<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut reader = inner
                .lock()
                .map_err(|_| Error::Task("reader mutex poisoned".to_string()))?;
            f(&mut reader)
        })
        .await
        .map_err(|e| Error::Task(e.to_string()))?
    }

    /// See [`Reader::call_raw`].
    pub async fn call_raw(&self, cmd: Command) -> Result<Vec<u8>> {
        self.with_reader(move |r| r.call_raw(&cmd)).await
    }

    /// Checked call; returns the payload after the status byte.
    pub async fn call_function(&self, cmd: Command) -> Result<Vec<u8>> {
        self.with_reader(move |r| Ok(r.call_function(&cmd)?.rest().to_vec()))
            .await
    }

    /// See [`Reader::search_tag`].
    pub async fn search_tag(&self) -> Result<Option<TagInfo>> {
        self.with_reader(|r| r.search_tag()).await
    }

    /// See [`Reader::search_multi_tag`].
    pub async fn search_multi_tag(&self) -> Result<Vec<Uid>> {
        self.with_reader(|r| r.search_multi_tag()).await
    }

    /// See [`Reader::last_error`].
    pub async fn last_error(&self) -> Result<ReaderError> {
        self.with_reader(|r| r.last_error()).await
    }

    /// See [`Reader::version_string`].
    pub async fn version_string(&self) -> Result<String> {
        self.with_reader(|r| r.version_string()).await
    }

    /// `Ok(None)` when no chip is present; `Err` only if the blocking
    /// task itself failed.
    pub async fn get_single_chip(&self) -> Result<Option<Chip>> {
        self.with_reader(|r| Ok(r.get_single_chip())).await
    }
}
