// libtwn4/src/device/reader.rs

//! Blocking command dispatcher.

use log::debug;

use crate::Result;
use crate::card::{self, Chip};
use crate::constants::SEARCH_TAG_MAX_ID_BYTES;
use crate::protocol::responses::{self, TagInfo, TagTypes};
use crate::protocol::{Command, ResponseParser, commands, expect_success};
use crate::transport::{SerialLink, Session, SessionConfig};
use crate::types::{HfTagTypes, LfTagTypes, ReaderError, Uid};

/// Command dispatcher for one reader. Every call borrows the reader
/// mutably, so at most one command is in flight per port.
pub struct Reader<L: SerialLink = Box<dyn SerialLink + Send>> {
    session: Session<L>,
}

impl<L: SerialLink> Reader<L> {
    /// Wrap an existing session.
    pub fn new(session: Session<L>) -> Self {
        Self { session }
    }

    /// Reader over `link`, talking to `port`.
    pub fn with_link(link: L, port: impl Into<String>, config: SessionConfig) -> Self {
        Self::new(Session::new(link, port, config))
    }

    /// Underlying session.
    pub fn session(&self) -> &Session<L> {
        &self.session
    }

    /// Underlying session, mutably.
    pub fn session_mut(&mut self) -> &mut Session<L> {
        &mut self.session
    }

    /// Link the session talks through.
    pub fn link(&self) -> &L {
        self.session.link()
    }

    /// Link, mutably (tests push mock replies through this).
    pub fn link_mut(&mut self) -> &mut L {
        self.session.link_mut()
    }

    /// Port name.
    pub fn port(&self) -> &str {
        self.session.port()
    }

    /// Close a persistent session. A no-op when the port is already closed.
    pub fn close(&mut self) -> Result<()> {
        self.session.close()
    }

    /// Run `cmd` and return the decoded reply, status byte included.
    pub fn call_raw(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        self.session.call(cmd.as_bytes())
    }

    /// Like `call_raw`, with a parser positioned on the status byte.
    pub fn call_unchecked(&mut self, cmd: &Command) -> Result<ResponseParser> {
        Ok(ResponseParser::new(self.call_raw(cmd)?))
    }

    /// Run `cmd` and check the status byte. On success the parser sits on
    /// the first payload byte; any other status is `Error::Protocol`.
    pub fn call_function(&mut self, cmd: &Command) -> Result<ResponseParser> {
        let mut parser = self.call_unchecked(cmd)?;
        if let Err(e) = expect_success(&mut parser) {
            debug!(
                "{:02X}/{:02X} failed: {}",
                cmd.api_group(),
                cmd.function(),
                e
            );
            return Err(e);
        }
        Ok(parser)
    }

    /// Fault code of the last failed firmware function.
    pub fn last_error(&mut self) -> Result<ReaderError> {
        let mut p = self.call_function(&commands::encode_get_last_error())?;
        responses::decode_last_error(&mut p)
    }

    /// Milliseconds since the reader started.
    pub fn sys_ticks(&mut self) -> Result<u32> {
        let mut p = self.call_function(&commands::encode_get_sys_ticks())?;
        responses::decode_sys_ticks(&mut p)
    }

    /// Firmware version text, e.g. `TWN4/B1.08/NCF4.06/PRS1.04`.
    pub fn version_string(&mut self) -> Result<String> {
        let mut p = self.call_function(&commands::encode_get_version_string(0xFF))?;
        responses::decode_version_string(&mut p)
    }

    /// Search for one tag of the enabled types. `Ok(None)` when the
    /// field is empty.
    pub fn search_tag(&mut self) -> Result<Option<TagInfo>> {
        self.search_tag_with_max(SEARCH_TAG_MAX_ID_BYTES)
    }

    /// `search_tag` with an explicit id length limit.
    pub fn search_tag_with_max(&mut self, max_id_bytes: u8) -> Result<Option<TagInfo>> {
        let mut p = self.call_function(&commands::encode_search_tag(max_id_bytes))?;
        responses::decode_search_tag(&mut p)
    }

    /// Switch the RF field off.
    pub fn set_rf_off(&mut self) -> Result<()> {
        self.call_function(&commands::encode_set_rf_off())?;
        Ok(())
    }

    /// Restrict the tag search to the given LF/HF types.
    pub fn set_tag_types(&mut self, lf: LfTagTypes, hf: HfTagTypes) -> Result<()> {
        self.call_function(&commands::encode_set_tag_types(lf, hf))?;
        Ok(())
    }

    /// Tag types the search currently looks for.
    pub fn get_tag_types(&mut self) -> Result<TagTypes> {
        let mut p = self.call_function(&commands::encode_get_tag_types())?;
        responses::decode_tag_types(&mut p)
    }

    /// Tag types this reader can search for.
    pub fn get_supported_tag_types(&mut self) -> Result<TagTypes> {
        let mut p = self.call_function(&commands::encode_get_supported_tag_types())?;
        responses::decode_tag_types(&mut p)
    }

    /// SAK of the selected ISO14443A card.
    pub fn get_sak(&mut self) -> Result<Option<u8>> {
        let mut p = self.call_function(&commands::encode_get_sak())?;
        responses::decode_sak(&mut p)
    }

    /// ATS of the selected ISO14443A card, at most `max_len` bytes.
    pub fn get_ats(&mut self, max_len: u8) -> Result<Option<Vec<u8>>> {
        let mut p = self.call_function(&commands::encode_get_ats(max_len))?;
        responses::decode_transceive(&mut p)
    }

    /// Raw layer-3 exchange. `Ok(None)` when the card did not answer.
    pub fn iso14443_3_transceive(
        &mut self,
        tx: &[u8],
        max_rx: u8,
        timeout: u16,
    ) -> Result<Option<Vec<u8>>> {
        let cmd = commands::encode_iso14443_3_transceive(tx, max_rx, timeout)?;
        let mut p = self.call_function(&cmd)?;
        responses::decode_transceive(&mut p)
    }

    /// Layer-4 (T=CL) exchange. `Ok(None)` when the card did not answer.
    pub fn iso14443_4_transceive(&mut self, tx: &[u8], max_rx: u8) -> Result<Option<Vec<u8>>> {
        let cmd = commands::encode_iso14443_4_transceive(tx, max_rx)?;
        let mut p = self.call_function(&cmd)?;
        responses::decode_transceive(&mut p)
    }

    /// Ids of every ISO14443A card in the field.
    pub fn search_multi_tag(&mut self) -> Result<Vec<Uid>> {
        let mut p = self.call_function(&commands::encode_search_multi_tag(
            SEARCH_TAG_MAX_ID_BYTES,
        ))?;
        responses::decode_multi_tag(&mut p)
    }

    /// Search for one chip and identify it. See [`card::identify`].
    pub fn get_single_chip(&mut self) -> Option<Chip> {
        card::identify(self)
    }
}

impl<L: SerialLink> std::fmt::Debug for Reader<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("port", &self.session.port())
            .field("config", self.session.config())
            .finish()
    }
}

#[cfg(feature = "serial")]
impl Reader<crate::transport::SerialPortLink> {
    /// Reader on a serial port with the default session settings.
    pub fn serial(port: impl Into<String>) -> Self {
        Self::with_link(
            crate::transport::SerialPortLink::new(),
            port,
            SessionConfig::default(),
        )
    }
}
