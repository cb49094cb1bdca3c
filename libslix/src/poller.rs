// libslix-rs/libslix/src/poller.rs

//! Reader side client for the SLIX custom commands.

use log::debug;

use crate::constants::{REQ_FLAG_ADDRESSED, REQ_FLAG_DATA_RATE_HI, SIGNATURE_LEN};
use crate::protocol::{Response, SlixCommand};
use crate::tag::SystemInfo;
use crate::transport::Transport;
use crate::types::Uid;
use crate::utils::DEFAULT_FWT_MS;
use crate::{Result, SlixError};

/// Per-poller request settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Frame wait time for each round trip
    pub timeout_ms: u64,
    /// ISO15693 request flags byte
    pub request_flags: u8,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_FWT_MS,
            request_flags: REQ_FLAG_DATA_RATE_HI,
        }
    }
}

impl PollerConfig {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frame wait time.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the base request flags; the addressed bit is managed per request.
    pub fn request_flags(mut self, flags: u8) -> Self {
        self.request_flags = flags;
        self
    }
}

/// Reader issuing SLIX custom commands over a [`Transport`].
pub struct SlixPoller<T: Transport> {
    transport: T,
    config: PollerConfig,
    target: Option<Uid>,
}

impl<T: Transport> SlixPoller<T> {
    /// Poller with default settings.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, PollerConfig::default())
    }

    /// Poller with explicit settings.
    pub fn with_config(transport: T, config: PollerConfig) -> Self {
        Self {
            transport,
            config,
            target: None,
        }
    }

    /// Current settings.
    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Address subsequent requests to `uid`, or broadcast with `None`.
    pub fn set_target(&mut self, uid: Option<Uid>) {
        self.target = uid;
    }

    /// Addressed UID, if any.
    pub fn target(&self) -> Option<&Uid> {
        self.target.as_ref()
    }

    fn flags(&self) -> u8 {
        match self.target {
            Some(_) => self.config.request_flags | REQ_FLAG_ADDRESSED,
            None => self.config.request_flags & !REQ_FLAG_ADDRESSED,
        }
    }

    /// One request/response round trip.
    pub fn send_frame(&mut self, tx: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        #[cfg(feature = "diagnostics")]
        log::trace!("tx {}", crate::utils::bytes_to_hex_spaced(tx));

        let rx = self
            .transport
            .send_frame(tx, timeout_ms)
            .map_err(|err| {
                debug!("transport error: {}", err);
                SlixError::from(err)
            })?;

        #[cfg(feature = "diagnostics")]
        log::trace!("rx {}", crate::utils::bytes_to_hex_spaced(&rx));

        Ok(rx)
    }

    /// Send `cmd` and decode its response.
    pub fn execute(&mut self, cmd: SlixCommand) -> Result<Response> {
        let tx = cmd.encode(self.flags(), self.target.as_ref());
        let rx = self.send_frame(&tx, self.config.timeout_ms)?;
        Response::decode(cmd, &rx).inspect_err(|err| {
            debug!("{:?} response rejected: {}", cmd, err);
        })
    }

    /// Read protection pointer, condition and lock bits (command 0xAB).
    pub fn get_nxp_system_info(&mut self) -> Result<SystemInfo> {
        match self.execute(SlixCommand::GetNxpSystemInfo)? {
            Response::NxpSystemInfo(info) => Ok(info.system_info),
            _ => Err(SlixError::Internal),
        }
    }

    /// Read the 32-byte originality signature (command 0xBD).
    pub fn read_signature(&mut self) -> Result<[u8; SIGNATURE_LEN]> {
        match self.execute(SlixCommand::ReadSignature)? {
            Response::Signature(sig) => Ok(sig),
            _ => Err(SlixError::Internal),
        }
    }
}
