// libslix-rs/libslix/src/listener/mod.rs

//! Tag emulation: answers SLIX custom commands from a reader.
//!
//! Requests that cannot be parsed (or are not meant for this tag) are
//! dropped without a reply, like a real tag. A parsed request whose command
//! is rejected gets the two-byte error frame `[0x01, 0x0F]`.

use log::debug;

use crate::constants::*;
use crate::protocol::frame::{self, Request};
use crate::protocol::SlixCommand;
use crate::tag::SlixData;
use crate::transport::Transport;
use crate::types::PasswordKind;
use crate::{Result, SlixError};

/// Payload builders for each command.
pub mod handlers;
mod session;

pub use session::SessionState;

/// Listener lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    /// No session; the next request opens one
    Idle,
    /// A session is open and carries a [`SessionState`]
    SessionActive,
}

/// Outcome of a request that was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The command was handled and its response sent
    Handled(SlixCommand),
    /// The command was rejected and the error frame sent
    Rejected(SlixError),
}

/// Emulated SLIX tag answering requests over a [`Transport`].
///
/// Owns the tag data and never modifies it while processing requests.
pub struct SlixListener<T: Transport> {
    data: SlixData,
    transport: T,
    state: ListenerState,
    session: SessionState,
}

impl<T: Transport> SlixListener<T> {
    /// Create an idle listener emulating `data`.
    pub fn new(data: SlixData, transport: T) -> Self {
        Self {
            data,
            transport,
            state: ListenerState::Idle,
            session: SessionState::default(),
        }
    }

    /// The emulated tag.
    pub fn data(&self) -> &SlixData {
        &self.data
    }

    /// Give back the emulated tag, ending any session.
    pub fn into_data(self) -> SlixData {
        self.data
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ListenerState {
        self.state
    }

    /// Current session, if one is active.
    pub fn session(&self) -> Option<&SessionState> {
        match self.state {
            ListenerState::SessionActive => Some(&self.session),
            ListenerState::Idle => None,
        }
    }

    /// Start a session (base protocol select) with a fresh random challenge.
    pub fn select(&mut self, random_challenge: u16) {
        debug!("session start, challenge {:#06x}", random_challenge);
        self.session = SessionState::new(random_challenge);
        self.state = ListenerState::SessionActive;
    }

    /// End the session and forget any verified passwords.
    pub fn reset(&mut self) {
        if self.state == ListenerState::SessionActive {
            debug!("session end");
        }
        self.session = SessionState::default();
        self.state = ListenerState::Idle;
    }

    /// Check a password sent masked with the session challenge.
    ///
    /// An unset password slot accepts anything. The result is remembered
    /// for the rest of the session.
    pub fn verify_password(&mut self, kind: PasswordKind, masked: [u8; PASSWORD_LEN]) -> bool {
        self.ensure_session();
        let candidate = self.session.unmask(&masked);
        let ok = self.data.password_slot(kind).accepts(&candidate);
        self.session.set_verified(kind, ok);
        debug!("{} password {}", kind, if ok { "verified" } else { "rejected" });
        ok
    }

    /// Whether operations guarded by `kind` are allowed in this session.
    pub fn is_unlocked(&self, kind: PasswordKind) -> bool {
        !self.data.password_slot(kind).is_set
            || self.session().is_some_and(|s| s.is_verified(kind))
    }

    /// Process one request frame and send the reply.
    ///
    /// Returns `Err` when the frame was dropped without reply or when the
    /// transport failed to send.
    pub fn process_request(&mut self, rx: &[u8]) -> Result<Dispatch> {
        self.ensure_session();

        #[cfg(feature = "diagnostics")]
        log::trace!("rx {}", crate::utils::bytes_to_hex_spaced(rx));

        let request = Request::parse(rx).inspect_err(|_| {
            debug!("dropping malformed request ({} bytes)", rx.len());
        })?;

        if let Some(uid) = request.uid {
            if uid != *self.data.uid() {
                debug!("request addressed to {}, ignoring", uid.to_hex());
                return Err(SlixError::Unknown);
            }
        }

        if request.manufacturer != NXP_MANUFACTURER_CODE {
            debug!(
                "request for manufacturer {:#04x}, ignoring",
                request.manufacturer
            );
            return Err(SlixError::Unknown);
        }

        let handled = SlixCommand::try_from(request.command)
            .and_then(|cmd| handlers::handle(cmd, &self.data).map(|p| (cmd, p)));

        let (tx, dispatch) = match handled {
            Ok((cmd, payload)) => (frame::ok_response(&payload), Dispatch::Handled(cmd)),
            Err(err) => {
                debug!("command {:#04x} rejected: {}", request.command, err);
                (frame::error_response(RESP_ERROR_UNKNOWN), Dispatch::Rejected(err))
            }
        };

        #[cfg(feature = "diagnostics")]
        log::trace!("tx {}", crate::utils::bytes_to_hex_spaced(&tx));

        self.transport.send(&tx).map_err(SlixError::from)?;
        Ok(dispatch)
    }

    fn ensure_session(&mut self) {
        if self.state == ListenerState::Idle {
            self.select(0);
        }
    }
}
