// libslix-rs/libslix/src/transport/traits.rs

//! The [`Transport`] trait.

use crate::Iso15693Error;

/// Transport trait abstracts the ISO15693-3 link layer away from SLIX
/// protocol logic. Timeouts are enforced here, never by the caller.
pub trait Transport {
    /// Send a raw frame to the peer
    fn send(&mut self, data: &[u8]) -> Result<(), Iso15693Error>;

    /// Receive a raw frame, waiting at most `timeout_ms` milliseconds
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>, Iso15693Error>;

    /// Perform a transport-level reset
    fn reset(&mut self) -> Result<(), Iso15693Error>;

    /// Single request/response round trip. Default implementation is
    /// `send` followed by `receive`.
    fn send_frame(&mut self, tx: &[u8], timeout_ms: u64) -> Result<Vec<u8>, Iso15693Error> {
        self.send(tx)?;
        self.receive(timeout_ms)
    }
}
