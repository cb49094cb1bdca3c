// libslix-rs/libslix/src/transport/mock.rs

//! In-memory transport for tests.

use crate::transport::traits::Transport;
use crate::Iso15693Error;

/// Mock transport for unit tests. It records sent frames and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Frames sent, oldest first
    pub sent: Vec<Vec<u8>>,
    /// Replies handed out by `receive`, oldest first
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of send calls that should fail
    pub send_failures: usize,
    /// Error returned by failing sends
    pub send_error: Option<Iso15693Error>,
    /// Timeout passed to the most recent receive call
    pub last_timeout_ms: Option<u64>,
    /// Number of `reset` calls
    pub resets: usize,
}

impl MockTransport {
    /// Empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` send calls fail with `err` (for tests).
    pub fn set_send_failures(&mut self, n: usize, err: Iso15693Error) {
        self.send_failures = n;
        self.send_error = Some(err);
    }

    /// Queue a reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Take the most recently sent frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), Iso15693Error> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(self.send_error.unwrap_or(Iso15693Error::Io));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>, Iso15693Error> {
        self.last_timeout_ms = Some(timeout_ms);
        if self.responses.is_empty() {
            Err(Iso15693Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn reset(&mut self) -> Result<(), Iso15693Error> {
        // Clear recorded frames but keep queued responses so tests can
        // pre-seed replies before handing the transport over.
        self.sent.clear();
        self.resets += 1;
        Ok(())
    }
}
