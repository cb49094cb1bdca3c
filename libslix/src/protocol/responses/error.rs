// libslix-rs/libslix/src/protocol/responses/error.rs

//! Error response detection for custom command replies.

use crate::iso15693;
use crate::SlixError;

/// Recognize an error response and translate it into a [`SlixError`].
///
/// `None` means the frame is not an error frame.
pub fn error_response_parse(buf: &[u8]) -> Option<SlixError> {
    iso15693::error_response_parse(buf).map(SlixError::from)
}
