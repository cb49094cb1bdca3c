// libslix-rs/libslix/src/iso15693/error_frame.rs

//! Recognizer for ISO15693 two-byte error responses.

use crate::Iso15693Error;
use crate::constants::*;

/// Recognize an ISO15693-3 error response.
///
/// Returns `None` when the frame does not carry the error flag. An empty
/// frame is reported as `BufferEmpty`; an error flag without an error code
/// byte as `UnexpectedResponse`.
pub fn error_response_parse(buf: &[u8]) -> Option<Iso15693Error> {
    let flags = match buf.first() {
        Some(&f) => f,
        None => return Some(Iso15693Error::BufferEmpty),
    };

    if flags & RESP_FLAG_ERROR == 0 {
        return None;
    }

    let code = match buf.get(1) {
        Some(&c) => c,
        None => return Some(Iso15693Error::UnexpectedResponse),
    };

    let err = match code {
        RESP_ERROR_CUSTOM_START..=RESP_ERROR_CUSTOM_END => Iso15693Error::Custom,
        RESP_ERROR_NOT_SUPPORTED | RESP_ERROR_OPTION => Iso15693Error::NotSupported,
        RESP_ERROR_FORMAT => Iso15693Error::Format,
        RESP_ERROR_BLOCK_UNAVAILABLE
        | RESP_ERROR_BLOCK_ALREADY_LOCKED
        | RESP_ERROR_BLOCK_LOCKED
        | RESP_ERROR_BLOCK_WRITE
        | RESP_ERROR_BLOCK_LOCK => Iso15693Error::Internal,
        _ => Iso15693Error::Unknown,
    };
    Some(err)
}
