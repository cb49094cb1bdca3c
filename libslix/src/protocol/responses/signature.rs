// libslix-rs/libslix/src/protocol/responses/signature.rs

//! Read Signature response.

use crate::constants::{READ_SIGNATURE_RESPONSE_LEN, SIGNATURE_LEN};
use crate::protocol::parser;
use crate::protocol::responses::error::error_response_parse;
use crate::Result;

/// Parse a Read Signature response
/// Layout: flags(1) + signature(32)
pub fn parse_read_signature_response(data: &[u8]) -> Result<[u8; SIGNATURE_LEN]> {
    if let Some(err) = error_response_parse(data) {
        return Err(err);
    }
    parser::ensure_exact_len(data, READ_SIGNATURE_RESPONSE_LEN)?;
    parser::array_at::<SIGNATURE_LEN>(data, 1)
}
