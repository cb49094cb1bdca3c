// libslix-rs/libslix/src/protocol/commands/signature.rs

//! Read Signature (0xBD) request.

use crate::constants::CMD_READ_SIGNATURE;
use crate::protocol::frame::Request;
use crate::types::Uid;

/// Encode Read Signature (0xBD): flags + command + manufacturer [+ uid]
pub fn encode_read_signature(flags: u8, uid: Option<&Uid>) -> Vec<u8> {
    Request::encode(flags, CMD_READ_SIGNATURE, uid, &[])
}
