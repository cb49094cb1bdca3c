// libslix-rs/libslix/src/protocol/responses/mod.rs

//! Response decoders, one per command.

pub mod error;
pub mod signature;
pub mod system_info;

pub use error::error_response_parse;
pub use signature::parse_read_signature_response;
pub use system_info::{NxpSystemInfo, decode_nxp_system_info, parse_nxp_system_info_response};

use crate::constants::SIGNATURE_LEN;
use crate::protocol::commands::SlixCommand;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Reply to Get NXP System Info
    NxpSystemInfo(NxpSystemInfo),
    /// Reply to Read Signature
    Signature([u8; SIGNATURE_LEN]),
}

impl Response {
    /// Decode a response frame for the command that was sent.
    pub fn decode(cmd: SlixCommand, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            SlixCommand::GetNxpSystemInfo => decode_nxp_system_info(data).map(Self::NxpSystemInfo),
            SlixCommand::ReadSignature => parse_read_signature_response(data).map(Self::Signature),
        }
    }
}
