// libslix-rs/libslix/src/protocol/commands/mod.rs

//! Request encoders for the supported custom commands.

pub mod signature;
pub mod system_info;

pub use signature::encode_read_signature;
pub use system_info::encode_get_nxp_system_info;

use crate::constants::*;
use crate::types::Uid;
use crate::SlixError;

/// NXP custom commands understood by this crate. New commands should be
/// added here and their encoder placed in `protocol::commands::<name>.rs`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlixCommand {
    /// Get NXP System Information (0xAB)
    GetNxpSystemInfo = CMD_GET_NXP_SYSTEM_INFO,
    /// Read Signature (0xBD)
    ReadSignature = CMD_READ_SIGNATURE,
}

impl SlixCommand {
    /// Command byte on the wire.
    pub fn command_code(self) -> u8 {
        self as u8
    }

    /// Encode the command into a request frame.
    pub fn encode(self, flags: u8, uid: Option<&Uid>) -> Vec<u8> {
        match self {
            Self::GetNxpSystemInfo => encode_get_nxp_system_info(flags, uid),
            Self::ReadSignature => encode_read_signature(flags, uid),
        }
    }
}

impl TryFrom<u8> for SlixCommand {
    type Error = SlixError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            CMD_GET_NXP_SYSTEM_INFO => Ok(Self::GetNxpSystemInfo),
            CMD_READ_SIGNATURE => Ok(Self::ReadSignature),
            _ => Err(SlixError::NotSupported),
        }
    }
}
