// libslix-rs/libslix/src/protocol/commands/system_info.rs

//! Get NXP System Info (0xAB) request.

use crate::constants::CMD_GET_NXP_SYSTEM_INFO;
use crate::protocol::frame::Request;
use crate::types::Uid;

/// Encode Get NXP System Info (0xAB): flags + command + manufacturer [+ uid]
pub fn encode_get_nxp_system_info(flags: u8, uid: Option<&Uid>) -> Vec<u8> {
    Request::encode(flags, CMD_GET_NXP_SYSTEM_INFO, uid, &[])
}
