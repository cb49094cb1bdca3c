// libslix-rs/libslix/src/protocol/responses/system_info.rs

//! Get NXP System Info response.

use crate::constants::NXP_SYSTEM_INFO_RESPONSE_LEN;
use crate::protocol::parser;
use crate::protocol::responses::error::error_response_parse;
use crate::tag::{LockBits, Protection, SystemInfo};
use crate::Result;

/// Decoded Get NXP System Info response, feature flags kept as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NxpSystemInfo {
    /// Protection and lock bits
    pub system_info: SystemInfo,
    /// Feature word, see `FEATURE_FLAG_*`
    pub feature_flags: u32,
}

/// Decode Get NXP System Info response
/// Layout: flags(1) + pp_pointer(1) + pp_condition(1) + lock_bits(1) + feature_flags(4, LE)
pub fn decode_nxp_system_info(data: &[u8]) -> Result<NxpSystemInfo> {
    if let Some(err) = error_response_parse(data) {
        return Err(err);
    }
    parser::ensure_exact_len(data, NXP_SYSTEM_INFO_RESPONSE_LEN)?;

    let pointer = parser::byte_at(data, 1)?;
    let condition = parser::byte_at(data, 2)?;
    let lock_bits = parser::byte_at(data, 3)?;
    let feature_flags = parser::le_u32_at(data, 4)?;

    Ok(NxpSystemInfo {
        system_info: SystemInfo {
            protection: Protection::new(pointer, condition),
            lock_bits: LockBits::new(lock_bits),
        },
        feature_flags,
    })
}

/// Parse a Get NXP System Info response into [`SystemInfo`].
pub fn parse_nxp_system_info_response(data: &[u8]) -> Result<SystemInfo> {
    decode_nxp_system_info(data).map(|info| info.system_info)
}
