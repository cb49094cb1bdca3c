// libslix-rs/libslix/src/protocol/mod.rs

//! Wire format of the NXP custom commands: request framing, encoders and
//! response decoders.

pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::{SlixCommand, encode_get_nxp_system_info, encode_read_signature};
pub use frame::{Request, error_response, ok_response};
pub use responses::{
    NxpSystemInfo, Response, decode_nxp_system_info, error_response_parse,
    parse_nxp_system_info_response, parse_read_signature_response,
};
