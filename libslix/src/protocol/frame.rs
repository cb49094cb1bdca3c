// libslix-rs/libslix/src/protocol/frame.rs

//! Request header parsing and response framing.

use crate::constants::*;
use crate::protocol::parser;
use crate::types::Uid;
use crate::Result;

/// Whether request `flags` select addressed mode (UID follows the header).
pub fn is_addressed(flags: u8) -> bool {
    flags & REQ_FLAG_INVENTORY == 0 && flags & REQ_FLAG_ADDRESSED != 0
}

/// ISO15693 sends the UID least significant byte first.
pub fn uid_to_wire(uid: &Uid) -> [u8; ISO15693_UID_LEN] {
    let mut out = *uid.as_bytes();
    out.reverse();
    out
}

/// Inverse of [`uid_to_wire`].
pub fn uid_from_wire(bytes: &[u8]) -> Result<Uid> {
    let mut arr = parser::array_at::<ISO15693_UID_LEN>(bytes, 0)?;
    arr.reverse();
    Ok(Uid::from_bytes(arr))
}

/// Custom command request.
/// Layout: flags(1) + command(1) + manufacturer(1) + [uid(8) if addressed] + data(n)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    /// ISO15693 request flags
    pub flags: u8,
    /// Command code
    pub command: u8,
    /// IC manufacturer code
    pub manufacturer: u8,
    /// Target UID in addressed mode
    pub uid: Option<Uid>,
    /// Command parameters
    pub data: &'a [u8],
}

impl<'a> Request<'a> {
    /// Split a request into header, optional UID and parameters.
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        parser::ensure_len(buf, REQUEST_HEADER_LEN)?;

        let flags = parser::byte_at(buf, 0)?;
        let command = parser::byte_at(buf, 1)?;
        let manufacturer = parser::byte_at(buf, 2)?;

        let (uid, data_start) = if is_addressed(flags) {
            let uid = uid_from_wire(parser::slice_at(buf, REQUEST_HEADER_LEN, ISO15693_UID_LEN)?)?;
            (Some(uid), REQUEST_HEADER_LEN + ISO15693_UID_LEN)
        } else {
            (None, REQUEST_HEADER_LEN)
        };

        Ok(Self {
            flags,
            command,
            manufacturer,
            uid,
            data: &buf[data_start..],
        })
    }

    /// Encode a request. The UID is included when given; the caller is
    /// responsible for setting the addressed flag to match.
    pub fn encode(flags: u8, command: u8, uid: Option<&Uid>, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(REQUEST_HEADER_LEN + ISO15693_UID_LEN + data.len());
        buf.push(flags);
        buf.push(command);
        buf.push(NXP_MANUFACTURER_CODE);
        if let Some(uid) = uid {
            buf.extend_from_slice(&uid_to_wire(uid));
        }
        buf.extend_from_slice(data);
        buf
    }
}

/// Response with the "no error" flag followed by `payload`.
pub fn ok_response(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + payload.len());
    buf.push(RESP_FLAG_NONE);
    buf.extend_from_slice(payload);
    buf
}

/// Two-byte error response.
pub fn error_response(code: u8) -> Vec<u8> {
    vec![RESP_FLAG_ERROR, code]
}
