//! Hexadecimal helpers used by the text store format and for display.
//!
//! Stored values use uppercase bytes separated by single spaces
//! (`E0 04 01 08`); the parser accepts any ASCII whitespace and either case.

use crate::StoreError;
use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to uppercase hex with a single space between bytes.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes, ignoring whitespace. Anything else that
/// is not a hex digit is an error, signs included.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, StoreError> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();

    if let Some(bad) = digits.iter().find(|c| !c.is_ascii_hexdigit()) {
        return Err(StoreError::Parse(format!(
            "invalid hex digit {:#04x}",
            bad
        )));
    }
    if digits.len() % 2 != 0 {
        return Err(StoreError::Parse("hex string has odd length".to_string()));
    }

    Ok(digits
        .chunks(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect())
}

// Caller guarantees an ASCII hex digit
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}
