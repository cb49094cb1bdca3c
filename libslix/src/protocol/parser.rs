// libslix-rs/libslix/src/protocol/parser.rs

//! Bounds-checked byte readers shared by the frame decoders.

use crate::{Result, SlixError};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(SlixError::Format);
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes. Fixed-layout frames that are
/// padded or truncated are rejected.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(SlixError::Format);
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    data.get(idx).copied().ok_or(SlixError::Format)
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    let end = idx.checked_add(len).ok_or(SlixError::Format)?;
    data.get(idx..end).ok_or(SlixError::Format)
}

/// Copy `N` bytes starting at `idx` into an array.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(slice_at(data, idx, N)?);
    Ok(out)
}

/// Read a little-endian u32 at given index.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    array_at::<4>(data, idx).map(u32::from_le_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_len() {
        assert!(ensure_exact_len(&[0; 8], 8).is_ok());
        assert_eq!(ensure_exact_len(&[0; 7], 8), Err(SlixError::Format));
        assert_eq!(ensure_exact_len(&[0; 9], 8), Err(SlixError::Format));
    }

    #[test]
    fn bounds_checked_reads() {
        let v = [0x01u8, 0x02, 0x03, 0x04, 0x05];
        assert_eq!(byte_at(&v, 4), Ok(0x05));
        assert_eq!(byte_at(&v, 5), Err(SlixError::Format));
        assert_eq!(slice_at(&v, 1, 2), Ok(&v[1..3]));
        assert_eq!(slice_at(&v, usize::MAX, 2), Err(SlixError::Format));
        assert_eq!(le_u32_at(&v, 1), Ok(0x0504_0302));
        assert_eq!(le_u32_at(&v, 2), Err(SlixError::Format));
    }

    #[test]
    fn ensure_len_empty() {
        assert_eq!(ensure_len(&[], 1), Err(SlixError::Format));
        assert!(ensure_len(&[], 0).is_ok());
    }
}
