// libslix-rs/libslix/src/tag/system_info.rs

//! Protection, lock bits, signature and privacy state of a tag.

use crate::constants::*;

/// Protection pointer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protection {
    /// Whether the tag reported or stored a configuration
    pub is_present: bool,
    /// First block of the high memory area
    pub pointer: u8,
    /// Access conditions for the low and high areas
    pub condition: u8,
}

impl Protection {
    /// Present configuration.
    pub fn new(pointer: u8, condition: u8) -> Self {
        Self {
            is_present: true,
            pointer,
            condition,
        }
    }
}

/// SLIX lock bits (AFI, EAS, DSFID, PPL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockBits {
    /// Whether the lock bits are known
    pub is_present: bool,
    /// Raw lock bits byte
    pub data: u8,
}

impl LockBits {
    /// Present lock bits.
    pub fn new(data: u8) -> Self {
        Self {
            is_present: true,
            data,
        }
    }

    /// AFI is locked.
    pub fn afi_locked(&self) -> bool {
        self.data & LOCK_BITS_AFI != 0
    }

    /// EAS is locked.
    pub fn eas_locked(&self) -> bool {
        self.data & LOCK_BITS_EAS != 0
    }

    /// DSFID is locked.
    pub fn dsfid_locked(&self) -> bool {
        self.data & LOCK_BITS_DSFID != 0
    }

    /// Protection pointer is locked.
    pub fn ppl_locked(&self) -> bool {
        self.data & LOCK_BITS_PPL != 0
    }
}

/// Data reported by Get NXP System Info
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemInfo {
    /// Protection pointer configuration
    pub protection: Protection,
    /// SLIX lock bits
    pub lock_bits: LockBits,
}

/// ECC originality signature, opaque to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    /// Whether a signature is known
    pub is_present: bool,
    /// Signature bytes
    pub data: [u8; SIGNATURE_LEN],
}

impl Signature {
    /// Present signature.
    pub fn new(data: [u8; SIGNATURE_LEN]) -> Self {
        Self {
            is_present: true,
            data,
        }
    }
}

/// Privacy mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Privacy {
    /// Whether the mode is known
    pub is_present: bool,
    /// Tag is in privacy mode
    pub mode: bool,
}
