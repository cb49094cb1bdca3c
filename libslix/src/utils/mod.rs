//! Utilities for libslix: small, reusable helpers used across the crate.
//!
//! Hex formatting/parsing is shared by the text form of `MemoryStore` and by
//! debug output; timeout helpers centralize the default frame wait time.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
