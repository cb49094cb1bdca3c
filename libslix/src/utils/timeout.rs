//! Timeout helpers used across the crate.
//!
//! The SLIX layer never runs its own timers: these values are only passed
//! through to the transport, which enforces them.

use std::time::Duration;

/// Default frame wait time in milliseconds for poller requests when the
/// caller doesn't provide an explicit timeout.
pub const DEFAULT_FWT_MS: u64 = 40;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default frame wait time as Duration.
pub fn default_fwt() -> Duration {
    ms(DEFAULT_FWT_MS)
}
