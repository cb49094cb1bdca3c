// libslix-rs/libslix/src/lib.rs

//! libslix
//!
//! Pure Rust model of the NXP ICODE SLIX tag family (SLIX, SLIX-S, SLIX-L,
//! SLIX2) layered on ISO15693-3: tag data and its persistence, the two
//! vendor commands on the wire, a tag emulator and a reader client.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod iso15693;
pub mod listener;
pub mod poller;
pub mod prelude;
pub mod protocol;
pub mod store;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::SlixError`,
// `crate::Result` and the newtypes in `types` are available directly.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
