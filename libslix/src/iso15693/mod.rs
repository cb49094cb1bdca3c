// libslix-rs/libslix/src/iso15693/mod.rs

//! The slice of the ISO15693-3 base layer the SLIX layer builds on: the
//! persisted tag record and the error-frame recognizer.

pub mod data;
pub mod error_frame;

pub use data::{Iso15693Data, check_geometry};
pub use error_frame::error_response_parse;
