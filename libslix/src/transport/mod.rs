// libslix-rs/libslix/src/transport/mod.rs

//! Frame transport between reader and tag.

pub mod mock;
pub mod traits;

pub use mock::MockTransport;
pub use traits::Transport;
