// libslix-rs/libslix/src/store/mod.rs

//! Key/value persistence used by the tag codec.

pub mod batch;
pub mod memory;
pub mod traits;

pub use batch::{StoreWrite, WriteBatch};
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
