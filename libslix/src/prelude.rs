// libslix-rs/libslix/src/prelude.rs

//! Commonly used types, re-exported for `use libslix::prelude::*`.

pub use crate::iso15693::Iso15693Data;
pub use crate::listener::{Dispatch, ListenerState, SlixListener};
pub use crate::poller::{PollerConfig, SlixPoller};
pub use crate::protocol::{Response, SlixCommand};
pub use crate::store::{KeyValueStore, MemoryStore};
pub use crate::tag::{SlixData, SlixDataBuilder, SystemInfo};
pub use crate::transport::Transport;
pub use crate::{
    CodecError, FeatureSet, Iso15693Error, PasswordKind, Result, SlixError, StoreError, TagVariant,
    Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
