// libslix-rs/libslix/src/store/batch.rs

//! Staged writes applied to a store as one unit.

use crate::store::traits::KeyValueStore;
use crate::StoreError;

/// One pending store write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWrite {
    /// Free-form comment line
    Comment(&'static str),
    /// Bytes stored as hex
    Hex {
        /// Store key
        key: &'static str,
        /// Value
        data: Vec<u8>,
    },
    /// Boolean value
    Bool {
        /// Store key
        key: &'static str,
        /// Value
        value: bool,
    },
    /// Unsigned integer value
    U32 {
        /// Store key
        key: &'static str,
        /// Value
        value: u32,
    },
}

impl StoreWrite {
    /// Key written, `None` for comments.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Comment(_) => None,
            Self::Hex { key, .. } | Self::Bool { key, .. } | Self::U32 { key, .. } => Some(*key),
        }
    }

    /// Perform this single write on `store`.
    pub fn apply(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        match self {
            Self::Comment(text) => store.write_comment(text),
            Self::Hex { key, data } => store.write_hex(key, data),
            Self::Bool { key, value } => store.write_bool(key, *value),
            Self::U32 { key, value } => store.write_u32(key, *value),
        }
    }
}

/// Ordered writes committed to a store as one unit through
/// [`KeyValueStore::commit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    writes: Vec<StoreWrite>,
}

impl WriteBatch {
    /// Empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a comment line.
    pub fn push_comment(&mut self, text: &'static str) {
        self.writes.push(StoreWrite::Comment(text));
    }

    /// Queue a hex value.
    pub fn push_hex(&mut self, key: &'static str, data: &[u8]) {
        self.writes.push(StoreWrite::Hex {
            key,
            data: data.to_vec(),
        });
    }

    /// Queue a boolean value.
    pub fn push_bool(&mut self, key: &'static str, value: bool) {
        self.writes.push(StoreWrite::Bool { key, value });
    }

    /// Queue an integer value.
    pub fn push_u32(&mut self, key: &'static str, value: u32) {
        self.writes.push(StoreWrite::U32 { key, value });
    }

    /// Queued writes in order.
    pub fn writes(&self) -> &[StoreWrite] {
        &self.writes
    }

    /// Keys in write order, comments skipped.
    pub fn keys(&self) -> Vec<&'static str> {
        self.writes.iter().filter_map(StoreWrite::key).collect()
    }

    /// Number of queued writes, comments included.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}
