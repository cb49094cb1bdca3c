// libslix-rs/libslix/src/store/traits.rs

//! The key/value store abstraction.

use crate::store::batch::WriteBatch;
use crate::{BatchError, StoreError};

/// Key/value persistence abstraction used to load and save tag dumps.
///
/// Keys are plain strings; values are typed on access. Implementations keep
/// the order in which keys were written, since stored dumps are meant to be
/// read by humans.
pub trait KeyValueStore {
    /// Whether `key` holds a value
    fn key_exists(&self, key: &str) -> bool;

    /// Read exactly `out.len()` bytes stored as hex under `key`.
    fn read_hex(&self, key: &str, out: &mut [u8]) -> Result<(), StoreError>;

    /// Store `data` as hex under `key`.
    fn write_hex(&mut self, key: &str, data: &[u8]) -> Result<(), StoreError>;

    fn read_bool(&self, key: &str) -> Result<bool, StoreError>;

    fn write_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError>;

    fn read_u32(&self, key: &str) -> Result<u32, StoreError>;

    fn write_u32(&mut self, key: &str, value: u32) -> Result<(), StoreError>;

    /// Append a free-form comment line. Stores without comment support may
    /// ignore it; the default implementation does.
    fn write_comment(&mut self, _text: &str) -> Result<(), StoreError> {
        Ok(())
    }

    /// Apply every write of `batch` in order, or none of them. On error the
    /// store holds exactly what it held before the call.
    fn commit(&mut self, batch: &WriteBatch) -> Result<(), BatchError>;

    /// Read a single hex byte. Default implementation uses `read_hex`.
    fn read_hex_u8(&self, key: &str) -> Result<u8, StoreError> {
        let mut b = [0u8; 1];
        self.read_hex(key, &mut b)?;
        Ok(b[0])
    }
}
