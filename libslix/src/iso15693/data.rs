// libslix-rs/libslix/src/iso15693/data.rs

//! Persisted ISO15693-3 tag record.

use crate::constants::*;
use crate::store::{KeyValueStore, WriteBatch};
use crate::types::Uid;
use crate::StoreError;

/// Largest block count an ISO15693 tag can address with 8-bit block numbers.
pub const MAX_BLOCK_COUNT: u32 = 256;
/// Largest block size (bytes) expressible in the system info block size field.
pub const MAX_BLOCK_SIZE: u8 = 32;

/// Reject block geometry a stored record cannot describe.
pub fn check_geometry(block_count: usize, block_size: u8) -> Result<(), StoreError> {
    if block_count > MAX_BLOCK_COUNT as usize {
        return Err(StoreError::Parse(format!(
            "block count {} exceeds {}",
            block_count, MAX_BLOCK_COUNT
        )));
    }
    if block_size == 0 || block_size > MAX_BLOCK_SIZE {
        return Err(StoreError::Parse(format!("block size {} out of range", block_size)));
    }
    Ok(())
}

/// ISO15693-3 tag record: UID, system information and memory image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iso15693Data {
    /// Tag UID
    pub uid: Uid,
    /// Data storage format identifier
    pub dsfid: u8,
    /// Application family identifier
    pub afi: u8,
    /// IC reference byte
    pub ic_ref: u8,
    /// DSFID is write protected
    pub lock_dsfid: bool,
    /// AFI is write protected
    pub lock_afi: bool,
    /// Bytes per block
    pub block_size: u8,
    /// Memory image, `block_count * block_size` bytes
    pub block_data: Vec<u8>,
    /// One security status byte per block
    pub block_security: Vec<u8>,
}

impl Default for Iso15693Data {
    fn default() -> Self {
        Self {
            uid: Uid::default(),
            dsfid: 0,
            afi: 0,
            ic_ref: 0,
            lock_dsfid: false,
            lock_afi: false,
            block_size: 4,
            block_data: Vec::new(),
            block_security: Vec::new(),
        }
    }
}

impl Iso15693Data {
    /// Record for `uid` with no memory blocks.
    pub fn new(uid: Uid) -> Self {
        Self {
            uid,
            ..Self::default()
        }
    }

    /// Allocate a zeroed memory image of `block_count` blocks. Geometry is
    /// checked when the record is saved; see [`check_geometry`].
    pub fn with_blocks(mut self, block_count: u16, block_size: u8) -> Self {
        self.block_size = block_size;
        self.block_data = vec![0u8; block_count as usize * block_size as usize];
        self.block_security = vec![0u8; block_count as usize];
        self
    }

    /// Tag UID.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Number of blocks, one security status byte each.
    pub fn block_count(&self) -> usize {
        self.block_security.len()
    }

    /// Return block `index`, if it exists.
    pub fn block(&self, index: usize) -> Option<&[u8]> {
        let size = self.block_size as usize;
        let start = index.checked_mul(size)?;
        self.block_data.get(start..start.checked_add(size)?)
    }

    /// Load the record. UID, block count and block size are required; the
    /// remaining fields default when absent.
    pub fn load(&mut self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        let mut loaded = Self::default();

        let mut uid = [0u8; ISO15693_UID_LEN];
        store.read_hex(KEY_UID, &mut uid)?;
        loaded.uid = Uid::from_bytes(uid);

        if store.key_exists(KEY_DSFID) {
            loaded.dsfid = store.read_hex_u8(KEY_DSFID)?;
        }
        if store.key_exists(KEY_AFI) {
            loaded.afi = store.read_hex_u8(KEY_AFI)?;
        }
        if store.key_exists(KEY_IC_REFERENCE) {
            loaded.ic_ref = store.read_hex_u8(KEY_IC_REFERENCE)?;
        }
        if store.key_exists(KEY_LOCK_DSFID) {
            loaded.lock_dsfid = store.read_bool(KEY_LOCK_DSFID)?;
        }
        if store.key_exists(KEY_LOCK_AFI) {
            loaded.lock_afi = store.read_bool(KEY_LOCK_AFI)?;
        }

        let count = usize::try_from(store.read_u32(KEY_BLOCK_COUNT)?)
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        let block_size = store.read_hex_u8(KEY_BLOCK_SIZE)?;
        check_geometry(count, block_size)?;
        loaded.block_size = block_size;

        loaded.block_data = vec![0u8; count * block_size as usize];
        if count > 0 {
            store.read_hex(KEY_DATA_CONTENT, &mut loaded.block_data)?;
        }

        loaded.block_security = vec![0u8; count];
        if count > 0 && store.key_exists(KEY_SECURITY_STATUS) {
            store.read_hex(KEY_SECURITY_STATUS, &mut loaded.block_security)?;
        }

        *self = loaded;
        Ok(())
    }

    /// Save the record as one committed batch.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let mut batch = WriteBatch::new();
        self.stage(&mut batch)?;
        store.commit(&batch).map_err(|err| err.source)
    }

    /// Queue the record's writes on `batch`, after checking it is one
    /// [`load`](Self::load) accepts. Nothing is queued on error.
    pub fn stage(&self, batch: &mut WriteBatch) -> Result<(), StoreError> {
        let count = self.block_count();
        check_geometry(count, self.block_size)?;
        let expected = count * self.block_size as usize;
        if self.block_data.len() != expected {
            return Err(StoreError::Length {
                expected,
                actual: self.block_data.len(),
            });
        }

        batch.push_hex(KEY_UID, self.uid.as_bytes());
        batch.push_hex(KEY_DSFID, &[self.dsfid]);
        batch.push_hex(KEY_AFI, &[self.afi]);
        batch.push_hex(KEY_IC_REFERENCE, &[self.ic_ref]);
        batch.push_bool(KEY_LOCK_DSFID, self.lock_dsfid);
        batch.push_bool(KEY_LOCK_AFI, self.lock_afi);
        // check_geometry bounds the count well below u32::MAX
        batch.push_u32(KEY_BLOCK_COUNT, count as u32);
        batch.push_hex(KEY_BLOCK_SIZE, &[self.block_size]);
        batch.push_hex(KEY_DATA_CONTENT, &self.block_data);
        batch.push_hex(KEY_SECURITY_STATUS, &self.block_security);
        Ok(())
    }
}
