// libslix-rs/libslix/src/tag/mod.rs

//! SLIX tag data, its builder and its load/save codec.

use crate::constants::{PASSWORD_LEN, SIGNATURE_LEN};
use crate::iso15693::Iso15693Data;
use crate::types::{FeatureSet, PasswordKind, TagVariant, Uid};

pub mod builder;
pub mod codec;
mod password;
mod system_info;

pub use builder::SlixDataBuilder;
pub use codec::{load, save};
pub use password::PasswordSlot;
pub use system_info::{LockBits, Privacy, Protection, Signature, SystemInfo};

/// A SLIX family tag: base ISO15693-3 record plus SLIX specific state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlixData {
    /// Base ISO15693-3 record
    pub iso15693: Iso15693Data,
    /// Password slots in storage order
    pub passwords: [PasswordSlot; PasswordKind::COUNT],
    /// Originality signature
    pub signature: Signature,
    /// Privacy mode
    pub privacy: Privacy,
    /// Protection and lock bits
    pub system_info: SystemInfo,
}

impl SlixData {
    /// Tag with the given base record and no SLIX fields set.
    pub fn new(iso15693: Iso15693Data) -> Self {
        Self {
            iso15693,
            ..Self::default()
        }
    }

    /// See [`SlixDataBuilder`].
    pub fn builder() -> SlixDataBuilder {
        SlixDataBuilder::new()
    }

    /// Tag UID.
    pub fn uid(&self) -> &Uid {
        self.iso15693.uid()
    }

    /// Variant derived from the UID; `None` when the UID is not a SLIX tag.
    pub fn variant(&self) -> Option<TagVariant> {
        self.iso15693.uid().variant()
    }

    /// Features of the tag's variant; empty for unrecognized UIDs.
    pub fn features(&self) -> FeatureSet {
        self.variant()
            .map(TagVariant::features)
            .unwrap_or_else(FeatureSet::empty)
    }

    /// Base ISO15693-3 record.
    pub fn base(&self) -> &Iso15693Data {
        &self.iso15693
    }

    /// Mutable base record.
    pub fn base_mut(&mut self) -> &mut Iso15693Data {
        &mut self.iso15693
    }

    /// Return every field to its power-on default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Deep copy of `other` into `self`.
    pub fn copy_from(&mut self, other: &SlixData) {
        self.clone_from(other);
    }

    /// Field-by-field equality, base record included.
    pub fn is_equal(&self, other: &SlixData) -> bool {
        self == other
    }

    /// Slot for `kind`.
    pub fn password_slot(&self, kind: PasswordKind) -> &PasswordSlot {
        &self.passwords[kind.index()]
    }

    /// Password for `kind`, if set.
    pub fn password(&self, kind: PasswordKind) -> Option<[u8; PASSWORD_LEN]> {
        self.password_slot(kind).get()
    }

    /// Set a password. Variant support is checked on save.
    pub fn set_password(&mut self, kind: PasswordKind, value: [u8; PASSWORD_LEN]) {
        self.passwords[kind.index()] = PasswordSlot::new(value);
    }

    /// Unset a password.
    pub fn clear_password(&mut self, kind: PasswordKind) {
        self.passwords[kind.index()].clear();
    }

    /// Privacy mode, if known.
    pub fn privacy_mode(&self) -> Option<bool> {
        self.privacy.is_present.then_some(self.privacy.mode)
    }

    /// Set the privacy mode.
    pub fn set_privacy_mode(&mut self, mode: bool) {
        self.privacy = Privacy {
            is_present: true,
            mode,
        };
    }

    /// Originality signature, if known.
    pub fn signature(&self) -> Option<&[u8; SIGNATURE_LEN]> {
        self.signature.is_present.then_some(&self.signature.data)
    }

    /// Set the originality signature.
    pub fn set_signature(&mut self, data: [u8; SIGNATURE_LEN]) {
        self.signature = Signature::new(data);
    }

    /// Protection pointer configuration.
    pub fn protection(&self) -> &Protection {
        &self.system_info.protection
    }

    /// Set protection pointer and condition.
    pub fn set_protection(&mut self, pointer: u8, condition: u8) {
        self.system_info.protection = Protection::new(pointer, condition);
    }

    /// SLIX lock bits.
    pub fn lock_bits(&self) -> &LockBits {
        &self.system_info.lock_bits
    }

    /// Set the lock bits byte.
    pub fn set_lock_bits(&mut self, data: u8) {
        self.system_info.lock_bits = LockBits::new(data);
    }

    /// Protection and lock bits together.
    pub fn system_info(&self) -> &SystemInfo {
        &self.system_info
    }

    /// Replace protection and lock bits, e.g. with values read by a poller.
    pub fn set_system_info(&mut self, info: SystemInfo) {
        self.system_info = info;
    }
}
