// libslix-rs/libslix/src/tag/password.rs

//! Password slots.

use crate::constants::PASSWORD_LEN;
use crate::types::PasswordKind;

/// One password slot. An unset slot accepts any password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasswordSlot {
    /// Whether a password is configured
    pub is_set: bool,
    /// Password bytes, meaningful only when set
    pub value: [u8; PASSWORD_LEN],
}

impl PasswordSlot {
    /// Slot holding `value`.
    pub fn new(value: [u8; PASSWORD_LEN]) -> Self {
        Self {
            is_set: true,
            value,
        }
    }

    /// Slot holding the factory default for `kind`.
    pub fn factory_default(kind: PasswordKind) -> Self {
        Self::new(kind.default_value())
    }

    /// The password, if set.
    pub fn get(&self) -> Option<[u8; PASSWORD_LEN]> {
        self.is_set.then_some(self.value)
    }

    /// Whether `candidate` unlocks this slot.
    pub fn accepts(&self, candidate: &[u8; PASSWORD_LEN]) -> bool {
        !self.is_set || self.value == *candidate
    }

    /// Unset the slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
