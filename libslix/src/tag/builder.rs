// libslix-rs/libslix/src/tag/builder.rs

//! Builder for [`SlixData`](crate::tag::SlixData).

use log::debug;

use crate::constants::{PASSWORD_LEN, SIGNATURE_LEN};
use crate::iso15693::{check_geometry, Iso15693Data};
use crate::tag::SlixData;
use crate::types::{PasswordKind, Uid};
use crate::{Result, SlixError};

/// Fluent construction of [`SlixData`].
#[derive(Debug, Default)]
pub struct SlixDataBuilder {
    uid: Option<Uid>,
    blocks: Option<(u16, u8)>,
    passwords: Vec<(PasswordKind, [u8; PASSWORD_LEN])>,
    signature: Option<[u8; SIGNATURE_LEN]>,
    privacy_mode: Option<bool>,
    protection: Option<(u8, u8)>,
    lock_bits: Option<u8>,
}

impl SlixDataBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag UID; decides the variant.
    pub fn uid(mut self, uid: Uid) -> Self {
        self.uid = Some(uid);
        self
    }

    /// Zeroed memory image of `count` blocks of `size` bytes. Checked by
    /// [`build`](Self::build).
    pub fn blocks(mut self, count: u16, size: u8) -> Self {
        self.blocks = Some((count, size));
        self
    }

    /// Set one password. Ignored by `build` if the variant lacks it.
    pub fn password(mut self, kind: PasswordKind, value: [u8; PASSWORD_LEN]) -> Self {
        self.passwords.push((kind, value));
        self
    }

    /// Set every password the UID's variant supports to its factory default.
    pub fn factory_passwords(mut self) -> Self {
        let variant = self.uid.and_then(|u| u.variant());
        for kind in PasswordKind::ALL {
            if variant.is_some_and(|v| v.supports_password(kind)) {
                self.passwords.push((kind, kind.default_value()));
            }
        }
        self
    }

    /// Originality signature.
    pub fn signature(mut self, data: [u8; SIGNATURE_LEN]) -> Self {
        self.signature = Some(data);
        self
    }

    /// Privacy mode flag.
    pub fn privacy_mode(mut self, mode: bool) -> Self {
        self.privacy_mode = Some(mode);
        self
    }

    /// Protection pointer and condition.
    pub fn protection(mut self, pointer: u8, condition: u8) -> Self {
        self.protection = Some((pointer, condition));
        self
    }

    /// SLIX lock bits byte.
    pub fn lock_bits(mut self, data: u8) -> Self {
        self.lock_bits = Some(data);
        self
    }

    /// A UID is required; everything else defaults to absent. Block
    /// geometry a stored record could not hold is rejected with
    /// [`SlixError::Format`].
    pub fn build(self) -> Result<SlixData> {
        let uid = self.uid.ok_or(SlixError::Format)?;

        let mut base = Iso15693Data::new(uid);
        if let Some((count, size)) = self.blocks {
            check_geometry(count as usize, size).map_err(|err| {
                debug!("rejecting block geometry: {}", err);
                SlixError::Format
            })?;
            base = base.with_blocks(count, size);
        }

        let mut data = SlixData::new(base);
        for (kind, value) in self.passwords {
            data.set_password(kind, value);
        }
        if let Some(sig) = self.signature {
            data.set_signature(sig);
        }
        if let Some(mode) = self.privacy_mode {
            data.set_privacy_mode(mode);
        }
        if let Some((pointer, condition)) = self.protection {
            data.set_protection(pointer, condition);
        }
        if let Some(lb) = self.lock_bits {
            data.set_lock_bits(lb);
        }
        Ok(data)
    }
}
