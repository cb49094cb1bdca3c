// libslix-rs/libslix/src/types.rs

//! UID newtype, variant classification and the per-variant feature table.

use crate::constants::*;
use crate::SlixError;
use derive_more::Display;
use std::convert::TryFrom;

/// ISO15693 UID - Newtype Pattern (8 バイト, MSB first: E0 04 ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; ISO15693_UID_LEN]);

impl Uid {
    /// Wrap eight raw bytes.
    pub fn from_bytes(bytes: [u8; ISO15693_UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes, MSB first.
    pub fn as_bytes(&self) -> &[u8; ISO15693_UID_LEN] {
        &self.0
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// Manufacturer code (0x04 for NXP).
    pub fn manufacturer_byte(&self) -> u8 {
        self.0[1]
    }

    /// ICODE type byte.
    pub fn icode_type(&self) -> u8 {
        self.0[2]
    }

    /// Two-bit SLIX/SLIX2 type indicator.
    pub fn type_indicator(&self) -> u8 {
        (self.0[TYPE_INDICATOR_BYTE] >> TYPE_INDICATOR_SHIFT) & TYPE_INDICATOR_MASK
    }

    /// Variant this UID classifies as.
    pub fn variant(&self) -> Option<TagVariant> {
        TagVariant::classify(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = SlixError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != ISO15693_UID_LEN {
            return Err(SlixError::Format);
        }
        let mut arr = [0u8; ISO15693_UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Manufacturer code byte of a raw UID, if the UID is long enough.
pub fn manufacturer_byte(uid: &[u8]) -> Option<u8> {
    uid.get(1).copied()
}

/// ICODE type byte of a raw UID.
pub fn icode_type(uid: &[u8]) -> Option<u8> {
    uid.get(2).copied()
}

/// Two-bit SLIX/SLIX2 type indicator (bits 4..3 of UID byte 4).
pub fn type_indicator(uid: &[u8]) -> Option<u8> {
    uid.get(TYPE_INDICATOR_BYTE)
        .map(|b| (b >> TYPE_INDICATOR_SHIFT) & TYPE_INDICATOR_MASK)
}

/// Optional tag capabilities, one bit per feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureSet(u32);

#[allow(missing_docs)]
impl FeatureSet {
    pub const READ: Self = Self(1 << 0);
    pub const WRITE: Self = Self(1 << 1);
    pub const PRIVACY: Self = Self(1 << 2);
    pub const DESTROY: Self = Self(1 << 3);
    pub const EAS: Self = Self(1 << 4);
    pub const SIGNATURE: Self = Self(1 << 5);
    pub const PROTECTION: Self = Self(1 << 6);
    pub const LOCK_BITS: Self = Self(1 << 7);

    /// No features.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit mask.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Features in either set.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every bit of `required` is present.
    pub const fn contains(&self, required: Self) -> bool {
        self.0 & required.0 == required.0
    }

    /// True for [`FeatureSet::empty`].
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

const FEATURES_SLIX: FeatureSet = FeatureSet::EAS.union(FeatureSet::LOCK_BITS);

const FEATURES_SLIX_S: FeatureSet = FeatureSet::READ
    .union(FeatureSet::WRITE)
    .union(FeatureSet::PRIVACY)
    .union(FeatureSet::DESTROY)
    .union(FeatureSet::EAS)
    .union(FeatureSet::LOCK_BITS);

const FEATURES_SLIX_L: FeatureSet = FeatureSet::PRIVACY
    .union(FeatureSet::DESTROY)
    .union(FeatureSet::EAS)
    .union(FeatureSet::LOCK_BITS);

const FEATURES_SLIX2: FeatureSet = FEATURES_SLIX_S
    .union(FeatureSet::SIGNATURE)
    .union(FeatureSet::PROTECTION);

/// ICODE SLIX family member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagVariant {
    /// ICODE SLIX
    #[display(fmt = "SLIX")]
    Slix,
    /// ICODE SLIX-S
    #[display(fmt = "SLIX-S")]
    SlixS,
    /// ICODE SLIX-L
    #[display(fmt = "SLIX-L")]
    SlixL,
    /// ICODE SLIX2
    #[display(fmt = "SLIX2")]
    Slix2,
}

impl TagVariant {
    /// Every variant, in classification order.
    pub const ALL: [TagVariant; 4] = [Self::Slix, Self::SlixS, Self::SlixL, Self::Slix2];

    /// Classify a UID. Returns `None` for non-NXP UIDs and for ICODE
    /// type/indicator combinations outside the SLIX family.
    pub fn classify(uid: &[u8]) -> Option<Self> {
        if uid.len() < ISO15693_UID_LEN {
            return None;
        }
        if manufacturer_byte(uid)? != NXP_MANUFACTURER_CODE {
            return None;
        }

        match icode_type(uid)? {
            ICODE_TYPE_SLIX_SLIX2 => match type_indicator(uid)? {
                TYPE_INDICATOR_SLIX => Some(Self::Slix),
                TYPE_INDICATOR_SLIX2 => Some(Self::Slix2),
                _ => None,
            },
            ICODE_TYPE_SLIX_S => Some(Self::SlixS),
            ICODE_TYPE_SLIX_L => Some(Self::SlixL),
            _ => None,
        }
    }

    /// Optional features this variant carries.
    pub const fn features(self) -> FeatureSet {
        match self {
            Self::Slix => FEATURES_SLIX,
            Self::SlixS => FEATURES_SLIX_S,
            Self::SlixL => FEATURES_SLIX_L,
            Self::Slix2 => FEATURES_SLIX2,
        }
    }

    /// True when all of `required` is supported.
    pub const fn has_features(self, required: FeatureSet) -> bool {
        self.features().contains(required)
    }

    /// Whether the variant has the given password slot.
    pub const fn supports_password(self, kind: PasswordKind) -> bool {
        self.has_features(kind.required_feature())
    }
}

/// Feature set of a variant.
pub fn features_of(variant: TagVariant) -> FeatureSet {
    variant.features()
}

/// Whether the variant carries the given password.
pub fn variant_supports_password(variant: TagVariant, kind: PasswordKind) -> bool {
    variant.supports_password(kind)
}

/// Classify a raw UID; see [`TagVariant::classify`].
pub fn classify(uid: &[u8]) -> Option<TagVariant> {
    TagVariant::classify(uid)
}

/// Password kinds. Discriminants follow the storage order
/// (Read, Write, Privacy, Destroy, EAS).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum PasswordKind {
    #[display(fmt = "Read")]
    Read = 0,
    #[display(fmt = "Write")]
    Write = 1,
    #[display(fmt = "Privacy")]
    Privacy = 2,
    #[display(fmt = "Destroy")]
    Destroy = 3,
    #[display(fmt = "EAS")]
    Eas = 4,
}

impl PasswordKind {
    /// Number of password kinds.
    pub const COUNT: usize = 5;

    /// Every kind, in storage order.
    pub const ALL: [PasswordKind; Self::COUNT] = [
        Self::Read,
        Self::Write,
        Self::Privacy,
        Self::Destroy,
        Self::Eas,
    ];

    /// Position in storage order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Store key holding this password.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Read => KEY_PASSWORD_READ,
            Self::Write => KEY_PASSWORD_WRITE,
            Self::Privacy => KEY_PASSWORD_PRIVACY,
            Self::Destroy => KEY_PASSWORD_DESTROY,
            Self::Eas => KEY_PASSWORD_EAS,
        }
    }

    /// Feature a variant needs to carry this password.
    pub const fn required_feature(self) -> FeatureSet {
        match self {
            Self::Read => FeatureSet::READ,
            Self::Write => FeatureSet::WRITE,
            Self::Privacy => FeatureSet::PRIVACY,
            Self::Destroy => FeatureSet::DESTROY,
            Self::Eas => FeatureSet::EAS,
        }
    }

    /// Factory default password as shipped by NXP.
    pub const fn default_value(self) -> [u8; PASSWORD_LEN] {
        match self {
            Self::Privacy | Self::Destroy => [0x0F, 0x0F, 0x0F, 0x0F],
            Self::Read | Self::Write | Self::Eas => [0x00; PASSWORD_LEN],
        }
    }

    /// Password identifier used on the wire by Set Password (0x01, 0x02, 0x04, 0x08, 0x10).
    pub const fn wire_id(self) -> u8 {
        1 << (self as u8)
    }
}
