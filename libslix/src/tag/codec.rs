// libslix-rs/libslix/src/tag/codec.rs

//! Load and save [`SlixData`] through a [`KeyValueStore`].
//!
//! Only fields the tag's variant supports are ever read or written. Field
//! order on save is part of the stored format: base record, passwords
//! (Read, Write, Privacy, Destroy, EAS), signature, privacy mode,
//! protection, lock bits.

use log::debug;

use crate::constants::*;
use crate::store::{KeyValueStore, StoreWrite, WriteBatch};
use crate::tag::{LockBits, Privacy, Protection, Signature, SlixData};
use crate::types::{FeatureSet, PasswordKind, TagVariant};
use crate::{CodecError, StoreError};

const COMMENT_SECTION: &str = "SLIX specific data";
const COMMENT_PASSWORDS: &str = "Passwords are optional. If a password is omitted, any password is accepted";
const COMMENT_SIGNATURE: &str = "This is the card's secp128r1 elliptic curve signature. It can not be calculated without knowing NXP's private key.";
const COMMENT_PROTECTION: &str = "Protection pointer configuration";
const COMMENT_LOCK_BITS: &str = "SLIX Lock Bits";

fn malformed(key: &'static str) -> impl FnOnce(StoreError) -> CodecError {
    move |source| CodecError::Malformed { key, source }
}

/// Load `data` from `store`.
///
/// On error `data` is left as it was; nothing partially loaded is kept.
pub fn load(data: &mut SlixData, store: &dyn KeyValueStore) -> Result<(), CodecError> {
    let mut loaded = SlixData::default();

    loaded.iso15693.load(store).map_err(|e| {
        debug!("base record load failed: {}", e);
        CodecError::BaseFormat(e)
    })?;

    let variant = loaded.variant().ok_or_else(|| {
        debug!("uid {} is not a SLIX variant", loaded.uid().to_hex());
        CodecError::UnknownVariant
    })?;

    for kind in PasswordKind::ALL {
        if !variant.supports_password(kind) || !store.key_exists(kind.key()) {
            continue;
        }
        let mut value = [0u8; PASSWORD_LEN];
        store
            .read_hex(kind.key(), &mut value)
            .map_err(malformed(kind.key()))?;
        loaded.set_password(kind, value);
    }

    if variant.has_features(FeatureSet::SIGNATURE) && store.key_exists(KEY_SIGNATURE) {
        let mut sig = [0u8; SIGNATURE_LEN];
        store
            .read_hex(KEY_SIGNATURE, &mut sig)
            .map_err(malformed(KEY_SIGNATURE))?;
        loaded.signature = Signature::new(sig);
    }

    if variant.has_features(FeatureSet::PRIVACY) && store.key_exists(KEY_PRIVACY_MODE) {
        let mode = store
            .read_bool(KEY_PRIVACY_MODE)
            .map_err(malformed(KEY_PRIVACY_MODE))?;
        loaded.privacy = Privacy {
            is_present: true,
            mode,
        };
    }

    // Both keys or neither: a lone pointer or condition loads as absent.
    if variant.has_features(FeatureSet::PROTECTION)
        && store.key_exists(KEY_PROTECTION_POINTER)
        && store.key_exists(KEY_PROTECTION_CONDITION)
    {
        let pointer = store
            .read_hex_u8(KEY_PROTECTION_POINTER)
            .map_err(malformed(KEY_PROTECTION_POINTER))?;
        let condition = store
            .read_hex_u8(KEY_PROTECTION_CONDITION)
            .map_err(malformed(KEY_PROTECTION_CONDITION))?;
        loaded.system_info.protection = Protection::new(pointer, condition);
    }

    if variant.has_features(FeatureSet::LOCK_BITS) && store.key_exists(KEY_LOCK_BITS) {
        let lock_bits = store
            .read_hex_u8(KEY_LOCK_BITS)
            .map_err(malformed(KEY_LOCK_BITS))?;
        loaded.system_info.lock_bits = LockBits::new(lock_bits);
    }

    debug!("loaded {} tag {}", variant, loaded.uid().to_hex());
    *data = loaded;
    Ok(())
}

/// Save `data` to `store`, writing only fields that are supported by the
/// variant and set.
///
/// The whole document is staged first and committed as one batch, so on
/// error the store is left as it was.
pub fn save(data: &SlixData, store: &mut dyn KeyValueStore) -> Result<(), CodecError> {
    let variant = data.variant().ok_or(CodecError::UnknownVariant)?;
    let (batch, base_len) = stage(data, variant)?;

    store.commit(&batch).map_err(|err| {
        debug!("save failed: {}", err);
        if err.index < base_len {
            return CodecError::BaseFormat(err.source);
        }
        match batch.writes().get(err.index).and_then(StoreWrite::key) {
            Some(key) => CodecError::Store {
                key,
                source: err.source,
            },
            None => CodecError::Comment(err.source),
        }
    })?;

    debug!("saved {} tag {}", variant, data.uid().to_hex());
    Ok(())
}

/// Build the full document for `data`. Also returns how many leading
/// writes belong to the base record.
fn stage(data: &SlixData, variant: TagVariant) -> Result<(WriteBatch, usize), CodecError> {
    let mut batch = WriteBatch::new();
    data.iso15693
        .stage(&mut batch)
        .map_err(CodecError::BaseFormat)?;
    let base_len = batch.len();

    batch.push_comment(COMMENT_SECTION);
    stage_passwords(data, variant, &mut batch);

    if variant.has_features(FeatureSet::SIGNATURE) && data.signature.is_present {
        batch.push_comment(COMMENT_SIGNATURE);
        batch.push_hex(KEY_SIGNATURE, &data.signature.data);
    }

    if variant.has_features(FeatureSet::PRIVACY) && data.privacy.is_present {
        batch.push_bool(KEY_PRIVACY_MODE, data.privacy.mode);
    }

    let protection = &data.system_info.protection;
    if variant.has_features(FeatureSet::PROTECTION) && protection.is_present {
        batch.push_comment(COMMENT_PROTECTION);
        batch.push_hex(KEY_PROTECTION_POINTER, &[protection.pointer]);
        batch.push_hex(KEY_PROTECTION_CONDITION, &[protection.condition]);
    }

    let lock_bits = &data.system_info.lock_bits;
    if variant.has_features(FeatureSet::LOCK_BITS) && lock_bits.is_present {
        batch.push_comment(COMMENT_LOCK_BITS);
        batch.push_hex(KEY_LOCK_BITS, &[lock_bits.data]);
    }

    Ok((batch, base_len))
}

fn stage_passwords(data: &SlixData, variant: TagVariant, batch: &mut WriteBatch) {
    let mut commented = false;
    for kind in PasswordKind::ALL {
        let Some(value) = data.password(kind) else {
            continue;
        };
        if !variant.supports_password(kind) {
            debug!("{} password set but not supported by {}; skipped", kind, variant);
            continue;
        }
        if !commented {
            batch.push_comment(COMMENT_PASSWORDS);
            commented = true;
        }
        batch.push_hex(kind.key(), &value);
    }
}
