#[path = "../common/mod.rs"]
mod common;

use libslix::constants::*;
use libslix::store::{KeyValueStore, MemoryStore};
use libslix::tag::{self, SlixData};
use libslix::test_support::{populated_tag, uid_for};
use libslix::{CodecError, PasswordKind, TagVariant};

#[test]
fn every_variant_survives_save_and_load() -> anyhow::Result<()> {
    common::init_logging();
    for variant in TagVariant::ALL {
        let original = populated_tag(variant);
        let mut store = MemoryStore::new();
        tag::save(&original, &mut store)?;

        let mut loaded = SlixData::default();
        tag::load(&mut loaded, &store)?;
        assert_eq!(loaded, original, "{} did not round trip", variant);
    }
    Ok(())
}

#[test]
fn plain_slix_never_writes_destroy_password() -> anyhow::Result<()> {
    let mut data = populated_tag(TagVariant::Slix);
    data.set_password(PasswordKind::Destroy, [1, 2, 3, 4]);
    data.set_signature([0xEE; 32]);

    let mut store = MemoryStore::new();
    tag::save(&data, &mut store)?;
    assert!(!store.key_exists(KEY_PASSWORD_DESTROY));
    assert!(!store.key_exists(KEY_SIGNATURE));
    assert!(store.key_exists(KEY_PASSWORD_EAS));
    Ok(())
}

#[test]
fn slix2_keys_are_written_in_order() -> anyhow::Result<()> {
    let data = populated_tag(TagVariant::Slix2);
    let mut store = MemoryStore::new();
    tag::save(&data, &mut store)?;

    let keys = store.keys();
    let slix_keys: Vec<&str> = keys[10..].to_vec();
    assert_eq!(
        slix_keys,
        vec![
            KEY_PASSWORD_READ,
            KEY_PASSWORD_WRITE,
            KEY_PASSWORD_PRIVACY,
            KEY_PASSWORD_DESTROY,
            KEY_PASSWORD_EAS,
            KEY_SIGNATURE,
            KEY_PRIVACY_MODE,
            KEY_PROTECTION_POINTER,
            KEY_PROTECTION_CONDITION,
            KEY_LOCK_BITS,
        ]
    );
    Ok(())
}

#[test]
fn keys_of_other_variants_are_ignored_on_load() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    tag::save(&populated_tag(TagVariant::Slix2), &mut store)?;
    // Rewrite the UID so the same document now describes a SLIX-L tag
    store.write_hex(KEY_UID, uid_for(TagVariant::SlixL, 0x01).as_bytes())?;

    let mut loaded = SlixData::default();
    tag::load(&mut loaded, &store)?;
    assert_eq!(loaded.variant(), Some(TagVariant::SlixL));
    assert_eq!(loaded.password(PasswordKind::Read), None);
    assert!(loaded.signature().is_none());
    assert!(!loaded.protection().is_present);
    assert!(loaded.password(PasswordKind::Privacy).is_some());
    Ok(())
}

#[test]
fn failed_load_leaves_data_untouched() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    tag::save(&populated_tag(TagVariant::Slix2), &mut store)?;
    store.write_hex(KEY_SIGNATURE, &[0x00; 31])?;

    let before = populated_tag(TagVariant::SlixS);
    let mut data = before.clone();
    let err = tag::load(&mut data, &store).unwrap_err();
    assert!(matches!(err, CodecError::Malformed { key: KEY_SIGNATURE, .. }));
    assert_eq!(data, before);
    Ok(())
}

#[test]
fn read_only_store_reports_first_failing_key() {
    let mut store = MemoryStore::read_only();
    let err = tag::save(&populated_tag(TagVariant::Slix2), &mut store).unwrap_err();
    assert!(matches!(err, CodecError::BaseFormat(_)));
    assert!(store.is_empty());
}

#[test]
fn failed_save_keeps_existing_document() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    tag::save(&populated_tag(TagVariant::SlixL), &mut store)?;
    let before = store.to_text();

    store.set_write_budget(15);
    let err = tag::save(&populated_tag(TagVariant::Slix2), &mut store).unwrap_err();
    assert!(matches!(err, CodecError::Store { .. }));
    assert_eq!(store.to_text(), before);

    let mut loaded = SlixData::default();
    tag::load(&mut loaded, &store)?;
    assert_eq!(loaded, populated_tag(TagVariant::SlixL));
    Ok(())
}
