#[path = "../common/mod.rs"]
mod common;

use libslix::store::MemoryStore;
use libslix::tag::{self, SlixData};
use libslix::{PasswordKind, TagVariant};

#[test]
fn load_from_text_document() -> anyhow::Result<()> {
    let store = MemoryStore::from_text(&common::fixtures::slix2_store_text())?;
    let mut data = SlixData::default();
    tag::load(&mut data, &store)?;

    assert_eq!(data.variant(), Some(TagVariant::Slix2));
    assert_eq!(data.uid(), &common::fixtures::slix2_uid());
    assert_eq!(data.base().block(1), Some(&[0x05, 0x06, 0x07, 0x08][..]));
    assert_eq!(data.password(PasswordKind::Read), Some([0x01, 0x02, 0x03, 0x04]));
    assert_eq!(data.password(PasswordKind::Write), None);
    assert_eq!(data.privacy_mode(), Some(true));
    assert_eq!(data.protection().pointer, 0x7F);
    assert_eq!(data.protection().condition, 0x35);
    assert!(!data.lock_bits().is_present);
    Ok(())
}

#[test]
fn saved_document_carries_comments_and_reparses() -> anyhow::Result<()> {
    let mut data = SlixData::default();
    tag::load(&mut data, &MemoryStore::from_text(&common::fixtures::slix2_store_text())?)?;

    let mut store = MemoryStore::new();
    tag::save(&data, &mut store)?;
    let text = store.to_text();
    assert!(text.contains("# SLIX specific data"));
    assert!(text.contains("Password Read: 01 02 03 04"));
    assert!(!text.contains("Password Write"));

    let mut again = SlixData::default();
    tag::load(&mut again, &MemoryStore::from_text(&text)?)?;
    assert_eq!(again, data);
    Ok(())
}

#[test]
fn lone_protection_key_loads_as_absent() -> anyhow::Result<()> {
    let text = common::fixtures::slix2_store_text().replace("Protection Condition: 35", "");
    let mut data = SlixData::default();
    tag::load(&mut data, &MemoryStore::from_text(&text)?)?;
    assert!(!data.protection().is_present);
    Ok(())
}

#[test]
fn non_nxp_uid_is_rejected() -> anyhow::Result<()> {
    let text = common::fixtures::slix2_store_text()
        .replace("UID: E0 04 01", "UID: E0 07 01");
    let mut data = SlixData::default();
    assert!(matches!(
        tag::load(&mut data, &MemoryStore::from_text(&text)?),
        Err(libslix::CodecError::UnknownVariant)
    ));
    Ok(())
}
