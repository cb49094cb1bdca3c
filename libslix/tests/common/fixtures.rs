// fixtures.rs: provides commonly used test UIDs, frames and store text

use libslix::iso15693::Iso15693Data;
use libslix::tag::SlixData;
use libslix::types::Uid;

/// UID of the reference SLIX2 tag, MSB first.
pub fn slix2_uid_bytes() -> [u8; 8] {
    [0xE0, 0x04, 0x01, 0x00, 0x08, 0x12, 0x34, 0x56]
}

pub fn slix2_uid() -> Uid {
    Uid::from_bytes(slix2_uid_bytes())
}

pub fn slix_uid() -> Uid {
    Uid::from_bytes([0xE0, 0x04, 0x01, 0x00, 0x10, 0x12, 0x34, 0x56])
}

/// SLIX2 with protection {0x7F, 0x35} and default lock bits.
pub fn slix2_with_protection() -> SlixData {
    let mut data = SlixData::new(Iso15693Data::new(slix2_uid()));
    data.set_protection(0x7F, 0x35);
    data
}

/// 32 byte signature decoded from hex.
pub fn sample_signature() -> [u8; 32] {
    let bytes = hex::decode("a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90")
        .unwrap();
    bytes.try_into().unwrap()
}

pub fn nxp_system_info_frame() -> Vec<u8> {
    hex::decode("007f35007f350000").unwrap()
}

pub fn read_signature_frame() -> Vec<u8> {
    let mut frame = vec![0x00];
    frame.extend_from_slice(&sample_signature());
    frame
}

/// Text form of a SLIX2 tag as written by `MemoryStore::to_text`.
pub fn slix2_store_text() -> String {
    [
        "UID: E0 04 01 00 08 12 34 56",
        "DSFID: 00",
        "AFI: 00",
        "IC Reference: 00",
        "Lock DSFID: false",
        "Lock AFI: false",
        "Block Count: 2",
        "Block Size: 04",
        "Data Content: 01 02 03 04 05 06 07 08",
        "Security Status: 00 00",
        "Password Read: 01 02 03 04",
        "Privacy Mode: true",
        "Protection Pointer: 7F",
        "Protection Condition: 35",
    ]
    .join("\n")
}
