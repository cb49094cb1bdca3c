// libslix-rs/libslix/src/constants.rs

//! Common protocol constants used across the crate

/// NXP manufacturer code as found in UID byte 1 and in custom command frames.
pub const NXP_MANUFACTURER_CODE: u8 = 0x04;

/// First UID byte of every ISO15693 tag.
pub const ISO15693_UID_PREFIX: u8 = 0xE0;

/// ISO15693 UID length in bytes.
pub const ISO15693_UID_LEN: usize = 8;

/// ICODE type byte (UID byte 2) values.
pub const ICODE_TYPE_SLIX_SLIX2: u8 = 0x01;
pub const ICODE_TYPE_SLIX_S: u8 = 0x02;
pub const ICODE_TYPE_SLIX_L: u8 = 0x03;

/// Two-bit type indicator distinguishing SLIX from SLIX2.
pub const TYPE_INDICATOR_SLIX: u8 = 0b10;
pub const TYPE_INDICATOR_SLIX2: u8 = 0b01;

/// UID byte carrying the type indicator, and its bit offset/mask.
pub const TYPE_INDICATOR_BYTE: usize = 4;
pub const TYPE_INDICATOR_SHIFT: u8 = 3;
pub const TYPE_INDICATOR_MASK: u8 = 0b11;

/// NXP custom command: Get NXP System Information
pub const CMD_GET_NXP_SYSTEM_INFO: u8 = 0xAB;
/// NXP custom command: Read Signature
pub const CMD_READ_SIGNATURE: u8 = 0xBD;

/// ISO15693 request flags
pub const REQ_FLAG_SUBCARRIER_2: u8 = 0x01;
pub const REQ_FLAG_DATA_RATE_HI: u8 = 0x02;
pub const REQ_FLAG_INVENTORY: u8 = 0x04;
pub const REQ_FLAG_PROTOCOL_EXT: u8 = 0x08;
pub const REQ_FLAG_SELECTED: u8 = 0x10;
pub const REQ_FLAG_ADDRESSED: u8 = 0x20;
pub const REQ_FLAG_OPTION: u8 = 0x40;

/// ISO15693 response flags
pub const RESP_FLAG_NONE: u8 = 0x00;
pub const RESP_FLAG_ERROR: u8 = 0x01;

/// ISO15693 response error codes
pub const RESP_ERROR_NOT_SUPPORTED: u8 = 0x01;
pub const RESP_ERROR_FORMAT: u8 = 0x02;
pub const RESP_ERROR_OPTION: u8 = 0x03;
pub const RESP_ERROR_UNKNOWN: u8 = 0x0F;
pub const RESP_ERROR_BLOCK_UNAVAILABLE: u8 = 0x10;
pub const RESP_ERROR_BLOCK_ALREADY_LOCKED: u8 = 0x11;
pub const RESP_ERROR_BLOCK_LOCKED: u8 = 0x12;
pub const RESP_ERROR_BLOCK_WRITE: u8 = 0x13;
pub const RESP_ERROR_BLOCK_LOCK: u8 = 0x14;
pub const RESP_ERROR_CUSTOM_START: u8 = 0xA0;
pub const RESP_ERROR_CUSTOM_END: u8 = 0xDF;

/// Request header: flags(1) + command(1) + manufacturer(1)
pub const REQUEST_HEADER_LEN: usize = 3;

/// Get NXP System Info response: flags(1) + pointer(1) + condition(1) + lock bits(1) + feature flags(4)
pub const NXP_SYSTEM_INFO_RESPONSE_LEN: usize = 8;

/// Read Signature response: flags(1) + signature(32)
pub const READ_SIGNATURE_RESPONSE_LEN: usize = 1 + SIGNATURE_LEN;

/// Password and originality signature sizes in bytes
pub const PASSWORD_LEN: usize = 4;
pub const SIGNATURE_LEN: usize = 32;

/// SLIX2 feature flag bits reported by Get NXP System Info
pub const FEATURE_FLAG_UM_PP: u32 = 0x0000_0001;
pub const FEATURE_FLAG_COUNTER: u32 = 0x0000_0002;
pub const FEATURE_FLAG_EAS_ID: u32 = 0x0000_0004;
pub const FEATURE_FLAG_EAS_PP: u32 = 0x0000_0008;
pub const FEATURE_FLAG_AFI_PP: u32 = 0x0000_0010;
pub const FEATURE_FLAG_INVENTORY_READ_EXT: u32 = 0x0000_0020;
pub const FEATURE_FLAG_EAS_IR: u32 = 0x0000_0040;
pub const FEATURE_FLAG_ORIGINALITY_SIG: u32 = 0x0000_0100;
pub const FEATURE_FLAG_ORIGINALITY_SIG_PP: u32 = 0x0000_0200;
pub const FEATURE_FLAG_PERSISTENT_QUIET: u32 = 0x0000_0400;
pub const FEATURE_FLAG_PRIVACY: u32 = 0x0000_1000;
pub const FEATURE_FLAG_DESTROY: u32 = 0x0000_2000;

/// Feature word an emulated tag reports (0x0000357F).
pub const SLIX2_FEATURE_FLAGS: u32 = FEATURE_FLAG_UM_PP
    | FEATURE_FLAG_COUNTER
    | FEATURE_FLAG_EAS_ID
    | FEATURE_FLAG_EAS_PP
    | FEATURE_FLAG_AFI_PP
    | FEATURE_FLAG_INVENTORY_READ_EXT
    | FEATURE_FLAG_EAS_IR
    | FEATURE_FLAG_ORIGINALITY_SIG
    | FEATURE_FLAG_PERSISTENT_QUIET
    | FEATURE_FLAG_PRIVACY
    | FEATURE_FLAG_DESTROY;

/// Lock bit masks
pub const LOCK_BITS_AFI: u8 = 0x01;
pub const LOCK_BITS_EAS: u8 = 0x02;
pub const LOCK_BITS_DSFID: u8 = 0x04;
pub const LOCK_BITS_PPL: u8 = 0x08;

/// Store key names. These strings are part of the persisted format.
pub const KEY_PASSWORD_READ: &str = "Password Read";
pub const KEY_PASSWORD_WRITE: &str = "Password Write";
pub const KEY_PASSWORD_PRIVACY: &str = "Password Privacy";
pub const KEY_PASSWORD_DESTROY: &str = "Password Destroy";
pub const KEY_PASSWORD_EAS: &str = "Password EAS";
pub const KEY_SIGNATURE: &str = "Signature";
pub const KEY_PRIVACY_MODE: &str = "Privacy Mode";
pub const KEY_PROTECTION_POINTER: &str = "Protection Pointer";
pub const KEY_PROTECTION_CONDITION: &str = "Protection Condition";
pub const KEY_LOCK_BITS: &str = "SLIX Lock Bits";

/// Base ISO15693-3 store keys
pub const KEY_UID: &str = "UID";
pub const KEY_DSFID: &str = "DSFID";
pub const KEY_AFI: &str = "AFI";
pub const KEY_IC_REFERENCE: &str = "IC Reference";
pub const KEY_LOCK_DSFID: &str = "Lock DSFID";
pub const KEY_LOCK_AFI: &str = "Lock AFI";
pub const KEY_BLOCK_COUNT: &str = "Block Count";
pub const KEY_BLOCK_SIZE: &str = "Block Size";
pub const KEY_DATA_CONTENT: &str = "Data Content";
pub const KEY_SECURITY_STATUS: &str = "Security Status";
