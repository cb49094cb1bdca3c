// libslix-rs/libslix/src/listener/handlers.rs

//! Response payloads for the SLIX custom commands.
//!
//! Handlers only read feature-gated fields the tag's variant supports; an
//! unrecognized UID has no optional features.

use crate::constants::SLIX2_FEATURE_FLAGS;
use crate::protocol::SlixCommand;
use crate::tag::SlixData;
use crate::types::FeatureSet;
use crate::{Result, SlixError};

/// Build the response payload (without the flags byte) for `cmd`.
pub fn handle(cmd: SlixCommand, data: &SlixData) -> Result<Vec<u8>> {
    let features = data.features();
    match cmd {
        SlixCommand::GetNxpSystemInfo => Ok(get_nxp_system_info(data, features)),
        SlixCommand::ReadSignature => read_signature(data, features),
    }
}

/// pointer(1) + condition(1) + lock_bits(1) + feature_flags(4, LE)
///
/// Fields the variant lacks are reported as zero.
pub fn get_nxp_system_info(data: &SlixData, features: FeatureSet) -> Vec<u8> {
    let info = data.system_info();
    let (pointer, condition) = if features.contains(FeatureSet::PROTECTION) {
        (info.protection.pointer, info.protection.condition)
    } else {
        (0, 0)
    };
    let lock_bits = if features.contains(FeatureSet::LOCK_BITS) {
        info.lock_bits.data
    } else {
        0
    };

    let mut buf = Vec::with_capacity(7);
    buf.push(pointer);
    buf.push(condition);
    buf.push(lock_bits);
    buf.extend_from_slice(&SLIX2_FEATURE_FLAGS.to_le_bytes());
    buf
}

/// The stored signature, verbatim. Variants without an originality
/// signature reject the command.
pub fn read_signature(data: &SlixData, features: FeatureSet) -> Result<Vec<u8>> {
    if !features.contains(FeatureSet::SIGNATURE) {
        return Err(SlixError::NotSupported);
    }
    Ok(data.signature.data.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{populated_tag, uid_for};
    use crate::types::{TagVariant, Uid};

    fn tag(uid: Uid) -> SlixData {
        let mut data = SlixData::builder().uid(uid).build().unwrap();
        data.set_protection(0x10, 0x03);
        data.set_lock_bits(0x01);
        data.set_signature([0x5A; 32]);
        data
    }

    #[test]
    fn system_info_payload() {
        let data = tag(uid_for(TagVariant::Slix2, 1));
        assert_eq!(
            handle(SlixCommand::GetNxpSystemInfo, &data).unwrap(),
            vec![0x10, 0x03, 0x01, 0x7F, 0x35, 0x00, 0x00]
        );
    }

    #[test]
    fn system_info_hides_protection_without_feature() {
        let data = tag(uid_for(TagVariant::SlixS, 1));
        assert_eq!(
            handle(SlixCommand::GetNxpSystemInfo, &data).unwrap(),
            vec![0x00, 0x00, 0x01, 0x7F, 0x35, 0x00, 0x00]
        );
    }

    #[test]
    fn signature_only_on_slix2() {
        let data = tag(uid_for(TagVariant::Slix2, 1));
        assert_eq!(handle(SlixCommand::ReadSignature, &data).unwrap(), vec![0x5A; 32]);

        let slix = populated_tag(TagVariant::Slix);
        assert_eq!(
            handle(SlixCommand::ReadSignature, &slix),
            Err(SlixError::NotSupported)
        );
    }

    #[test]
    fn unknown_uid_has_no_optional_features() {
        let data = tag(Uid::from_bytes([0xE0, 0x07, 0x01, 0x00, 0x08, 0, 0, 1]));
        assert_eq!(data.variant(), None);
        assert_eq!(
            handle(SlixCommand::ReadSignature, &data),
            Err(SlixError::NotSupported)
        );
        assert_eq!(
            handle(SlixCommand::GetNxpSystemInfo, &data).unwrap(),
            vec![0x00, 0x00, 0x00, 0x7F, 0x35, 0x00, 0x00]
        );
    }
}
