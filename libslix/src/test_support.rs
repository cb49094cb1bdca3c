//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common fixture setup (UIDs per variant, a fully
//! populated tag, seeded MockTransport) so tests across the crate and the
//! tests/ directory build the same values.
#![allow(dead_code)]

use crate::constants::{ICODE_TYPE_SLIX_L, ICODE_TYPE_SLIX_S, ICODE_TYPE_SLIX_SLIX2};
use crate::listener::SlixListener;
use crate::poller::SlixPoller;
use crate::tag::SlixData;
use crate::transport::mock::MockTransport;
use crate::types::{PasswordKind, TagVariant, Uid};

/// A UID that classifies as `variant`. `serial` fills the last byte.
#[doc(hidden)]
pub fn uid_for(variant: TagVariant, serial: u8) -> Uid {
    let (icode, indicator) = match variant {
        TagVariant::Slix => (ICODE_TYPE_SLIX_SLIX2, 0x10),
        TagVariant::Slix2 => (ICODE_TYPE_SLIX_SLIX2, 0x08),
        TagVariant::SlixS => (ICODE_TYPE_SLIX_S, 0x00),
        TagVariant::SlixL => (ICODE_TYPE_SLIX_L, 0x00),
    };
    Uid::from_bytes([0xE0, 0x04, icode, 0x00, indicator, 0x5A, 0xA5, serial])
}

/// A tag of `variant` with every field its features allow populated with
/// recognizable values.
#[doc(hidden)]
pub fn populated_tag(variant: TagVariant) -> SlixData {
    let uid = uid_for(variant, 0x01);
    let mut builder = SlixData::builder()
        .uid(uid)
        .blocks(8, 4)
        .lock_bits(0x02);

    for kind in PasswordKind::ALL {
        if variant.supports_password(kind) {
            builder = builder.password(kind, [kind.wire_id(), 0x11, 0x22, 0x33]);
        }
    }

    let features = variant.features();
    if features.contains(crate::types::FeatureSet::SIGNATURE) {
        builder = builder.signature(std::array::from_fn(|i| i as u8));
    }
    if features.contains(crate::types::FeatureSet::PRIVACY) {
        builder = builder.privacy_mode(false);
    }
    if features.contains(crate::types::FeatureSet::PROTECTION) {
        builder = builder.protection(0x7F, 0x35);
    }

    // A UID from uid_for is always present, so build cannot fail
    builder.build().unwrap_or_default()
}

/// Build a MockTransport pre-seeded with the given responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Listener over a fresh MockTransport.
#[doc(hidden)]
pub fn mock_listener(data: SlixData) -> SlixListener<MockTransport> {
    SlixListener::new(data, MockTransport::new())
}

/// Poller whose transport replies with `responses` in order.
#[doc(hidden)]
pub fn mock_poller(responses: Vec<Vec<u8>>) -> SlixPoller<MockTransport> {
    SlixPoller::new(mock_with_responses(responses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_for_classifies_back() {
        for v in TagVariant::ALL {
            assert_eq!(uid_for(v, 7).variant(), Some(v));
        }
    }

    #[test]
    fn populated_tag_respects_features() {
        let slix = populated_tag(TagVariant::Slix);
        assert_eq!(slix.password(PasswordKind::Eas), Some([0x10, 0x11, 0x22, 0x33]));
        assert_eq!(slix.password(PasswordKind::Read), None);
        assert!(slix.signature().is_none());

        let slix2 = populated_tag(TagVariant::Slix2);
        assert!(slix2.signature().is_some());
        assert!(slix2.protection().is_present);
    }
}
