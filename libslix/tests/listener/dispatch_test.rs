#[path = "../common/mod.rs"]
mod common;

use libslix::iso15693::Iso15693Data;
use libslix::listener::{Dispatch, ListenerState};
use libslix::protocol::SlixCommand;
use libslix::tag::SlixData;
use libslix::test_support::mock_listener;
use libslix::SlixError;
use proptest::prelude::*;

#[test]
fn get_nxp_system_info_reports_protection_and_features() -> anyhow::Result<()> {
    common::init_logging();
    let data = common::fixtures::slix2_with_protection();
    assert_eq!(data.variant(), Some(libslix::TagVariant::Slix2));

    let mut listener = mock_listener(data);
    let outcome = listener.process_request(&hex::decode("00ab04")?)?;
    assert_eq!(outcome, Dispatch::Handled(SlixCommand::GetNxpSystemInfo));
    assert_eq!(listener.transport().sent, vec![hex::decode("007f35007f350000")?]);
    Ok(())
}

#[test]
fn read_signature_returns_stored_bytes() -> anyhow::Result<()> {
    let mut data = common::fixtures::slix2_with_protection();
    data.set_signature(common::fixtures::sample_signature());

    let mut listener = mock_listener(data);
    listener.process_request(&hex::decode("02bd04")?)?;
    assert_eq!(listener.transport().sent, vec![common::fixtures::read_signature_frame()]);
    Ok(())
}

#[test]
fn plain_slix_rejects_read_signature() -> anyhow::Result<()> {
    let mut data = SlixData::new(Iso15693Data::new(common::fixtures::slix_uid()));
    data.set_signature(common::fixtures::sample_signature());
    data.set_protection(0x7F, 0x35);
    data.set_lock_bits(0x02);

    let mut listener = mock_listener(data);
    let outcome = listener.process_request(&hex::decode("02bd04")?)?;
    assert_eq!(outcome, Dispatch::Rejected(SlixError::NotSupported));
    // Protection is SLIX2 only; lock bits are reported
    listener.process_request(&hex::decode("02ab04")?)?;
    assert_eq!(
        listener.transport().sent,
        vec![hex::decode("010f")?, hex::decode("000000027f350000")?]
    );
    Ok(())
}

#[test]
fn dropped_frames_send_nothing() {
    let mut listener = mock_listener(common::fixtures::slix2_with_protection());
    assert_eq!(listener.process_request(&[0x02]), Err(SlixError::Format));
    assert_eq!(listener.process_request(&[0x02, 0xAB, 0x16]), Err(SlixError::Unknown));
    assert!(listener.transport().sent.is_empty());
    // The first request still opened a session
    assert_eq!(listener.state(), ListenerState::SessionActive);
}

proptest! {
    #[test]
    fn unknown_commands_leave_tag_unchanged(
        cmd in any::<u8>().prop_filter("known command", |c| *c != 0xAB && *c != 0xBD),
        payload in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let data = common::fixtures::slix2_with_protection();
        let mut listener = mock_listener(data.clone());

        let mut frame = vec![0x02, cmd, 0x04];
        frame.extend_from_slice(&payload);
        let outcome = listener.process_request(&frame);

        prop_assert_eq!(outcome, Ok(Dispatch::Rejected(SlixError::NotSupported)));
        prop_assert_eq!(&listener.transport().sent, &vec![vec![0x01, 0x0F]]);
        prop_assert_eq!(listener.data(), &data);
    }
}
