#[path = "../common/mod.rs"]
mod common;

use libslix::poller::{PollerConfig, SlixPoller};
use libslix::test_support::{mock_listener, mock_poller};
use libslix::transport::{MockTransport, Transport};
use libslix::SlixError;

/// Feed each request the poller sent through a listener and return the reply.
fn relay(poller_tx: &[u8], data: libslix::tag::SlixData) -> anyhow::Result<Vec<u8>> {
    let mut listener = mock_listener(data);
    listener.process_request(poller_tx)?;
    listener
        .transport_mut()
        .pop_sent()
        .ok_or_else(|| anyhow::anyhow!("listener sent no reply"))
}

#[test]
fn poller_reads_what_listener_emulates() -> anyhow::Result<()> {
    let mut data = common::fixtures::slix2_with_protection();
    data.set_signature(common::fixtures::sample_signature());
    data.set_lock_bits(0x02);

    // First pass: capture the poller requests
    let mut poller = mock_poller(vec![]);
    assert_eq!(poller.get_nxp_system_info(), Err(SlixError::Timeout));
    assert_eq!(poller.read_signature(), Err(SlixError::Timeout));
    let requests = poller.into_transport().sent;
    assert_eq!(requests.len(), 2);

    let replies = requests
        .iter()
        .map(|tx| relay(tx, data.clone()))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut poller = mock_poller(replies);
    let info = poller.get_nxp_system_info()?;
    assert_eq!(info, *data.system_info());
    assert_eq!(poller.read_signature()?, common::fixtures::sample_signature());
    Ok(())
}

#[test]
fn addressed_poller_is_answered_only_by_its_target() -> anyhow::Result<()> {
    let data = common::fixtures::slix2_with_protection();

    let mut poller = SlixPoller::with_config(MockTransport::new(), PollerConfig::new().timeout_ms(80));
    poller.set_target(Some(common::fixtures::slix_uid()));
    let _ = poller.get_nxp_system_info();
    let foreign = poller.transport_mut().pop_sent().unwrap_or_default();

    let mut listener = mock_listener(data.clone());
    assert_eq!(listener.process_request(&foreign), Err(SlixError::Unknown));

    poller.set_target(Some(*data.uid()));
    let _ = poller.get_nxp_system_info();
    let ours = poller.transport_mut().pop_sent().unwrap_or_default();
    assert!(listener.process_request(&ours).is_ok());
    assert_eq!(poller.transport().last_timeout_ms, Some(80));
    Ok(())
}

#[test]
fn transport_reset_clears_recorded_frames() -> anyhow::Result<()> {
    let mut listener = mock_listener(common::fixtures::slix2_with_protection());
    listener.process_request(&[0x02, 0xAB, 0x04])?;
    listener.transport_mut().reset()?;
    assert!(listener.transport().sent.is_empty());
    assert_eq!(listener.transport().resets, 1);
    Ok(())
}
