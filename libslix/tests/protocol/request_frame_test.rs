#[path = "../common/mod.rs"]
mod common;

use libslix::constants::*;
use libslix::protocol::{Request, SlixCommand};
use libslix::SlixError;

#[test]
fn poller_requests_match_wire_format() {
    assert_eq!(
        SlixCommand::GetNxpSystemInfo.encode(REQ_FLAG_DATA_RATE_HI, None),
        hex::decode("02ab04").unwrap()
    );
    assert_eq!(
        SlixCommand::ReadSignature.encode(REQ_FLAG_DATA_RATE_HI, None),
        hex::decode("02bd04").unwrap()
    );
}

#[test]
fn addressed_request_carries_uid_lsb_first() -> anyhow::Result<()> {
    let uid = common::fixtures::slix2_uid();
    let flags = REQ_FLAG_DATA_RATE_HI | REQ_FLAG_ADDRESSED;
    let frame = SlixCommand::ReadSignature.encode(flags, Some(&uid));
    assert_eq!(hex::encode(&frame), "22bd0456341208000104e0");

    let req = Request::parse(&frame)?;
    assert_eq!(req.command, CMD_READ_SIGNATURE);
    assert_eq!(req.uid, Some(uid));
    assert!(req.data.is_empty());
    Ok(())
}

#[test]
fn header_shorter_than_three_bytes_is_rejected() {
    for len in 0..REQUEST_HEADER_LEN {
        let buf = vec![0x02; len];
        assert_eq!(Request::parse(&buf), Err(SlixError::Format));
    }
}

#[test]
fn trailing_payload_is_preserved() -> anyhow::Result<()> {
    let buf = hex::decode("02b204010203")?;
    let req = Request::parse(&buf)?;
    assert_eq!(req.command, 0xB2);
    assert_eq!(req.data, &[0x01, 0x02, 0x03]);
    assert_eq!(SlixCommand::try_from(req.command), Err(SlixError::NotSupported));
    Ok(())
}
