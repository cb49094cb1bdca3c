#[path = "../common/mod.rs"]
mod common;

use libslix::protocol::{
    Response, SlixCommand, error_response_parse, parse_nxp_system_info_response,
    parse_read_signature_response,
};
use libslix::tag::{LockBits, Protection};
use libslix::SlixError;

#[test]
fn system_info_frame_decodes() -> anyhow::Result<()> {
    let info = parse_nxp_system_info_response(&common::fixtures::nxp_system_info_frame())?;
    assert_eq!(info.protection, Protection::new(0x7F, 0x35));
    assert_eq!(info.lock_bits, LockBits::new(0x00));
    Ok(())
}

#[test]
fn system_info_length_boundaries() {
    let mut frame = common::fixtures::nxp_system_info_frame();
    frame.pop();
    assert_eq!(parse_nxp_system_info_response(&frame), Err(SlixError::Format));
    frame.extend_from_slice(&[0x00, 0x00]);
    assert_eq!(parse_nxp_system_info_response(&frame), Err(SlixError::Format));
}

#[test]
fn signature_frame_decodes() -> anyhow::Result<()> {
    let sig = parse_read_signature_response(&common::fixtures::read_signature_frame())?;
    assert_eq!(sig, common::fixtures::sample_signature());
    Ok(())
}

#[test]
fn signature_length_boundaries() {
    let frame = common::fixtures::read_signature_frame();
    assert_eq!(parse_read_signature_response(&frame[..32]), Err(SlixError::Format));
    let mut long = frame.clone();
    long.push(0xFF);
    assert_eq!(parse_read_signature_response(&long), Err(SlixError::Format));
}

#[test]
fn response_enum_dispatches_on_command() -> anyhow::Result<()> {
    match Response::decode(SlixCommand::ReadSignature, &common::fixtures::read_signature_frame())? {
        Response::Signature(sig) => assert_eq!(sig, common::fixtures::sample_signature()),
        other => panic!("expected signature response, got {:?}", other),
    }
    Ok(())
}

#[test]
fn error_frames_are_recognized() {
    assert_eq!(error_response_parse(&hex::decode("010f").unwrap()), Some(SlixError::Unknown));
    assert_eq!(error_response_parse(&hex::decode("0101").unwrap()), Some(SlixError::NotSupported));
    assert_eq!(error_response_parse(&common::fixtures::nxp_system_info_frame()), None);
}
