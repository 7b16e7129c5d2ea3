use anyhow::Result;
use crest_core::wire::{CURRENT_VERSION, HDR_TYPE_SETUP, SETUP_HEADER_LENGTH};
use crest_core::{FrameType, HeaderView, SetupHeaderView};

/// A publisher announces term dimensions; a subscriber reads them back
/// through a fresh view over the received bytes.
#[test]
fn test_setup_announcement_round_trip() -> Result<()> {
    let mut frame = vec![0u8; SETUP_HEADER_LENGTH];

    let mut writer = SetupHeaderView::new(&mut frame, 0, SETUP_HEADER_LENGTH);
    writer
        .set_frame_length(SETUP_HEADER_LENGTH as i32)
        .set_header_type(HDR_TYPE_SETUP)
        .set_session_id(77)
        .set_stream_id(8)
        .set_initial_term_id(-4)
        .set_active_term_id(-1)
        .set_term_offset(0)
        .set_term_length(1 << 20)
        .set_mtu_length(1408)
        .set_ttl(16);

    // Subscriber side.
    let reader = SetupHeaderView::new(&mut frame, 0, SETUP_HEADER_LENGTH);
    assert_eq!(FrameType::try_from(reader.header_type())?, FrameType::Setup);
    assert_eq!(reader.frame_length() as usize, SETUP_HEADER_LENGTH);
    assert_eq!(reader.session_id(), 77);
    assert_eq!(reader.stream_id(), 8);
    assert_eq!(reader.initial_term_id(), -4);
    assert_eq!(reader.active_term_id(), -1);
    assert_eq!(reader.term_offset(), 0);
    assert_eq!(reader.term_length(), 1 << 20);
    assert_eq!(reader.mtu_length(), 1408);
    assert_eq!(reader.ttl(), 16);
    Ok(())
}

/// A receiver peeks at the generic prefix before choosing a frame view.
#[test]
fn test_generic_prefix_dispatch() -> Result<()> {
    let mut frame = vec![0u8; SETUP_HEADER_LENGTH];
    {
        let mut writer = SetupHeaderView::new(&mut frame, 0, SETUP_HEADER_LENGTH);
        writer
            .set_header_type(HDR_TYPE_SETUP)
            .set_flags(0)
            .set_session_id(9);
    }

    let mut peek = HeaderView::new(&mut frame, 0, SETUP_HEADER_LENGTH);
    peek.set_version(CURRENT_VERSION);
    match FrameType::try_from(peek.header_type())? {
        FrameType::Setup => {}
        other => panic!("expected a setup frame, got {other:?}"),
    }
    assert_eq!(peek.version(), CURRENT_VERSION);
    Ok(())
}
