use anyhow::Result;
use crest_core::wire::{CURRENT_VERSION, HDR_TYPE_DATA, UNFRAGMENTED};
use crest_core::{create_default_header, DataHeaderView, FrameType, HEADER_LENGTH};

use crate::finalized_frame;

/// The canonical producer flow: factory header, then read every field back.
#[test]
fn test_default_header_end_to_end() {
    let mut buf = create_default_header(7, 3, 99);
    assert_eq!(buf.len(), HEADER_LENGTH);

    let view = DataHeaderView::new(&mut buf[..], 0, HEADER_LENGTH);
    assert_eq!(view.session_id(), 7);
    assert_eq!(view.stream_id(), 3);
    assert_eq!(view.term_id(), 99);
    assert_eq!(view.reserved_value(), 0);
    assert_eq!(view.flags(), UNFRAGMENTED);
    assert_eq!(view.version(), CURRENT_VERSION);
    assert_eq!(view.header_type(), HDR_TYPE_DATA);
}

/// Wrap a slot inside a larger term buffer and populate one field.
#[test]
fn test_wrap_slot_in_term_buffer() {
    // A freshly allocated term slot: all bytes zero.
    let mut term = vec![0u8; 64];

    let mut view = DataHeaderView::new(&mut term, 0, HEADER_LENGTH);
    view.set_term_offset(16);

    assert_eq!(view.term_offset(), 16);
    assert_eq!(view.session_id(), 0);
    assert_eq!(view.stream_id(), 0);
    assert_eq!(view.term_id(), 0);
}

/// Producer finalizes a frame; an independent reader view extracts it.
#[test]
fn test_producer_then_consumer() -> Result<()> {
    let payload = b"twelve bytes";
    let mut frame = finalized_frame(5, 2, 1, payload);

    assert_eq!(frame.len(), HEADER_LENGTH + payload.len());

    // Reader side: a fresh view over the received bytes.
    let view = DataHeaderView::new(&mut frame[..], 0, HEADER_LENGTH);
    assert_eq!(view.frame_length() as usize, HEADER_LENGTH + payload.len());
    assert_eq!(view.session_id(), 5);
    assert_eq!(view.stream_id(), 2);
    assert_eq!(view.term_id(), 1);
    assert_eq!(FrameType::try_from(view.header_type())?, FrameType::Data);

    // Payload begins exactly at data_offset.
    let data_offset = view.data_offset() as usize;
    assert_eq!(data_offset, 32);
    assert_eq!(&frame[data_offset..], payload);
    Ok(())
}

/// One rebindable view walks successive frames in a single term buffer.
#[test]
fn test_view_walks_successive_frames() {
    let mut term = vec![0u8; 2 * HEADER_LENGTH];

    let mut view = DataHeaderView::new(&mut term, 0, HEADER_LENGTH);
    view.set_session_id(100).set_term_offset(0);

    view.wrap_offset(HEADER_LENGTH, HEADER_LENGTH);
    view.set_session_id(100).set_term_offset(HEADER_LENGTH as i32);

    // Walk back over both frames through the same view.
    view.wrap_offset(0, HEADER_LENGTH);
    assert_eq!(view.session_id(), 100);
    assert_eq!(view.term_offset(), 0);

    view.wrap_offset(HEADER_LENGTH, HEADER_LENGTH);
    assert_eq!(view.session_id(), 100);
    assert_eq!(view.term_offset(), HEADER_LENGTH as i32);
}

/// The diagnostic rendering is stable and spells out every field.
#[test]
fn test_formatter_rendering() {
    let mut buf = create_default_header(7, 3, 99);
    let view = DataHeaderView::new(&mut buf[..], 0, HEADER_LENGTH);

    assert_eq!(
        view.to_string(),
        "DATA{frame_length=0 version=1 flags=11000000 type=1 \
         term_offset=0 session_id=7 stream_id=3 term_id=99 reserved_value=0}"
    );
}
