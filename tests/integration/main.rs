//! Crest integration test harness.
//!
//! These tests exercise the wire contract end to end the way the transport
//! uses it: a producer populates a header through a view, the frame is
//! finalized, and an independent reader view extracts the fields from the
//! same bytes. No network or term-log machinery is involved; the backing
//! buffers live on the test stack.

use bytes::BytesMut;
use crest_core::{create_default_header, DataHeaderView, HEADER_LENGTH};

mod frames;
mod setup;

// ── Harness ───────────────────────────────────────────────────────────────────

/// Build a finalized single-frame buffer: default header, payload appended,
/// frame length written. This is what a producer hands to the send path.
pub fn finalized_frame(
    session_id: i32,
    stream_id: i32,
    term_id: i32,
    payload: &[u8],
) -> BytesMut {
    let mut frame = create_default_header(session_id, stream_id, term_id);
    frame.extend_from_slice(payload);

    let total = frame.len();
    let mut view = DataHeaderView::new(&mut frame[..], 0, HEADER_LENGTH);
    view.set_frame_length(total as i32);
    frame
}
