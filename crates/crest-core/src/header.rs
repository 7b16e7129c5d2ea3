//! Zero-copy views over frame headers.
//!
//! A view binds to a frame at `offset` inside an externally owned byte
//! region and reads/writes header fields in place through the bounds-checked
//! [`Buffer`] primitive. Views never own memory, never cache field values,
//! and can be re-targeted at another frame or buffer at any time; after a
//! rebind every accessor operates on the new location.
//!
//! Views do not validate what they read. A header with a garbage frame
//! length or an unrecognized type is read successfully; deciding whether a
//! received frame is trustworthy belongs to the layer above.
//!
//! The intended pattern is single writer per frame before publication and
//! single reader per frame after, serialized by the owner of the backing
//! buffer. The `&mut` borrow makes aliased access unrepresentable within one
//! process; cross-process synchronization stays with the term-log layer.

use std::fmt;

use crate::buffer::Buffer;
use crate::wire::{
    FLAGS_OFFSET, FRAME_LENGTH_OFFSET, HEADER_LENGTH, RESERVED_VALUE_OFFSET, SESSION_ID_OFFSET,
    SETUP_ACTIVE_TERM_ID_OFFSET, SETUP_INITIAL_TERM_ID_OFFSET, SETUP_MTU_OFFSET,
    SETUP_SESSION_ID_OFFSET, SETUP_STREAM_ID_OFFSET, SETUP_TERM_LENGTH_OFFSET,
    SETUP_TERM_OFFSET_OFFSET, SETUP_TTL_OFFSET, STREAM_ID_OFFSET, TERM_ID_OFFSET,
    TERM_OFFSET_OFFSET, TYPE_OFFSET, VERSION_OFFSET,
};

// A frame window that does not fit the backing region is a caller bug and
// fails fatally at bind time, before any field access.
fn check_frame_window(capacity: usize, offset: usize, length: usize) {
    let in_range = offset
        .checked_add(length)
        .map(|end| end <= capacity)
        .unwrap_or(false);
    assert!(
        in_range,
        "frame window out of range: offset={} length={} capacity={}",
        offset, length, capacity
    );
}

// ── Generic Header View ───────────────────────────────────────────────────────

/// View over the 8-byte generic prefix shared by every frame kind.
pub struct HeaderView<'a> {
    buffer: Buffer<'a>,
    offset: usize,
}

impl<'a> HeaderView<'a> {
    /// Bind a view to the frame starting at `offset` in `buffer`.
    /// `length` declares how many bytes of `buffer` belong to the frame and
    /// is validated against the buffer's capacity.
    pub fn new(buffer: &'a mut [u8], offset: usize, length: usize) -> Self {
        check_frame_window(buffer.len(), offset, length);
        Self {
            buffer: Buffer::wrap(buffer),
            offset,
        }
    }

    /// Re-target the view at a new buffer, offset, and length.
    /// Performs no field initialization: accessors reflect whatever bytes
    /// are already present at the new location.
    pub fn wrap(&mut self, buffer: &'a mut [u8], offset: usize, length: usize) {
        check_frame_window(buffer.len(), offset, length);
        self.buffer = Buffer::wrap(buffer);
        self.offset = offset;
    }

    /// Re-target the view at another frame within the already-bound buffer.
    /// This is the cheap per-frame rebind used when walking a term.
    pub fn wrap_offset(&mut self, offset: usize, length: usize) {
        check_frame_window(self.buffer.capacity(), offset, length);
        self.offset = offset;
    }

    pub fn frame_length(&self) -> i32 {
        self.buffer.get_i32(self.offset + FRAME_LENGTH_OFFSET)
    }

    pub fn set_frame_length(&mut self, value: i32) -> &mut Self {
        self.buffer.put_i32(self.offset + FRAME_LENGTH_OFFSET, value);
        self
    }

    pub fn version(&self) -> u8 {
        self.buffer.get_u8(self.offset + VERSION_OFFSET)
    }

    /// Producers normally get the version from the default header factory;
    /// this setter exists for symmetry with the other fields.
    pub fn set_version(&mut self, value: u8) -> &mut Self {
        self.buffer.put_u8(self.offset + VERSION_OFFSET, value);
        self
    }

    pub fn flags(&self) -> u8 {
        self.buffer.get_u8(self.offset + FLAGS_OFFSET)
    }

    pub fn set_flags(&mut self, value: u8) -> &mut Self {
        self.buffer.put_u8(self.offset + FLAGS_OFFSET, value);
        self
    }

    pub fn header_type(&self) -> u16 {
        self.buffer.get_u16(self.offset + TYPE_OFFSET)
    }

    pub fn set_header_type(&mut self, value: u16) -> &mut Self {
        self.buffer.put_u16(self.offset + TYPE_OFFSET, value);
        self
    }
}

impl fmt::Display for HeaderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HEADER{{frame_length={} version={} flags={:08b} type={}}}",
            self.frame_length(),
            self.version(),
            self.flags(),
            self.header_type(),
        )
    }
}

// ── Data Header View ──────────────────────────────────────────────────────────

/// View over the full 32-byte data-frame header.
///
/// Composes a [`HeaderView`] over the same region for the generic prefix and
/// adds the data-frame fields. Setters return the view so a header can be
/// populated in one chained expression.
pub struct DataHeaderView<'a> {
    header: HeaderView<'a>,
}

impl<'a> DataHeaderView<'a> {
    /// Bind a view to the data frame starting at `offset` in `buffer`.
    pub fn new(buffer: &'a mut [u8], offset: usize, length: usize) -> Self {
        Self {
            header: HeaderView::new(buffer, offset, length),
        }
    }

    /// Re-target the view at a new buffer, offset, and length.
    /// No field initialization is performed.
    pub fn wrap(&mut self, buffer: &'a mut [u8], offset: usize, length: usize) {
        self.header.wrap(buffer, offset, length);
    }

    /// Re-target the view at another frame within the already-bound buffer.
    pub fn wrap_offset(&mut self, offset: usize, length: usize) {
        self.header.wrap_offset(offset, length);
    }

    // Generic prefix, delegated.

    pub fn frame_length(&self) -> i32 {
        self.header.frame_length()
    }

    pub fn set_frame_length(&mut self, value: i32) -> &mut Self {
        self.header.set_frame_length(value);
        self
    }

    pub fn version(&self) -> u8 {
        self.header.version()
    }

    pub fn flags(&self) -> u8 {
        self.header.flags()
    }

    pub fn set_flags(&mut self, value: u8) -> &mut Self {
        self.header.set_flags(value);
        self
    }

    pub fn header_type(&self) -> u16 {
        self.header.header_type()
    }

    pub fn set_header_type(&mut self, value: u16) -> &mut Self {
        self.header.set_header_type(value);
        self
    }

    // Data-frame fields.

    pub fn term_offset(&self) -> i32 {
        self.header.buffer.get_i32(self.header.offset + TERM_OFFSET_OFFSET)
    }

    pub fn set_term_offset(&mut self, value: i32) -> &mut Self {
        self.header
            .buffer
            .put_i32(self.header.offset + TERM_OFFSET_OFFSET, value);
        self
    }

    pub fn session_id(&self) -> i32 {
        self.header.buffer.get_i32(self.header.offset + SESSION_ID_OFFSET)
    }

    pub fn set_session_id(&mut self, value: i32) -> &mut Self {
        self.header
            .buffer
            .put_i32(self.header.offset + SESSION_ID_OFFSET, value);
        self
    }

    pub fn stream_id(&self) -> i32 {
        self.header.buffer.get_i32(self.header.offset + STREAM_ID_OFFSET)
    }

    pub fn set_stream_id(&mut self, value: i32) -> &mut Self {
        self.header
            .buffer
            .put_i32(self.header.offset + STREAM_ID_OFFSET, value);
        self
    }

    pub fn term_id(&self) -> i32 {
        self.header.buffer.get_i32(self.header.offset + TERM_ID_OFFSET)
    }

    pub fn set_term_id(&mut self, value: i32) -> &mut Self {
        self.header
            .buffer
            .put_i32(self.header.offset + TERM_ID_OFFSET, value);
        self
    }

    /// The application tag carried in the 8-byte reserved slot.
    pub fn reserved_value(&self) -> i64 {
        self.header
            .buffer
            .get_i64(self.header.offset + RESERVED_VALUE_OFFSET)
    }

    /// Store a 32-bit application tag into the 8-byte reserved slot.
    ///
    /// The value is zero-extended: the upper 32 bits of the slot are always
    /// written as zero, so `set_reserved_value(-1)` reads back as
    /// `0x0000_0000_FFFF_FFFF`. The slot is 8 bytes wide to leave room for
    /// a full 64-bit tag in a later wire version.
    pub fn set_reserved_value(&mut self, value: i32) -> &mut Self {
        let zero_extended = (value as u32) as i64;
        self.header
            .buffer
            .put_i64(self.header.offset + RESERVED_VALUE_OFFSET, zero_extended);
        self
    }

    /// Where payload bytes begin, relative to the start of the frame.
    /// Always `HEADER_LENGTH`; it says nothing about where the frame sits
    /// in any larger enclosing buffer.
    pub fn data_offset(&self) -> i32 {
        HEADER_LENGTH as i32
    }
}

impl fmt::Display for DataHeaderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DATA{{frame_length={} version={} flags={:08b} type={} \
             term_offset={} session_id={} stream_id={} term_id={} reserved_value={}}}",
            self.frame_length(),
            self.version(),
            self.flags(),
            self.header_type(),
            self.term_offset(),
            self.session_id(),
            self.stream_id(),
            self.term_id(),
            self.reserved_value(),
        )
    }
}

// ── Setup Header View ─────────────────────────────────────────────────────────

/// View over the 40-byte setup-frame header.
///
/// A publisher sends a setup frame to announce term dimensions before any
/// data flows; the subscriber reads them through this view.
pub struct SetupHeaderView<'a> {
    header: HeaderView<'a>,
}

impl<'a> SetupHeaderView<'a> {
    pub fn new(buffer: &'a mut [u8], offset: usize, length: usize) -> Self {
        Self {
            header: HeaderView::new(buffer, offset, length),
        }
    }

    pub fn wrap(&mut self, buffer: &'a mut [u8], offset: usize, length: usize) {
        self.header.wrap(buffer, offset, length);
    }

    pub fn wrap_offset(&mut self, offset: usize, length: usize) {
        self.header.wrap_offset(offset, length);
    }

    // Generic prefix, delegated.

    pub fn frame_length(&self) -> i32 {
        self.header.frame_length()
    }

    pub fn set_frame_length(&mut self, value: i32) -> &mut Self {
        self.header.set_frame_length(value);
        self
    }

    pub fn version(&self) -> u8 {
        self.header.version()
    }

    pub fn flags(&self) -> u8 {
        self.header.flags()
    }

    pub fn set_flags(&mut self, value: u8) -> &mut Self {
        self.header.set_flags(value);
        self
    }

    pub fn header_type(&self) -> u16 {
        self.header.header_type()
    }

    pub fn set_header_type(&mut self, value: u16) -> &mut Self {
        self.header.set_header_type(value);
        self
    }

    // Setup-frame fields.

    pub fn term_offset(&self) -> i32 {
        self.get(SETUP_TERM_OFFSET_OFFSET)
    }

    pub fn set_term_offset(&mut self, value: i32) -> &mut Self {
        self.put(SETUP_TERM_OFFSET_OFFSET, value)
    }

    pub fn session_id(&self) -> i32 {
        self.get(SETUP_SESSION_ID_OFFSET)
    }

    pub fn set_session_id(&mut self, value: i32) -> &mut Self {
        self.put(SETUP_SESSION_ID_OFFSET, value)
    }

    pub fn stream_id(&self) -> i32 {
        self.get(SETUP_STREAM_ID_OFFSET)
    }

    pub fn set_stream_id(&mut self, value: i32) -> &mut Self {
        self.put(SETUP_STREAM_ID_OFFSET, value)
    }

    pub fn initial_term_id(&self) -> i32 {
        self.get(SETUP_INITIAL_TERM_ID_OFFSET)
    }

    pub fn set_initial_term_id(&mut self, value: i32) -> &mut Self {
        self.put(SETUP_INITIAL_TERM_ID_OFFSET, value)
    }

    pub fn active_term_id(&self) -> i32 {
        self.get(SETUP_ACTIVE_TERM_ID_OFFSET)
    }

    pub fn set_active_term_id(&mut self, value: i32) -> &mut Self {
        self.put(SETUP_ACTIVE_TERM_ID_OFFSET, value)
    }

    pub fn term_length(&self) -> i32 {
        self.get(SETUP_TERM_LENGTH_OFFSET)
    }

    pub fn set_term_length(&mut self, value: i32) -> &mut Self {
        self.put(SETUP_TERM_LENGTH_OFFSET, value)
    }

    pub fn mtu_length(&self) -> i32 {
        self.get(SETUP_MTU_OFFSET)
    }

    pub fn set_mtu_length(&mut self, value: i32) -> &mut Self {
        self.put(SETUP_MTU_OFFSET, value)
    }

    pub fn ttl(&self) -> i32 {
        self.get(SETUP_TTL_OFFSET)
    }

    pub fn set_ttl(&mut self, value: i32) -> &mut Self {
        self.put(SETUP_TTL_OFFSET, value)
    }

    fn get(&self, field_offset: usize) -> i32 {
        self.header.buffer.get_i32(self.header.offset + field_offset)
    }

    fn put(&mut self, field_offset: usize, value: i32) -> &mut Self {
        self.header
            .buffer
            .put_i32(self.header.offset + field_offset, value);
        self
    }
}

impl fmt::Display for SetupHeaderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SETUP{{frame_length={} version={} flags={:08b} type={} \
             term_offset={} session_id={} stream_id={} initial_term_id={} \
             active_term_id={} term_length={} mtu_length={} ttl={}}}",
            self.frame_length(),
            self.version(),
            self.flags(),
            self.header_type(),
            self.term_offset(),
            self.session_id(),
            self.stream_id(),
            self.initial_term_id(),
            self.active_term_id(),
            self.term_length(),
            self.mtu_length(),
            self.ttl(),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
