//! Crest wire format: the frame-header layout every Crest peer agrees on.
//!
//! Every byte offset, field width, and the little-endian encoding in this
//! module are part of the wire contract. Changing anything here is a
//! breaking change between independently built processes.
//!
//! `DataFrameHeader` is #[repr(C)] over zerocopy little-endian field types,
//! so its in-memory layout IS the wire layout and serialization is
//! allocation-free. There is no unsafe code in this module.

use bytes::BytesMut;
use static_assertions::assert_eq_size;
use zerocopy::byteorder::{LittleEndian, I32, I64, U16};
use zerocopy::{AsBytes, FromBytes, FromZeroes};

// ── Data Frame Header ─────────────────────────────────────────────────────────

/// Header prefixed to every Crest data frame.
///
/// The first 8 bytes (frame length, version, flags, header type) are the
/// generic prefix shared by every frame kind; the remaining 24 bytes are
/// data-frame specific. Payload bytes begin immediately after the header.
///
/// Wire size: 32 bytes, little-endian throughout.
#[derive(Debug, Clone, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct DataFrameHeader {
    /// Total frame length in bytes, header included.
    /// Written by whoever finalizes the frame once the payload length is
    /// known. This crate never recomputes or validates it.
    pub frame_length: I32<LittleEndian>,

    /// Wire format version. Currently 0x01.
    pub version: u8,

    /// Bit flags. 0x80 = first fragment of a message, 0x40 = last fragment.
    /// An unfragmented message carries both (0xC0). Remaining bits are
    /// reserved and must be zero.
    pub flags: u8,

    /// Frame kind discriminator. HDR_TYPE_DATA for this layout; other kinds
    /// share only the 8-byte generic prefix.
    pub header_type: U16<LittleEndian>,

    /// Byte offset of this frame within its term.
    pub term_offset: I32<LittleEndian>,

    /// Identifier of the session this frame belongs to.
    pub session_id: I32<LittleEndian>,

    /// Identifier of the stream within the session.
    pub stream_id: I32<LittleEndian>,

    /// Identifier of the term the frame was written into.
    pub term_id: I32<LittleEndian>,

    /// Application-defined 64-bit tag carried per frame.
    /// Not interpreted by the transport.
    pub reserved_value: I64<LittleEndian>,
}

// Compile-time size guard. If this fails, the wire format has silently changed.
assert_eq_size!(DataFrameHeader, [u8; 32]);

// ── Field Offsets ─────────────────────────────────────────────────────────────

/// Generic prefix offsets, shared by every frame kind.
pub const FRAME_LENGTH_OFFSET: usize = 0;
pub const VERSION_OFFSET: usize = 4;
pub const FLAGS_OFFSET: usize = 5;
pub const TYPE_OFFSET: usize = 6;

/// Data-frame field offsets.
pub const TERM_OFFSET_OFFSET: usize = 8;
pub const SESSION_ID_OFFSET: usize = 12;
pub const STREAM_ID_OFFSET: usize = 16;
pub const TERM_ID_OFFSET: usize = 20;
pub const RESERVED_VALUE_OFFSET: usize = 24;

/// Total data-frame header length. Payload begins at this offset.
pub const HEADER_LENGTH: usize = 32;

/// Setup-frame field offsets. A setup frame carries the generic prefix
/// followed by the term dimensions a subscriber needs before data flows.
pub const SETUP_TERM_OFFSET_OFFSET: usize = 8;
pub const SETUP_SESSION_ID_OFFSET: usize = 12;
pub const SETUP_STREAM_ID_OFFSET: usize = 16;
pub const SETUP_INITIAL_TERM_ID_OFFSET: usize = 20;
pub const SETUP_ACTIVE_TERM_ID_OFFSET: usize = 24;
pub const SETUP_TERM_LENGTH_OFFSET: usize = 28;
pub const SETUP_MTU_OFFSET: usize = 32;
pub const SETUP_TTL_OFFSET: usize = 36;

/// Total setup-frame header length.
pub const SETUP_HEADER_LENGTH: usize = 40;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Current wire format version.
pub const CURRENT_VERSION: u8 = 0x01;

/// Flag marking the first fragment of a message.
pub const BEGIN_FLAG: u8 = 0x80;

/// Flag marking the last fragment of a message.
pub const END_FLAG: u8 = 0x40;

/// Flags carried by a complete, unfragmented message.
pub const UNFRAGMENTED: u8 = BEGIN_FLAG | END_FLAG;

/// Reserved value written by the default header factory.
pub const DEFAULT_RESERVE_VALUE: i64 = 0;

/// Frame kind discriminators carried in the generic prefix's header type.
pub const HDR_TYPE_PAD: u16 = 0x00;
pub const HDR_TYPE_DATA: u16 = 0x01;
pub const HDR_TYPE_SETUP: u16 = 0x02;
pub const HDR_TYPE_STATUS: u16 = 0x03;
pub const HDR_TYPE_NAK: u16 = 0x04;

// ── Frame Type ────────────────────────────────────────────────────────────────

/// Typed frame kind for callers that want to dispatch on the header type.
///
/// The header views deliberately expose the raw u16 and never validate it;
/// a receiver that wants a checked conversion opts in via `TryFrom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FrameType {
    /// Padding filling out the remainder of a term. No payload semantics.
    Pad = 0x00,

    /// Data frame carrying application payload. The only kind with the full
    /// 32-byte header; the others share just the generic prefix.
    Data = 0x01,

    /// Setup frame announcing term dimensions to a new subscriber.
    Setup = 0x02,

    /// Status message from a receiver, used by flow control.
    Status = 0x03,

    /// Negative acknowledgement requesting retransmission.
    Nak = 0x04,
}

impl TryFrom<u16> for FrameType {
    type Error = WireError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            HDR_TYPE_PAD => Ok(FrameType::Pad),
            HDR_TYPE_DATA => Ok(FrameType::Data),
            HDR_TYPE_SETUP => Ok(FrameType::Setup),
            HDR_TYPE_STATUS => Ok(FrameType::Status),
            HDR_TYPE_NAK => Ok(FrameType::Nak),
            other => Err(WireError::UnknownFrameType(other)),
        }
    }
}

impl From<FrameType> for u16 {
    fn from(t: FrameType) -> u16 {
        t as u16
    }
}

// ── Default Header Factory ────────────────────────────────────────────────────

/// Build the canonical header for a single, unfragmented data frame.
///
/// Allocates one fresh zero-initialized 32-byte buffer and writes the
/// current version, BEGIN|END flags, the data-frame type, the given ids,
/// and a zero reserved value. Frame length is left at zero: it is written
/// by whoever finalizes the frame once the payload length is known.
pub fn create_default_header(session_id: i32, stream_id: i32, term_id: i32) -> BytesMut {
    let header = DataFrameHeader {
        frame_length: I32::new(0),
        version: CURRENT_VERSION,
        flags: BEGIN_FLAG | END_FLAG,
        header_type: U16::new(HDR_TYPE_DATA),
        term_offset: I32::new(0),
        session_id: I32::new(session_id),
        stream_id: I32::new(stream_id),
        term_id: I32::new(term_id),
        reserved_value: I64::new(DEFAULT_RESERVE_VALUE),
    };

    let mut buf = BytesMut::zeroed(HEADER_LENGTH);
    buf.copy_from_slice(header.as_bytes());
    buf
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Errors that can arise when interpreting wire-format data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("unknown frame type: 0x{0:04x}")]
    UnknownFrameType(u16),
}

// ── Tests ─────────────────────────────────────────────────────────────────────
