//! crest-core: wire format, header views, and the buffer primitive.
//! Every other Crest crate depends on this one.

pub mod buffer;
pub mod header;
pub mod wire;

pub use buffer::Buffer;
pub use header::{DataHeaderView, HeaderView, SetupHeaderView};
pub use wire::{create_default_header, DataFrameHeader, FrameType, WireError, HEADER_LENGTH};
