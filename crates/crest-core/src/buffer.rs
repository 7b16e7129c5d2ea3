//! Bounds-checked byte buffer primitive.
//!
//! `Buffer` wraps a borrowed mutable byte region and provides little-endian
//! reads and writes of fixed-width integers at arbitrary byte offsets. It
//! never owns, allocates, or frees memory; lifetime and synchronization of
//! the backing bytes belong entirely to the caller.
//!
//! An access whose offset plus width exceeds the wrapped capacity is a
//! caller bug, not a recoverable condition: it panics with the offending
//! offset, width, and capacity. Nothing above this layer catches or
//! reinterprets that panic.

/// A non-owning window onto externally owned bytes.
#[derive(Debug)]
pub struct Buffer<'a> {
    data: &'a mut [u8],
}

impl<'a> Buffer<'a> {
    /// Wrap the given byte region. No copy, no allocation.
    pub fn wrap(data: &'a mut [u8]) -> Self {
        Self { data }
    }

    /// Number of addressable bytes in the wrapped region.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    fn bounds_check(&self, offset: usize, width: usize) {
        let in_range = offset
            .checked_add(width)
            .map(|end| end <= self.data.len())
            .unwrap_or(false);
        assert!(
            in_range,
            "buffer bounds violation: offset={} width={} capacity={}",
            offset,
            width,
            self.data.len()
        );
    }

    pub fn get_u8(&self, offset: usize) -> u8 {
        self.bounds_check(offset, 1);
        self.data[offset]
    }

    pub fn put_u8(&mut self, offset: usize, value: u8) {
        self.bounds_check(offset, 1);
        self.data[offset] = value;
    }

    pub fn get_u16(&self, offset: usize) -> u16 {
        self.bounds_check(offset, 2);
        let mut bytes = [0u8; 2];
        bytes.copy_from_slice(&self.data[offset..offset + 2]);
        u16::from_le_bytes(bytes)
    }

    pub fn put_u16(&mut self, offset: usize, value: u16) {
        self.bounds_check(offset, 2);
        self.data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    pub fn get_i32(&self, offset: usize) -> i32 {
        self.bounds_check(offset, 4);
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.data[offset..offset + 4]);
        i32::from_le_bytes(bytes)
    }

    pub fn put_i32(&mut self, offset: usize, value: i32) {
        self.bounds_check(offset, 4);
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    pub fn get_i64(&self, offset: usize) -> i64 {
        self.bounds_check(offset, 8);
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.data[offset..offset + 8]);
        i64::from_le_bytes(bytes)
    }

    pub fn put_i64(&mut self, offset: usize, value: i64) {
        self.bounds_check(offset, 8);
        self.data[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
    }
}
