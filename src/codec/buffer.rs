use bytes::Bytes;
use tracing::debug;

use super::config::{EncoderConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_MIN_GROW_CAPACITY};

/// Contiguous output region with a write cursor.
///
/// Writers follow a two-phase protocol: [`reserve`](Self::reserve) guarantees a writable
/// window after the cursor, and [`commit`](Self::commit) advances the cursor over the bytes
/// actually written. Growing may move the allocation, but the committed prefix is always
/// copied across first.
#[derive(Debug, Clone)]
pub struct GrowableBuffer {
    // Always fully initialized; `data.len()` is the capacity.
    data: Vec<u8>,
    length: usize,
    reserved: usize,
    min_grow_capacity: usize,
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowableBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        GrowableBuffer {
            data: vec![0; capacity],
            length: 0,
            reserved: 0,
            min_grow_capacity: DEFAULT_MIN_GROW_CAPACITY,
        }
    }

    pub fn from_config(config: &EncoderConfig) -> Self {
        let mut buf = Self::with_capacity(config.initial_capacity);
        buf.min_grow_capacity = config.min_grow_capacity.max(1);
        buf
    }

    /// Bytes allocated.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes committed.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Free bytes after the cursor before the next grow.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.length
    }

    /// Ensures `n` free bytes follow the cursor and returns exactly that window.
    ///
    /// The window borrows the buffer, so it has to be fetched again after every call.
    pub fn reserve(&mut self, n: usize) -> &mut [u8] {
        if self.remaining() < n {
            self.grow(n);
        }
        self.reserved = n;
        let start = self.length;
        &mut self.data[start..start + n]
    }

    /// Advances the cursor over `n` bytes written into the last reserved window.
    ///
    /// # Panics
    ///
    /// If `n` exceeds what is left of the most recent reservation.
    pub fn commit(&mut self, n: usize) {
        assert!(
            n <= self.reserved,
            "commit of {} bytes exceeds reserved span of {} bytes",
            n,
            self.reserved
        );
        debug_assert!(self.length + n <= self.capacity());
        self.reserved -= n;
        self.length += n;
    }

    /// Appends `bytes` through a single reserve/commit pair.
    pub fn put(&mut self, bytes: &[u8]) {
        let n = bytes.len();
        self.reserve(n).copy_from_slice(bytes);
        self.commit(n);
    }

    /// Returns the cursor to zero and keeps the allocation.
    pub fn reset(&mut self) {
        self.length = 0;
        self.reserved = 0;
    }

    /// Moves the cursor back to `pos`. Positions past the cursor are ignored.
    pub fn truncate(&mut self, pos: usize) {
        if pos <= self.length {
            self.length = pos;
            self.reserved = 0;
        }
    }

    /// The committed bytes, in write order.
    pub fn snapshot(&self) -> &[u8] {
        &self.data[..self.length]
    }

    /// Hands the committed bytes over without copying.
    pub fn into_bytes(self) -> Bytes {
        let mut data = self.data;
        data.truncate(self.length);
        Bytes::from(data)
    }

    fn grow(&mut self, additional: usize) {
        let required = self
            .length
            .checked_add(additional)
            .expect("buffer capacity overflow");
        let old_capacity = self.capacity();
        let mut new_capacity = if old_capacity > 0 {
            old_capacity
        } else {
            self.min_grow_capacity
        };
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .expect("buffer capacity overflow");
        }

        let mut data = vec![0; new_capacity];
        data[..self.length].copy_from_slice(&self.data[..self.length]);
        self.data = data;

        debug!(
            old_capacity,
            new_capacity,
            copied = self.length,
            "grew buffer"
        );
    }
}

impl AsRef<[u8]> for GrowableBuffer {
    fn as_ref(&self) -> &[u8] {
        self.snapshot()
    }
}
