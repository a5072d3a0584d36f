// Encode module for the MessagePack-style wire format

pub mod basic;
pub mod complex;

use bytes::Bytes;

use crate::codec::buffer::GrowableBuffer;
use crate::codec::config::EncoderConfig;
use crate::codec::Encode;
use crate::internal::error::Result;

/// Saved cursor position of an [`Encoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Checkpoint {
    /// Byte offset the checkpoint was taken at.
    pub fn position(self) -> usize {
        self.0
    }
}

/// Single-pass encoder that owns its output buffer.
///
/// Every operation writes straight into the buffer; there is no intermediate
/// representation. A failed composite encode leaves whatever was written before the
/// failure in place; use [`encode_atomic`](Self::encode_atomic) for all-or-nothing
/// semantics.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: GrowableBuffer,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            buf: GrowableBuffer::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            buf: GrowableBuffer::with_capacity(capacity),
        }
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Encoder {
            buf: GrowableBuffer::from_config(&config),
        }
    }

    /// Encodes anything implementing [`Encode`].
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }

    /// Runs `f`, rolling the output back to where it started if `f` fails.
    pub fn encode_atomic<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let checkpoint = self.checkpoint();
        let result = f(self);
        if result.is_err() {
            self.rollback(checkpoint);
        }
        result
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.buf.len())
    }

    /// Discards everything written after `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.buf.truncate(checkpoint.0);
    }

    /// Clears the output and keeps the allocation for the next session.
    pub fn reset(&mut self) {
        self.buf.reset();
    }

    /// Encoded bytes so far.
    pub fn snapshot(&self) -> &[u8] {
        self.buf.snapshot()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn buffer(&self) -> &GrowableBuffer {
        &self.buf
    }

    /// Copies the encoded bytes out, leaving the encoder usable.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.snapshot())
    }

    /// Consumes the encoder and returns its output without copying.
    pub fn finish(self) -> Bytes {
        self.buf.into_bytes()
    }
}
