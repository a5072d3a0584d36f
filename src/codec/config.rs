/// Capacity of a freshly created buffer.
pub const DEFAULT_INITIAL_CAPACITY: usize = 128;
/// Capacity a zero-sized buffer jumps to on its first grow.
pub const DEFAULT_MIN_GROW_CAPACITY: usize = 4096;

/// Sizing knobs for an [`Encoder`](crate::codec::encode::Encoder) and its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Bytes allocated up front.
    pub initial_capacity: usize,
    /// Floor used when growing from an empty allocation.
    pub min_grow_capacity: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            min_grow_capacity: DEFAULT_MIN_GROW_CAPACITY,
        }
    }
}

impl EncoderConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// A floor of 0 is clamped to 1 so that doubling always makes progress.
    pub fn with_min_grow_capacity(mut self, min_grow_capacity: usize) -> Self {
        self.min_grow_capacity = min_grow_capacity.max(1);
        self
    }
}
