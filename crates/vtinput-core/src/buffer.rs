#![forbid(unsafe_code)]

//! Byte accumulation for partial escape sequences.

/// Append-at-end, inspect-from-head, drop-prefix byte scratch.
///
/// The tokenizer re-inspects the whole unread suffix on every step, so the
/// buffer keeps bytes contiguous and tracks a head index instead of shifting
/// on every consume. The dead prefix is compacted away once it dominates the
/// allocation, keeping prefix drops amortised O(1). The footprint is bounded
/// by the longest outstanding partial sequence.
#[derive(Debug, Default)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    head: usize,
}

/// Compact once the dead prefix exceeds this many bytes and the majority of
/// the allocation.
const COMPACT_THRESHOLD: usize = 4096;

impl ByteBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(64),
            head: 0,
        }
    }

    /// Append a chunk at the end.
    pub fn extend(&mut self, chunk: &[u8]) {
        if self.head >= COMPACT_THRESHOLD && self.head * 2 >= self.bytes.len() {
            self.bytes.drain(..self.head);
            self.head = 0;
        }
        self.bytes.extend_from_slice(chunk);
    }

    /// The unread suffix.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[self.head..]
    }

    /// Drop `n` bytes from the head.
    ///
    /// `n` must not exceed [`len`](Self::len); the tokenizer only consumes
    /// lengths its sub-parsers measured against the same suffix.
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.len());
        self.head += n;
        if self.head >= self.bytes.len() {
            self.bytes.clear();
            self.head = 0;
        }
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() - self.head
    }

    /// True when no unread bytes remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.bytes.len()
    }
}
