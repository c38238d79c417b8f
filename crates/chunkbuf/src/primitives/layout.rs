//! Chunk partitioning and index translation.
//!
//! ## Purpose
//!
//! This module centralizes the two-level addressing scheme: a buffer-wide
//! global index resolves to a `(chunk, local)` pair, and the partition of
//! `total_size` elements into `chunk_size`-element chunks is derived here
//! and nowhere else.
//!
//! ## Design notes
//!
//! * **Ceiling division**: `chunk_count = ceil(total_size / chunk_size)`,
//!   so an exact multiple produces no trailing empty chunk.
//! * **Uniform prefix**: every chunk holds exactly `chunk_size` elements
//!   except possibly the last, which holds the remainder.
//!
//! ## Key concepts
//!
//! * **Global index**: the logical buffer-wide position.
//! * **Local index**: the position within the owning chunk.
//! * **Translation**: `global / chunk_size` names the chunk,
//!   `global % chunk_size` the slot inside it.
//!
//! ## Invariants
//!
//! * `chunk_size >= 1`.
//! * The per-chunk sizes sum to `total_size`.
//! * Only the last chunk may be smaller than `chunk_size`.
//!
//! ## Non-goals
//!
//! * This module does not store elements or chunks.
//! * This module does not decide the execution policy.

// Internal dependencies
use crate::primitives::errors::BufferError;

// ============================================================================
// Chunk Layout
// ============================================================================

/// Partitioning of `total_size` elements into chunks of `chunk_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkLayout {
    /// Logical element count.
    total_size: usize,

    /// Elements per full chunk.
    chunk_size: usize,
}

impl ChunkLayout {
    /// Create a layout. Fails if `chunk_size` is zero.
    pub fn new(total_size: usize, chunk_size: usize) -> Result<Self, BufferError> {
        if chunk_size == 0 {
            return Err(BufferError::InvalidChunkSize(chunk_size));
        }
        Ok(Self {
            total_size,
            chunk_size,
        })
    }

    /// Logical element count.
    #[inline]
    pub const fn total_size(&self) -> usize {
        self.total_size
    }

    /// Elements per full chunk.
    #[inline]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks: `ceil(total_size / chunk_size)`.
    #[inline]
    pub const fn chunk_count(&self) -> usize {
        self.total_size.div_ceil(self.chunk_size)
    }

    /// Size of the `k`-th chunk: `min(chunk_size, total_size - k * chunk_size)`.
    ///
    /// Returns 0 for `k` past the last chunk.
    #[inline]
    pub const fn size_of_chunk(&self, k: usize) -> usize {
        let start = k * self.chunk_size;
        if start >= self.total_size {
            return 0;
        }
        let remaining = self.total_size - start;
        if remaining < self.chunk_size {
            remaining
        } else {
            self.chunk_size
        }
    }

    /// First global index covered by the `k`-th chunk.
    #[inline]
    pub const fn chunk_offset(&self, k: usize) -> usize {
        k * self.chunk_size
    }

    /// Resolve a global index to its `(chunk, local)` pair.
    #[inline]
    pub fn locate(&self, index: usize) -> Result<(usize, usize), BufferError> {
        if index >= self.total_size {
            return Err(BufferError::IndexOutOfBounds {
                index,
                len: self.total_size,
            });
        }
        Ok((index / self.chunk_size, index % self.chunk_size))
    }
}
