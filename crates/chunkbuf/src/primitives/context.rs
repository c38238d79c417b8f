//! Buffer construction options.
//!
//! ## Purpose
//!
//! This module defines the chunking context supplied at buffer construction:
//! the chunk size and the two parallelism flags that feed the one-shot
//! execution-policy decision.
//!
//! ## Design notes
//!
//! * **Plain data**: the context is a `Copy` options record; all validation
//!   happens in the engine's `Validator`.
//! * **Flag precedence**: `parallel` is ignored whenever `auto_parallel` is
//!   set; the policy is then derived from the chunk count.
//!
//! ## Invariants
//!
//! * `chunk_size >= 1` for any context accepted by a constructor.
//!
//! ## Non-goals
//!
//! * This module does not resolve the execution policy (see `engine::policy`).

// ============================================================================
// Constants
// ============================================================================

/// Default chunk size for contexts built via `Default`.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

// ============================================================================
// Chunk Context
// ============================================================================

/// Construction options for a buffer: chunk size and parallelism flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkContext {
    /// Elements per chunk.
    pub chunk_size: usize,

    /// Derive the execution policy from the chunk count.
    pub auto_parallel: bool,

    /// Explicit parallel flag, honored only when `auto_parallel` is off.
    pub parallel: bool,
}

impl ChunkContext {
    /// Create a context with explicit settings.
    #[inline]
    pub const fn new(chunk_size: usize, auto_parallel: bool, parallel: bool) -> Self {
        Self {
            chunk_size,
            auto_parallel,
            parallel,
        }
    }
}

impl Default for ChunkContext {
    /// 1024-element chunks with automatic parallelism.
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            auto_parallel: true,
            parallel: true,
        }
    }
}
