//! Execution policy: the one-shot parallel-vs-sequential decision.
//!
//! ## Purpose
//!
//! This module resolves, once per buffer at construction time, whether
//! fan-out operations run sequentially or on the thread pool. The decision
//! never changes for the buffer's lifetime and applies uniformly to every
//! fan-out: reductions, maps, elementwise binary ops, and windowing alike.
//!
//! ## Design notes
//!
//! * **Auto mode**: with `auto_parallel` set, the explicit `parallel` flag
//!   is ignored and the decision is `chunk_count >= PARALLEL_THRESHOLD`.
//! * **One-shot**: the resolved policy is stored on the buffer; no operation
//!   re-derives or overrides it per call.
//!
//! ## Invariants
//!
//! * Sequential fan-out processes chunks in strict ascending index order.
//! * Parallel fan-out gives no cross-chunk ordering guarantee.
//!
//! ## Non-goals
//!
//! * This module does not perform the fan-out (see `engine::executor`).

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::context::ChunkContext;

// ============================================================================
// Constants
// ============================================================================

/// Chunk-count threshold for automatic parallelism.
///
/// With `auto_parallel` set, a buffer runs parallel fan-out iff it has at
/// least this many chunks.
pub const PARALLEL_THRESHOLD: usize = 8192;

// ============================================================================
// Execution Policy
// ============================================================================

/// Parallel-vs-sequential fan-out decision, fixed at buffer construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionPolicy {
    /// Chunks are processed one after another, in ascending index order.
    Sequential,

    /// Chunks are processed concurrently on the rayon thread pool.
    Parallel,
}

impl ExecutionPolicy {
    /// Resolve the policy for a buffer of `chunk_count` chunks.
    pub fn resolve(chunk_count: usize, ctx: &ChunkContext) -> Self {
        let parallel = if ctx.auto_parallel {
            chunk_count >= PARALLEL_THRESHOLD
        } else {
            ctx.parallel
        };
        if parallel {
            ExecutionPolicy::Parallel
        } else {
            ExecutionPolicy::Sequential
        }
    }

    /// Get the name of the policy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ExecutionPolicy::Sequential => "sequential",
            ExecutionPolicy::Parallel => "parallel",
        }
    }

    /// Returns `true` for the parallel policy.
    #[inline]
    pub const fn is_parallel(&self) -> bool {
        matches!(self, ExecutionPolicy::Parallel)
    }
}

impl Display for ExecutionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}
