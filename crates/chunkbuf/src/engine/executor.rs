//! Chunk fan-out under a fixed execution policy.
//!
//! ## Purpose
//!
//! Every buffer operation that touches all chunks routes through these
//! helpers, so the policy resolved at construction is honored uniformly
//! rather than re-decided per call site.
//!
//! ## Design notes
//!
//! * **Sequential path**: plain iterators in strict ascending chunk order;
//!   the fail-fast divide contract and shift semantics depend on it.
//! * **Parallel path**: rayon `par_iter` over chunks. Chunks own disjoint
//!   index ranges, so concurrent mutation of distinct chunks is race-free
//!   by construction.
//! * **Reductions**: each chunk reduces internally (always sequential), then
//!   the per-chunk results combine under the same policy.
//! * **Barrier semantics**: a parallel fan-out blocks the caller until every
//!   chunk task completes; there is no cancellation.
//!
//! ## Invariants
//!
//! * The policy argument is the buffer's stored policy, never a fresh
//!   decision.
//! * Fallible fan-out surfaces the first error; in parallel mode "first" is
//!   whichever task loses the race, with no cross-chunk ordering guarantee.
//!
//! ## Non-goals
//!
//! * This module does not decide the policy (see `engine::policy`).
//! * This module does not validate shapes (see `engine::validator`).

// External dependencies
use rayon::prelude::*;

// Internal dependencies
use crate::engine::policy::ExecutionPolicy;
use crate::primitives::chunk::Chunk;
use crate::primitives::element::Element;
use crate::primitives::errors::BufferError;

// ============================================================================
// In-Place Fan-Out
// ============================================================================

/// Run an infallible `op` over every chunk, in place.
pub fn for_each<T, F>(policy: ExecutionPolicy, chunks: &mut [Chunk<T>], op: F)
where
    T: Element,
    F: Fn(&mut Chunk<T>) + Send + Sync,
{
    if policy.is_parallel() {
        chunks.par_iter_mut().for_each(|chunk| op(chunk));
    } else {
        chunks.iter_mut().for_each(op);
    }
}

/// Run a fallible `op` over every chunk, in place, surfacing the first error.
pub fn try_for_each<T, F>(
    policy: ExecutionPolicy,
    chunks: &mut [Chunk<T>],
    op: F,
) -> Result<(), BufferError>
where
    T: Element,
    F: Fn(&mut Chunk<T>) -> Result<(), BufferError> + Send + Sync,
{
    if policy.is_parallel() {
        chunks.par_iter_mut().try_for_each(|chunk| op(chunk))
    } else {
        chunks.iter_mut().try_for_each(op)
    }
}

/// Run a fallible `op` over every index-aligned `(chunk, other)` pair.
///
/// Callers guarantee equal chunk counts (similar buffers partition
/// identically); extra chunks on either side are not visited.
pub fn try_for_each_zip<T, F>(
    policy: ExecutionPolicy,
    chunks: &mut [Chunk<T>],
    others: &[Chunk<T>],
    op: F,
) -> Result<(), BufferError>
where
    T: Element,
    F: Fn(&mut Chunk<T>, &Chunk<T>) -> Result<(), BufferError> + Send + Sync,
{
    if policy.is_parallel() {
        chunks
            .par_iter_mut()
            .zip(others.par_iter())
            .try_for_each(|(chunk, other)| op(chunk, other))
    } else {
        chunks
            .iter_mut()
            .zip(others.iter())
            .try_for_each(|(chunk, other)| op(chunk, other))
    }
}

// ============================================================================
// Reductions
// ============================================================================

/// Reduce every chunk with an infallible `map`, combining the per-chunk
/// results with `combine`. Returns `None` for an empty chunk list.
pub fn reduce<T, R, M, C>(
    policy: ExecutionPolicy,
    chunks: &[Chunk<T>],
    map: M,
    combine: C,
) -> Option<R>
where
    T: Element,
    R: Send,
    M: Fn(&Chunk<T>) -> R + Send + Sync,
    C: Fn(R, R) -> R + Send + Sync,
{
    if policy.is_parallel() {
        chunks.par_iter().map(|chunk| map(chunk)).reduce_with(combine)
    } else {
        chunks.iter().map(map).reduce(combine)
    }
}

/// Reduce every chunk with a fallible `map`, combining the per-chunk
/// results with `combine`. Returns `Ok(None)` for an empty chunk list.
pub fn try_reduce<T, R, M, C>(
    policy: ExecutionPolicy,
    chunks: &[Chunk<T>],
    map: M,
    combine: C,
) -> Result<Option<R>, BufferError>
where
    T: Element,
    R: Send,
    M: Fn(&Chunk<T>) -> Result<R, BufferError> + Send + Sync,
    C: Fn(R, R) -> R + Send + Sync,
{
    if policy.is_parallel() {
        chunks
            .par_iter()
            .map(|chunk| map(chunk))
            .try_reduce_with(|a, b| Ok(combine(a, b)))
            .transpose()
    } else {
        let mut acc: Option<R> = None;
        for chunk in chunks {
            let value = map(chunk)?;
            acc = Some(match acc {
                Some(prev) => combine(prev, value),
                None => value,
            });
        }
        Ok(acc)
    }
}
