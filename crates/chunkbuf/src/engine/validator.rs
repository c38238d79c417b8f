//! Input validation for buffer construction and binary operations.
//!
//! ## Purpose
//!
//! Centralizes every precondition check so constructors and operations
//! reject bad input with a structured error before any state is touched.
//!
//! ## Design notes
//!
//! * All checks are associated functions on [`Validator`]; there is no
//!   state to construct.
//! * Checks run before mutation. A failed check leaves the receiver
//!   untouched, which is what makes similarity failures atomic.
//!
//! ## Non-goals
//!
//! * Per-element checks (division by zero is detected inside the chunk
//!   loops, where the failing index is known).

// Internal dependencies
use crate::primitives::context::ChunkContext;
use crate::primitives::errors::BufferError;
use crate::primitives::shape::BufferLayout;

// ============================================================================
// Validator
// ============================================================================

/// Stateless collection of precondition checks.
pub struct Validator;

impl Validator {
    /// Reject a zero chunk capacity.
    pub fn validate_chunk_size(chunk_size: usize) -> Result<(), BufferError> {
        if chunk_size == 0 {
            return Err(BufferError::InvalidChunkSize(chunk_size));
        }
        Ok(())
    }

    /// Validate every tunable carried by a construction context.
    pub fn validate_context(ctx: &ChunkContext) -> Result<(), BufferError> {
        Self::validate_chunk_size(ctx.chunk_size)?;
        Ok(())
    }

    /// Require two buffers to share dimensionality, total size, and chunk
    /// capacity before an elementwise operation may pair them.
    pub fn validate_similarity(
        left: BufferLayout,
        right: BufferLayout,
    ) -> Result<(), BufferError> {
        if left != right {
            return Err(BufferError::NotSimilar { left, right });
        }
        Ok(())
    }

    /// Require seed data to match the size the shape implies.
    pub fn validate_seed_len(expected: usize, got: usize) -> Result<(), BufferError> {
        if expected != got {
            return Err(BufferError::SizeMismatch {
                left: expected,
                right: got,
            });
        }
        Ok(())
    }

    /// Reject a builder in which some parameter was set twice.
    pub fn validate_no_duplicates(
        duplicate: Option<&'static str>,
    ) -> Result<(), BufferError> {
        if let Some(parameter) = duplicate {
            return Err(BufferError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
