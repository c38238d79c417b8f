#![cfg(feature = "dev")]
//! Tests for the chunk fan-out helpers and the validator.
//!
//! These tests drive the executor directly, without a buffer in front:
//! - Sequential fan-out runs in strict ascending chunk order
//! - Fallible fan-out stops at the first error sequentially
//! - Zipped fan-out pairs chunks by position
//! - Reductions agree across policies and handle empty inputs
//! - Validator checks fire with the right error payloads
//!
//! ## Test Organization
//!
//! 1. **In-Place Fan-Out** - for_each, try_for_each, try_for_each_zip
//! 2. **Reductions** - reduce, try_reduce
//! 3. **Validation** - All validator checks

use std::sync::Mutex;

use chunkbuf::internals::engine::executor;
use chunkbuf::internals::engine::policy::ExecutionPolicy;
use chunkbuf::internals::engine::validator::Validator;
use chunkbuf::internals::primitives::chunk::Chunk;
use chunkbuf::internals::primitives::context::ChunkContext;
use chunkbuf::internals::primitives::errors::BufferError;
use chunkbuf::internals::primitives::shape::{BufferLayout, Dimension};

fn zero_chunks(count: usize, size: usize) -> Vec<Chunk<f64>> {
    (0..count).map(|k| Chunk::new(k, size).unwrap()).collect()
}

// ============================================================================
// In-Place Fan-Out Tests
// ============================================================================

/// Test that sequential fan-out visits chunks in strict ascending order.
#[test]
fn test_for_each_sequential_order() {
    let mut chunks = zero_chunks(5, 3);
    let visited = Mutex::new(Vec::new());

    executor::for_each(ExecutionPolicy::Sequential, &mut chunks, |chunk| {
        visited.lock().unwrap().push(chunk.index());
        chunk.fill(1.0);
    });

    assert_eq!(visited.into_inner().unwrap(), vec![0, 1, 2, 3, 4]);
    assert!(chunks
        .iter()
        .all(|c| c.as_slice().iter().all(|&v| v == 1.0)));
}

/// Test that parallel fan-out reaches every chunk.
#[test]
fn test_for_each_parallel_reaches_all() {
    let mut chunks = zero_chunks(8, 4);

    executor::for_each(ExecutionPolicy::Parallel, &mut chunks, |chunk| {
        chunk.fill(chunk.index() as f64)
    });

    for (k, chunk) in chunks.iter().enumerate() {
        assert!(chunk.as_slice().iter().all(|&v| v == k as f64));
    }
}

/// Test that sequential fallible fan-out stops at the first error.
#[test]
fn test_try_for_each_sequential_stops_at_error() {
    let mut chunks = zero_chunks(4, 2);

    let err = executor::try_for_each(ExecutionPolicy::Sequential, &mut chunks, |chunk| {
        if chunk.index() == 2 {
            return Err(BufferError::EmptyData);
        }
        chunk.fill(1.0);
        Ok(())
    })
    .unwrap_err();

    assert_eq!(err, BufferError::EmptyData);
    assert!(chunks[0].as_slice().iter().all(|&v| v == 1.0));
    assert!(chunks[1].as_slice().iter().all(|&v| v == 1.0));
    assert!(chunks[2].as_slice().iter().all(|&v| v == 0.0));
    assert!(chunks[3].as_slice().iter().all(|&v| v == 0.0));
}

/// Test that zipped fan-out pairs the k-th chunk with the k-th operand.
#[test]
fn test_try_for_each_zip_pairs_by_position() {
    let mut lhs = zero_chunks(3, 2);
    let rhs: Vec<Chunk<f64>> = (0..3)
        .map(|k| Chunk::from_vec(k, vec![(k + 1) as f64; 2]).unwrap())
        .collect();

    executor::try_for_each_zip(ExecutionPolicy::Sequential, &mut lhs, &rhs, |chunk, other| {
        chunk.add_chunk(other)
    })
    .unwrap();

    assert_eq!(lhs[0].as_slice(), &[1.0, 1.0]);
    assert_eq!(lhs[1].as_slice(), &[2.0, 2.0]);
    assert_eq!(lhs[2].as_slice(), &[3.0, 3.0]);
}

/// Test zipped fan-out under the parallel policy.
#[test]
fn test_try_for_each_zip_parallel() {
    let mut lhs = zero_chunks(6, 3);
    let rhs: Vec<Chunk<f64>> = (0..6)
        .map(|k| Chunk::from_vec(k, vec![k as f64; 3]).unwrap())
        .collect();

    executor::try_for_each_zip(ExecutionPolicy::Parallel, &mut lhs, &rhs, |chunk, other| {
        chunk.add_chunk(other)
    })
    .unwrap();

    for (k, chunk) in lhs.iter().enumerate() {
        assert!(chunk.as_slice().iter().all(|&v| v == k as f64));
    }
}

// ============================================================================
// Reduction Tests
// ============================================================================

/// Test that infallible reduction agrees across policies.
#[test]
fn test_reduce_policy_agreement() {
    let chunks: Vec<Chunk<f64>> = (0..4)
        .map(|k| Chunk::from_vec(k, vec![1.0, 2.0]).unwrap())
        .collect();

    for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
        let sum = executor::reduce(policy, &chunks, |c| c.sum(), |a, b| a + b);
        assert_eq!(sum, Some(12.0));
    }
}

/// Test that reducing no chunks yields None.
#[test]
fn test_reduce_empty_is_none() {
    let empty: Vec<Chunk<f64>> = Vec::new();
    let result = executor::reduce(ExecutionPolicy::Sequential, &empty, |c| c.sum(), |a, b| a + b);
    assert_eq!(result, None);
}

/// Test fallible reduction success across policies.
#[test]
fn test_try_reduce_policy_agreement() {
    let chunks: Vec<Chunk<f64>> = (0..4)
        .map(|k| Chunk::from_vec(k, vec![k as f64 + 1.0, 8.0]).unwrap())
        .collect();

    for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
        let min = executor::try_reduce(
            policy,
            &chunks,
            |c| c.min(),
            |a, b| if b < a { b } else { a },
        )
        .unwrap();
        assert_eq!(min, Some(1.0));
    }
}

/// Test that a failing map aborts the reduction.
#[test]
fn test_try_reduce_propagates_error() {
    let chunks: Vec<Chunk<f64>> = (0..3)
        .map(|k| Chunk::from_vec(k, vec![1.0]).unwrap())
        .collect();

    let err = executor::try_reduce(
        ExecutionPolicy::Sequential,
        &chunks,
        |c| {
            if c.index() == 1 {
                Err(BufferError::EmptyData)
            } else {
                Ok(c.sum())
            }
        },
        |a, b| a + b,
    )
    .unwrap_err();

    assert_eq!(err, BufferError::EmptyData);
}

/// Test that fallible reduction over no chunks yields Ok(None).
#[test]
fn test_try_reduce_empty_is_ok_none() {
    let empty: Vec<Chunk<f64>> = Vec::new();
    let result =
        executor::try_reduce(ExecutionPolicy::Parallel, &empty, |c| c.min(), |a, b| {
            if b < a {
                b
            } else {
                a
            }
        })
        .unwrap();
    assert_eq!(result, None);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test chunk-size and context validation.
#[test]
fn test_validator_chunk_size_and_context() {
    assert!(Validator::validate_chunk_size(1).is_ok());
    assert_eq!(
        Validator::validate_chunk_size(0).unwrap_err(),
        BufferError::InvalidChunkSize(0)
    );

    assert!(Validator::validate_context(&ChunkContext::default()).is_ok());
    assert!(Validator::validate_context(&ChunkContext::new(0, true, true)).is_err());
}

/// Test that similarity validation carries both layouts in its error.
#[test]
fn test_validator_similarity() {
    let left = BufferLayout {
        dimension: Dimension::OneDimensional,
        total_size: 10,
        chunk_size: 4,
    };
    let right = BufferLayout {
        total_size: 12,
        ..left
    };

    assert!(Validator::validate_similarity(left, left).is_ok());
    assert_eq!(
        Validator::validate_similarity(left, right).unwrap_err(),
        BufferError::NotSimilar { left, right }
    );
}

/// Test seed-length validation.
#[test]
fn test_validator_seed_len() {
    assert!(Validator::validate_seed_len(12, 12).is_ok());
    assert_eq!(
        Validator::validate_seed_len(12, 11).unwrap_err(),
        BufferError::SizeMismatch {
            left: 12,
            right: 11
        }
    );
}

/// Test duplicate-parameter validation.
#[test]
fn test_validator_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("chunk_size")).unwrap_err(),
        BufferError::DuplicateParameter {
            parameter: "chunk_size"
        }
    );
}
