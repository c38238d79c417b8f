//! Tests for applying window functions to buffers.
//!
//! These tests verify the windowing operation end to end:
//! - Global-index weighting across chunk boundaries
//! - The identity window and unsupported element types
//! - 1D and 2D application
//!
//! ## Test Organization
//!
//! 1. **Weight Application** - Shaped windows on 1D buffers
//! 2. **Chunk Independence** - Identical results for any chunking
//! 3. **Identity and Rejection** - Rectangular, integer buffers
//! 4. **2D Application** - Flat index order over grids

use approx::assert_relative_eq;

use chunkbuf::prelude::*;

fn seq_ctx(chunk_size: usize) -> ChunkContext {
    ChunkContext::new(chunk_size, false, false)
}

// ============================================================================
// Weight Application Tests
// ============================================================================

/// Test Bartlett on five ones: [0, 0.5, 1, 0.5, 0], spanning three chunks.
#[test]
fn test_bartlett_five_ones() {
    let mut buf = DataBuffer::from_vec_with(vec![1.0_f32; 5], &seq_ctx(2)).unwrap();
    buf.window(Bartlett).unwrap();

    let values = buf.to_vec();
    assert_eq!(values[0], 0.0);
    assert_relative_eq!(values[1], 0.5);
    assert_eq!(values[2], 1.0);
    assert_relative_eq!(values[3], 0.5);
    assert_eq!(values[4], 0.0);
}

/// Test that windowing multiplies existing data rather than replacing it.
#[test]
fn test_bartlett_scales_existing_data() {
    let mut buf = DataBuffer::from_vec_with(vec![2.0_f64; 5], &seq_ctx(3)).unwrap();
    buf.window(Bartlett).unwrap();

    let values = buf.to_vec();
    assert_eq!(values[0], 0.0);
    assert_relative_eq!(values[1], 1.0);
    assert_eq!(values[2], 2.0);
    assert_relative_eq!(values[3], 1.0);
    assert_eq!(values[4], 0.0);
}

/// Test Hanning on three ones: [0, 1, 0].
#[test]
fn test_hanning_three_ones() {
    let mut buf = DataBuffer::from_vec(vec![1.0_f64; 3]).unwrap();
    buf.window(Hanning).unwrap();

    let values = buf.to_vec();
    assert_relative_eq!(values[0], 0.0);
    assert_relative_eq!(values[1], 1.0);
    assert_relative_eq!(values[2], 0.0, epsilon = 1e-12);
}

/// Test that a single-element buffer passes through any window unchanged.
#[test]
fn test_window_single_element() {
    for window in [Rectangular, Bartlett, Hanning] {
        let mut buf = DataBuffer::from_vec(vec![3.5_f64]).unwrap();
        buf.window(window).unwrap();
        assert_eq!(buf.to_vec(), vec![3.5]);
    }
}

/// Test that windowing a zero-size buffer succeeds as a no-op.
#[test]
fn test_window_empty_buffer() {
    let mut buf = DataBuffer::<f64>::one_dim(0).unwrap();
    buf.window(Hanning).unwrap();
    assert!(buf.to_vec().is_empty());
}

// ============================================================================
// Chunk Independence Tests
// ============================================================================

/// Test that the applied weights depend only on the global index: a finely
/// chunked buffer matches a single-chunk one.
#[test]
fn test_window_weights_independent_of_chunking() {
    let n = 9;

    let mut fine = DataBuffer::from_vec_with(vec![1.0_f64; n], &seq_ctx(2)).unwrap();
    let mut coarse = DataBuffer::from_vec_with(vec![1.0_f64; n], &seq_ctx(1024)).unwrap();

    fine.window(Hanning).unwrap();
    coarse.window(Hanning).unwrap();

    for (a, b) in fine.to_vec().into_iter().zip(coarse.to_vec()) {
        assert_relative_eq!(a, b);
    }
}

// ============================================================================
// Identity and Rejection Tests
// ============================================================================

/// Test that the rectangular window changes nothing for any element type.
#[test]
fn test_rectangular_identity() {
    let mut floats = DataBuffer::from_vec_with(vec![1.5_f64, -2.5, 3.5], &seq_ctx(2)).unwrap();
    floats.window(Rectangular).unwrap();
    assert_eq!(floats.to_vec(), vec![1.5, -2.5, 3.5]);

    let mut ints = DataBuffer::from_vec_with(vec![1_i32, -2, 3], &seq_ctx(2)).unwrap();
    ints.window(Rectangular).unwrap();
    assert_eq!(ints.to_vec(), vec![1, -2, 3]);
}

/// Test that shaped windows reject integer buffers before any mutation.
#[test]
fn test_shaped_window_rejects_integers() {
    let mut buf = DataBuffer::from_vec_with(vec![4_i32, 5, 6], &seq_ctx(2)).unwrap();

    let err = buf.window(Bartlett).unwrap_err();
    assert_eq!(
        err,
        BufferError::UnsupportedWindow {
            window: "Bartlett",
            element: "i32",
        }
    );
    assert_eq!(buf.to_vec(), vec![4, 5, 6]);

    assert!(buf.window(Hanning).is_err());
    assert_eq!(buf.to_vec(), vec![4, 5, 6]);
}

/// Test the context-taking form against the plain one.
#[test]
fn test_window_with_explicit_context() {
    let mut plain = DataBuffer::from_vec(vec![1.0_f64; 7]).unwrap();
    let mut explicit = plain.copy();

    plain.window(Bartlett).unwrap();
    explicit.window_with(Bartlett, &WindowContext::new()).unwrap();

    assert_eq!(plain, explicit);
}

// ============================================================================
// 2D Application Tests
// ============================================================================

/// Test that a 2D buffer is windowed over its flat index range in row-major
/// order, not per row.
#[test]
fn test_window_two_dim_flat_indexing() {
    // 3 x 2 grid: global indices 0..6, half span 2.5.
    let mut buf = DataBuffer::from_vec_2d_with(vec![1.0_f64; 6], 3, 2, &seq_ctx(2)).unwrap();
    buf.window(Bartlett).unwrap();

    let expected = [0.0, 0.4, 0.8, 0.8, 0.4, 0.0];
    for (i, want) in expected.into_iter().enumerate() {
        assert_relative_eq!(buf.get(i).unwrap(), want, epsilon = 1e-12);
    }

    // The same weights observed through grid addressing.
    assert_relative_eq!(buf.get_at(1, 0).unwrap(), 0.8, epsilon = 1e-12);
    assert_relative_eq!(buf.get_at(1, 2).unwrap(), 0.0, epsilon = 1e-12);
}
