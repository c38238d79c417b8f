//! Tests for shapes and chunk partitioning.
//!
//! These tests verify the two-level addressing scheme:
//! - Ceiling-division chunk counts with no trailing empty chunk
//! - Per-chunk sizes (uniform prefix, short last chunk)
//! - Global index to (chunk, local) translation
//! - Grid position to linear index resolution, 1D-as-single-row included
//!
//! ## Test Organization
//!
//! 1. **Chunk Counts** - Partition arithmetic across edge cases
//! 2. **Chunk Sizes** - Per-chunk sizes and offsets
//! 3. **Index Translation** - Locate and its bounds failures
//! 4. **Shapes** - Extents, dimensionality, linear resolution
//! 5. **Layout Fingerprints** - Equality and display

use chunkbuf::prelude::*;

// ============================================================================
// Chunk Count Tests
// ============================================================================

/// Test ceiling-division chunk counts.
///
/// An exact multiple must not produce a trailing empty chunk.
#[test]
fn test_layout_chunk_count() {
    assert_eq!(ChunkLayout::new(10, 4).unwrap().chunk_count(), 3);
    assert_eq!(ChunkLayout::new(8, 4).unwrap().chunk_count(), 2);
    assert_eq!(ChunkLayout::new(1, 1024).unwrap().chunk_count(), 1);
    assert_eq!(ChunkLayout::new(0, 4).unwrap().chunk_count(), 0);
    assert_eq!(ChunkLayout::new(4, 4).unwrap().chunk_count(), 1);
}

/// Test that a zero chunk size is rejected.
#[test]
fn test_layout_rejects_zero_chunk_size() {
    assert_eq!(
        ChunkLayout::new(10, 0).unwrap_err(),
        BufferError::InvalidChunkSize(0)
    );
}

// ============================================================================
// Chunk Size Tests
// ============================================================================

/// Test per-chunk sizes: 10 elements in chunks of 4 partition as [4, 4, 2].
#[test]
fn test_layout_size_of_chunk() {
    let layout = ChunkLayout::new(10, 4).unwrap();

    assert_eq!(layout.size_of_chunk(0), 4);
    assert_eq!(layout.size_of_chunk(1), 4);
    assert_eq!(layout.size_of_chunk(2), 2);
    assert_eq!(layout.size_of_chunk(3), 0);
}

/// Test that the last chunk of an exact multiple is full.
#[test]
fn test_layout_exact_multiple_last_chunk_full() {
    let layout = ChunkLayout::new(12, 4).unwrap();
    assert_eq!(layout.size_of_chunk(2), 4);
    assert_eq!(layout.size_of_chunk(3), 0);
}

/// Test that per-chunk sizes always sum to the total.
#[test]
fn test_layout_sizes_sum_to_total() {
    for (total, chunk_size) in [(10, 4), (12, 4), (1, 7), (100, 9), (0, 3)] {
        let layout = ChunkLayout::new(total, chunk_size).unwrap();
        let sum: usize = (0..layout.chunk_count())
            .map(|k| layout.size_of_chunk(k))
            .sum();
        assert_eq!(sum, total);
    }
}

/// Test chunk offsets.
#[test]
fn test_layout_chunk_offset() {
    let layout = ChunkLayout::new(10, 4).unwrap();
    assert_eq!(layout.chunk_offset(0), 0);
    assert_eq!(layout.chunk_offset(1), 4);
    assert_eq!(layout.chunk_offset(2), 8);
}

// ============================================================================
// Index Translation Tests
// ============================================================================

/// Test global-to-local translation: index 9 of a 10/4 layout lands in
/// chunk 2 at local index 1.
#[test]
fn test_layout_locate() {
    let layout = ChunkLayout::new(10, 4).unwrap();

    assert_eq!(layout.locate(0).unwrap(), (0, 0));
    assert_eq!(layout.locate(3).unwrap(), (0, 3));
    assert_eq!(layout.locate(4).unwrap(), (1, 0));
    assert_eq!(layout.locate(9).unwrap(), (2, 1));
}

/// Test that locate rejects indices past the end.
#[test]
fn test_layout_locate_out_of_bounds() {
    let layout = ChunkLayout::new(10, 4).unwrap();
    assert_eq!(
        layout.locate(10).unwrap_err(),
        BufferError::IndexOutOfBounds { index: 10, len: 10 }
    );

    let empty = ChunkLayout::new(0, 4).unwrap();
    assert_eq!(
        empty.locate(0).unwrap_err(),
        BufferError::IndexOutOfBounds { index: 0, len: 0 }
    );
}

// ============================================================================
// Shape Tests
// ============================================================================

/// Test shape extents and dimensionality tags.
#[test]
fn test_shape_extents() {
    let line = OneDim { len: 10 };
    assert_eq!(line.total_size(), 10);
    assert_eq!(line.dimension(), OneDimensional);
    assert_eq!(line.width(), 10);
    assert_eq!(line.height(), 1);

    let grid = TwoDim {
        width: 4,
        height: 3,
    };
    assert_eq!(grid.total_size(), 12);
    assert_eq!(grid.dimension(), TwoDimensional);
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
}

/// Test row-major linear resolution: (row, col) maps to row * width + col.
#[test]
fn test_shape_linear_row_major() {
    let grid = TwoDim {
        width: 4,
        height: 3,
    };

    assert_eq!(grid.linear(0, 0).unwrap(), 0);
    assert_eq!(grid.linear(0, 3).unwrap(), 3);
    assert_eq!(grid.linear(1, 0).unwrap(), 4);
    assert_eq!(grid.linear(2, 1).unwrap(), 9);
}

/// Test that a 1D shape answers grid access as a single row.
#[test]
fn test_shape_one_dim_as_single_row() {
    let line = OneDim { len: 5 };

    assert_eq!(line.linear(0, 3).unwrap(), 3);
    assert_eq!(
        line.linear(1, 0).unwrap_err(),
        BufferError::PositionOutOfBounds {
            row: 1,
            col: 0,
            width: 5,
            height: 1,
        }
    );
}

/// Test that out-of-extent positions are rejected.
#[test]
fn test_shape_linear_out_of_bounds() {
    let grid = TwoDim {
        width: 4,
        height: 3,
    };

    assert!(grid.linear(0, 4).is_err());
    assert!(grid.linear(3, 0).is_err());
    assert!(grid.linear(3, 4).is_err());
}

/// Test shape and dimension display formats.
#[test]
fn test_shape_display() {
    assert_eq!(format!("{}", OneDim { len: 10 }), "[10]");
    assert_eq!(
        format!(
            "{}",
            TwoDim {
                width: 4,
                height: 3
            }
        ),
        "[4 x 3]"
    );
    assert_eq!(format!("{}", OneDimensional), "1D");
    assert_eq!(format!("{}", TwoDimensional), "2D");
}

// ============================================================================
// Layout Fingerprint Tests
// ============================================================================

/// Test fingerprint equality across each field.
#[test]
fn test_buffer_layout_equality() {
    let base = BufferLayout {
        dimension: OneDimensional,
        total_size: 10,
        chunk_size: 4,
    };

    assert_eq!(base, base);
    assert_ne!(
        base,
        BufferLayout {
            total_size: 12,
            ..base
        }
    );
    assert_ne!(base, BufferLayout { chunk_size: 5, ..base });
    assert_ne!(
        base,
        BufferLayout {
            dimension: TwoDimensional,
            ..base
        }
    );
}

/// Test the fingerprint display format.
#[test]
fn test_buffer_layout_display() {
    let layout = BufferLayout {
        dimension: OneDimensional,
        total_size: 10,
        chunk_size: 4,
    };
    assert_eq!(format!("{layout}"), "1D of 10 elements in chunks of 4");
}
