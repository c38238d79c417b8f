//! Buffer shapes, dimensionality, and layout fingerprints.
//!
//! ## Purpose
//!
//! This module describes the logical extent of a buffer: its dimensionality,
//! its 1D/2D shape, and the structural fingerprint that the similarity check
//! compares before any binary elementwise operation.
//!
//! ## Design notes
//!
//! * **Single-row 1D**: A 1D shape answers grid-style `(row, col)` access as
//!   a one-row grid of width `len`, so no separate error kind is needed for
//!   dimension confusion; out-of-row access is an ordinary bounds failure.
//! * **Row-major**: A 2D cell `(row, col)` maps to linear index
//!   `row * width + col`.
//!
//! ## Key concepts
//!
//! * **Shape**: the logical extent (`len`, or `width x height`).
//! * **BufferLayout**: the similarity fingerprint (dimension, total size,
//!   and chunk size). Equal layouts guarantee identical partitioning.
//!
//! ## Invariants
//!
//! * `total_size` of a 2D shape is exactly `width * height`.
//! * Layout equality is necessary and sufficient for similarity between
//!   buffers of the same element type.
//!
//! ## Non-goals
//!
//! * This module does not partition elements into chunks (see `layout`).
//! * This module does not store element data.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::BufferError;

// ============================================================================
// Dimension
// ============================================================================

/// Dimensionality of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Linear buffer addressed by a single index.
    OneDimensional,

    /// Row-major grid addressed by `(row, col)`.
    TwoDimensional,
}

impl Dimension {
    /// Get the name of the dimension.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Dimension::OneDimensional => "1D",
            Dimension::TwoDimensional => "2D",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Shape
// ============================================================================

/// Logical extent of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Linear run of `len` elements.
    OneDim {
        /// Element count.
        len: usize,
    },

    /// Row-major grid of `width * height` elements.
    TwoDim {
        /// Elements per row.
        width: usize,
        /// Number of rows.
        height: usize,
    },
}

impl Shape {
    /// Total number of logical elements.
    #[inline]
    pub const fn total_size(&self) -> usize {
        match self {
            Shape::OneDim { len } => *len,
            Shape::TwoDim { width, height } => *width * *height,
        }
    }

    /// Dimensionality tag.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Shape::OneDim { .. } => Dimension::OneDimensional,
            Shape::TwoDim { .. } => Dimension::TwoDimensional,
        }
    }

    /// Grid width. A 1D shape is a single row of `len` elements.
    #[inline]
    pub const fn width(&self) -> usize {
        match self {
            Shape::OneDim { len } => *len,
            Shape::TwoDim { width, .. } => *width,
        }
    }

    /// Grid height. A 1D shape is a single row.
    #[inline]
    pub const fn height(&self) -> usize {
        match self {
            Shape::OneDim { .. } => 1,
            Shape::TwoDim { height, .. } => *height,
        }
    }

    /// Resolve a `(row, col)` position to its linear index
    /// (`row * width + col`), bounds-checked against the grid extent.
    #[inline]
    pub fn linear(&self, row: usize, col: usize) -> Result<usize, BufferError> {
        let width = self.width();
        let height = self.height();
        if row >= height || col >= width {
            return Err(BufferError::PositionOutOfBounds {
                row,
                col,
                width,
                height,
            });
        }
        Ok(row * width + col)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Shape::OneDim { len } => write!(f, "[{len}]"),
            Shape::TwoDim { width, height } => write!(f, "[{width} x {height}]"),
        }
    }
}

// ============================================================================
// Buffer Layout
// ============================================================================

/// Structural fingerprint compared by the similarity check.
///
/// Two buffers of the same element type are similar iff their layouts are
/// equal: same dimensionality, same total size, same chunk size. Equal
/// layouts guarantee identical partitioning, so chunk `k` of one buffer
/// always pairs with chunk `k` of the other without re-deriving boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    /// Dimensionality of the buffer.
    pub dimension: Dimension,

    /// Logical element count.
    pub total_size: usize,

    /// Partitioning chunk size.
    pub chunk_size: usize,
}

impl Display for BufferLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} of {} elements in chunks of {}",
            self.dimension, self.total_size, self.chunk_size
        )
    }
}
