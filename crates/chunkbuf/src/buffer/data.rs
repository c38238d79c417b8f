//! Chunked numeric buffer: construction, addressing, and introspection.
//!
//! ## Purpose
//!
//! This module implements `DataBuffer<T>`, the crate's central type: a
//! fixed-size 1D or 2D collection of numeric elements, partitioned into
//! fixed-size chunks and bound to an execution policy at construction.
//!
//! ## Design notes
//!
//! * **One generic type**: 1D and 2D buffers are the same type with a
//!   different [`Shape`]; element storage, chunking, and every operation
//!   are shared. The element type is a compile-time parameter, so mixing
//!   element types in a binary operation is a type error.
//! * **Policy at birth**: the parallel-vs-sequential decision is made once,
//!   in the constructor, and stored. No operation re-decides it.
//! * **Two-level addressing**: all element access goes through
//!   [`ChunkLayout::locate`]; the buffer itself never re-derives chunk
//!   boundaries.
//!
//! ## Key concepts
//!
//! * **Similarity**: two buffers may be combined elementwise iff their
//!   [`BufferLayout`] fingerprints are equal.
//! * **Seeding**: `from_vec` constructors move the seed data into the
//!   chunks without copying elements one at a time.
//!
//! ## Invariants
//!
//! * Chunk `k` holds exactly `layout.size_of_chunk(k)` elements.
//! * `total_size == 0` produces a buffer with zero chunks.
//! * `copy()` shares no storage with the source.
//!
//! ## Non-goals
//!
//! * This module does not implement arithmetic, reductions, or windowing
//!   (see `buffer::ops`).

// External dependencies
use core::fmt::{self, Display, Formatter};

// Internal dependencies
use crate::engine::policy::ExecutionPolicy;
use crate::engine::validator::Validator;
use crate::primitives::chunk::Chunk;
use crate::primitives::context::ChunkContext;
use crate::primitives::element::{Element, ElementKind};
use crate::primitives::errors::BufferError;
use crate::primitives::layout::ChunkLayout;
use crate::primitives::shape::{BufferLayout, Dimension, Shape};

// ============================================================================
// Display Limits
// ============================================================================

/// Maximum rows rendered by `Display` before elision.
const DISPLAY_MAX_ROWS: usize = 8;

/// Maximum columns rendered by `Display` before elision.
const DISPLAY_MAX_COLS: usize = 16;

// ============================================================================
// Data Buffer
// ============================================================================

/// Fixed-size 1D/2D numeric buffer, partitioned into fixed-size chunks.
///
/// The size, shape, chunking, and execution policy are all fixed at
/// construction; only the element values change afterwards. Elementwise
/// operations live in `buffer::ops` and fan out across the chunks under
/// the stored policy.
#[derive(Debug, Clone)]
pub struct DataBuffer<T> {
    /// Logical extent (1D length or 2D width x height).
    shape: Shape,

    /// Partitioning of the logical index range into chunks.
    layout: ChunkLayout,

    /// Fan-out policy, resolved once at construction.
    policy: ExecutionPolicy,

    /// Element storage, one chunk per partition cell.
    chunks: Vec<Chunk<T>>,
}

impl<T: Element> DataBuffer<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a zero-filled 1D buffer of `len` elements with default options.
    pub fn one_dim(len: usize) -> Result<Self, BufferError> {
        Self::one_dim_with(len, &ChunkContext::default())
    }

    /// Create a zero-filled 1D buffer of `len` elements.
    pub fn one_dim_with(len: usize, ctx: &ChunkContext) -> Result<Self, BufferError> {
        Self::with_shape(Shape::OneDim { len }, ctx)
    }

    /// Create a zero-filled 2D buffer of `width * height` elements with
    /// default options.
    pub fn two_dim(width: usize, height: usize) -> Result<Self, BufferError> {
        Self::two_dim_with(width, height, &ChunkContext::default())
    }

    /// Create a zero-filled 2D buffer of `width * height` elements.
    pub fn two_dim_with(
        width: usize,
        height: usize,
        ctx: &ChunkContext,
    ) -> Result<Self, BufferError> {
        Self::with_shape(Shape::TwoDim { width, height }, ctx)
    }

    /// Create a 1D buffer seeded with `data`, with default options.
    pub fn from_vec(data: Vec<T>) -> Result<Self, BufferError> {
        Self::from_vec_with(data, &ChunkContext::default())
    }

    /// Create a 1D buffer seeded with `data`.
    pub fn from_vec_with(data: Vec<T>, ctx: &ChunkContext) -> Result<Self, BufferError> {
        let shape = Shape::OneDim { len: data.len() };
        Self::with_shape_seeded(shape, ctx, data)
    }

    /// Create a 2D buffer seeded with row-major `data`, with default options.
    ///
    /// Fails with `SizeMismatch` when `data.len() != width * height`.
    pub fn from_vec_2d(data: Vec<T>, width: usize, height: usize) -> Result<Self, BufferError> {
        Self::from_vec_2d_with(data, width, height, &ChunkContext::default())
    }

    /// Create a 2D buffer seeded with row-major `data`.
    ///
    /// Fails with `SizeMismatch` when `data.len() != width * height`.
    pub fn from_vec_2d_with(
        data: Vec<T>,
        width: usize,
        height: usize,
        ctx: &ChunkContext,
    ) -> Result<Self, BufferError> {
        Self::with_shape_seeded(Shape::TwoDim { width, height }, ctx, data)
    }

    /// Zero-filled construction for any shape.
    fn with_shape(shape: Shape, ctx: &ChunkContext) -> Result<Self, BufferError> {
        Validator::validate_context(ctx)?;
        let layout = ChunkLayout::new(shape.total_size(), ctx.chunk_size)?;
        let policy = ExecutionPolicy::resolve(layout.chunk_count(), ctx);

        let mut chunks = Vec::with_capacity(layout.chunk_count());
        for k in 0..layout.chunk_count() {
            chunks.push(Chunk::new(k, layout.size_of_chunk(k))?);
        }

        Ok(Self {
            shape,
            layout,
            policy,
            chunks,
        })
    }

    /// Seeded construction for any shape. The seed is moved, then split at
    /// chunk boundaries without per-element copying.
    fn with_shape_seeded(
        shape: Shape,
        ctx: &ChunkContext,
        data: Vec<T>,
    ) -> Result<Self, BufferError> {
        Validator::validate_context(ctx)?;
        Validator::validate_seed_len(shape.total_size(), data.len())?;
        let layout = ChunkLayout::new(shape.total_size(), ctx.chunk_size)?;
        let policy = ExecutionPolicy::resolve(layout.chunk_count(), ctx);

        let mut chunks = Vec::with_capacity(layout.chunk_count());
        let mut rest = data;
        for k in 0..layout.chunk_count() {
            let tail = rest.split_off(layout.size_of_chunk(k));
            chunks.push(Chunk::from_vec(k, rest)?);
            rest = tail;
        }

        Ok(Self {
            shape,
            layout,
            policy,
            chunks,
        })
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Logical extent of the buffer.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Dimensionality tag.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.shape.dimension()
    }

    /// Logical element count.
    #[inline]
    pub fn total_size(&self) -> usize {
        self.layout.total_size()
    }

    /// Elements per full chunk.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.layout.chunk_size()
    }

    /// Number of chunks.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.layout.chunk_count()
    }

    /// Partitioning of the logical index range.
    #[inline]
    pub fn chunk_layout(&self) -> ChunkLayout {
        self.layout
    }

    /// Runtime tag of the element type.
    #[inline]
    pub fn element_kind(&self) -> ElementKind {
        T::KIND
    }

    /// Fan-out policy resolved at construction.
    #[inline]
    pub fn policy(&self) -> ExecutionPolicy {
        self.policy
    }

    /// Whether fan-out operations run on the thread pool.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.policy.is_parallel()
    }

    /// The chunks, in ascending index order.
    #[inline]
    pub fn chunks(&self) -> &[Chunk<T>] {
        &self.chunks
    }

    /// Mutable chunk access for the operation layer.
    #[inline]
    pub(crate) fn chunks_mut(&mut self) -> &mut [Chunk<T>] {
        &mut self.chunks
    }

    // ========================================================================
    // Similarity
    // ========================================================================

    /// Structural fingerprint: dimensionality, total size, chunk size.
    #[inline]
    pub fn layout(&self) -> BufferLayout {
        BufferLayout {
            dimension: self.shape.dimension(),
            total_size: self.layout.total_size(),
            chunk_size: self.layout.chunk_size(),
        }
    }

    /// Whether `other` may be combined with this buffer elementwise.
    ///
    /// True iff the layout fingerprints are equal. Equal fingerprints
    /// guarantee identical partitioning, so chunk `k` pairs with chunk `k`.
    #[inline]
    pub fn is_similar(&self, other: &DataBuffer<T>) -> bool {
        self.layout() == other.layout()
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Read the element at a global index.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, BufferError> {
        let (chunk, local) = self.layout.locate(index)?;
        self.chunks[chunk].get(local)
    }

    /// Write the element at a global index.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        let (chunk, local) = self.layout.locate(index)?;
        self.chunks[chunk].set(local, value)
    }

    /// Read the element at a `(row, col)` grid position.
    ///
    /// A 1D buffer answers as a single-row grid: `get_at(0, i)` reads
    /// element `i`.
    #[inline]
    pub fn get_at(&self, row: usize, col: usize) -> Result<T, BufferError> {
        let index = self.shape.linear(row, col)?;
        self.get(index)
    }

    /// Write the element at a `(row, col)` grid position.
    #[inline]
    pub fn set_at(&mut self, row: usize, col: usize, value: T) -> Result<(), BufferError> {
        let index = self.shape.linear(row, col)?;
        self.set(index, value)
    }

    // ========================================================================
    // Copy and Export
    // ========================================================================

    /// Deep copy: same shape, chunking, policy, and element values, with no
    /// storage shared with the source.
    pub fn copy(&self) -> DataBuffer<T> {
        self.clone()
    }

    /// All elements in global index order, flattened across chunks.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.total_size());
        for chunk in &self.chunks {
            out.extend_from_slice(chunk.as_slice());
        }
        out
    }
}

// ============================================================================
// Equality
// ============================================================================

/// Equality compares shape, partitioning, and element data. The execution
/// policy is not part of the comparison: a sequential buffer and a parallel
/// buffer holding the same elements are equal.
impl<T: Element> PartialEq for DataBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.layout == other.layout && self.chunks == other.chunks
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Element> Display for DataBuffer<T> {
    /// Header line plus one bracketed line per row, eliding large extents.
    ///
    /// A 1D buffer prints as a single row.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DataBuffer<{}> {} ({} chunks of {}, {})",
            T::KIND,
            self.shape,
            self.layout.chunk_count(),
            self.layout.chunk_size(),
            self.policy
        )?;

        let rows = self.shape.height();
        let cols = self.shape.width();
        for row in 0..rows.min(DISPLAY_MAX_ROWS) {
            write!(f, "\n[")?;
            for col in 0..cols.min(DISPLAY_MAX_COLS) {
                if col > 0 {
                    write!(f, ", ")?;
                }
                if let Ok(value) = self.get_at(row, col) {
                    write!(f, "{value}")?;
                }
            }
            if cols > DISPLAY_MAX_COLS {
                write!(f, ", ...")?;
            }
            write!(f, "]")?;
        }
        if rows > DISPLAY_MAX_ROWS {
            write!(f, "\n...")?;
        }
        Ok(())
    }
}
