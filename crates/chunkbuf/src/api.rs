//! High-level API for chunked buffers.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: re-exports of the
//! public types and a fluent builder that collects chunking options and
//! constructs buffers of any supported element type.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all options.
//! * **Reusable**: Build methods take `&self`, so one configured builder
//!   can stamp out many buffers.
//! * **Validated**: Duplicate settings and invalid options surface as
//!   structured errors when a build method runs, not mid-chain.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `DataBufferBuilder::new()`, chain option
//!   setters, finish with one of the `build_*` methods.
//! * **Direct construction**: [`DataBuffer`] constructors remain available
//!   for callers that already hold a [`ChunkContext`].

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::buffer::data::DataBuffer;
pub use crate::engine::policy::{ExecutionPolicy, PARALLEL_THRESHOLD};
pub use crate::math::window::{WindowContext, WindowFunction};
pub use crate::primitives::chunk::Chunk;
pub use crate::primitives::context::{ChunkContext, DEFAULT_CHUNK_SIZE};
pub use crate::primitives::element::{Element, ElementKind};
pub use crate::primitives::errors::BufferError;
pub use crate::primitives::layout::ChunkLayout;
pub use crate::primitives::shape::{BufferLayout, Dimension, Shape};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring chunking options and constructing buffers.
#[derive(Debug, Clone)]
pub struct DataBufferBuilder {
    /// Elements per chunk.
    pub chunk_size: Option<usize>,

    /// Derive the execution policy from the chunk count.
    pub auto_parallel: Option<bool>,

    /// Explicit parallel flag, honored only when auto mode is off.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for DataBufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DataBufferBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            chunk_size: None,
            auto_parallel: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of elements per chunk.
    pub fn chunk_size(mut self, size: usize) -> Self {
        if self.chunk_size.is_some() {
            self.duplicate_param = Some("chunk_size");
        }
        self.chunk_size = Some(size);
        self
    }

    /// Derive the execution policy from the chunk count instead of the
    /// explicit parallel flag.
    pub fn auto_parallel(mut self, enabled: bool) -> Self {
        if self.auto_parallel.is_some() {
            self.duplicate_param = Some("auto_parallel");
        }
        self.auto_parallel = Some(enabled);
        self
    }

    /// Set the explicit parallel flag, honored only when auto mode is off.
    pub fn parallel(mut self, enabled: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(enabled);
        self
    }

    /// Build a zero-filled 1D buffer of `len` elements.
    pub fn build_one_dim<T: Element>(&self, len: usize) -> Result<DataBuffer<T>, BufferError> {
        DataBuffer::one_dim_with(len, &self.context()?)
    }

    /// Build a zero-filled 2D buffer of `width * height` elements.
    pub fn build_two_dim<T: Element>(
        &self,
        width: usize,
        height: usize,
    ) -> Result<DataBuffer<T>, BufferError> {
        DataBuffer::two_dim_with(width, height, &self.context()?)
    }

    /// Build a 1D buffer seeded with `data`.
    pub fn build_from_vec<T: Element>(&self, data: Vec<T>) -> Result<DataBuffer<T>, BufferError> {
        DataBuffer::from_vec_with(data, &self.context()?)
    }

    /// Build a 2D buffer seeded with row-major `data`.
    ///
    /// Fails with `SizeMismatch` when `data.len() != width * height`.
    pub fn build_from_vec_2d<T: Element>(
        &self,
        data: Vec<T>,
        width: usize,
        height: usize,
    ) -> Result<DataBuffer<T>, BufferError> {
        DataBuffer::from_vec_2d_with(data, width, height, &self.context()?)
    }

    /// Resolve the collected options into a validated context, filling
    /// unset options from the defaults.
    fn context(&self) -> Result<ChunkContext, BufferError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let defaults = ChunkContext::default();
        let ctx = ChunkContext {
            chunk_size: self.chunk_size.unwrap_or(defaults.chunk_size),
            auto_parallel: self.auto_parallel.unwrap_or(defaults.auto_parallel),
            parallel: self.parallel.unwrap_or(defaults.parallel),
        };
        Validator::validate_context(&ctx)?;
        Ok(ctx)
    }
}
