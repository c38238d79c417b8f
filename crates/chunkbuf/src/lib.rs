//! # chunkbuf — Chunked Numeric Buffers for Rust
//!
//! Fixed-size 1D and 2D numeric buffers, partitioned into fixed-size chunks,
//! with elementwise arithmetic, reductions, intra-chunk shifting, uniform
//! random fills, and signal-processing window functions, all fanned out
//! across chunks under an execution policy fixed at construction.
//!
//! ## What is a chunked buffer?
//!
//! A [`DataBuffer`](prelude::DataBuffer) holds a fixed number of numeric
//! elements (1D run or row-major 2D grid) split into chunks of a fixed size,
//! with only the last chunk allowed to be short. Every bulk operation is
//! applied chunk by chunk: either sequentially in ascending chunk order, or
//! concurrently on a thread pool. Which of the two happens is decided once,
//! when the buffer is built, and never changes, so a pipeline of operations
//! on one buffer behaves uniformly from start to finish.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use chunkbuf::prelude::*;
//!
//! // Four-element chunks, explicitly sequential.
//! let ctx = ChunkContext::new(4, false, false);
//!
//! let mut a = DataBuffer::from_vec_with(vec![1.0_f32; 10], &ctx)?;
//! let b = DataBuffer::from_vec_with(vec![2.0_f32; 10], &ctx)?;
//!
//! // Chainable elementwise arithmetic: (a + b) * 0.5
//! a.add(&b)?.scale(0.5);
//!
//! assert_eq!(a.get(0)?, 1.5);
//! assert_eq!(a.chunk_count(), 3); // 10 elements in chunks of 4: [4, 4, 2]
//! assert_eq!(a.sum(), 15.0);
//! # Result::<(), BufferError>::Ok(())
//! ```
//!
//! ### Windowing
//!
//! Window functions weight every element by its buffer-wide index, crossing
//! chunk boundaries:
//!
//! ```rust
//! use chunkbuf::prelude::*;
//!
//! let mut signal = DataBuffer::from_vec(vec![1.0_f64; 5])?;
//! signal.window(Bartlett)?;
//!
//! assert_eq!(signal.get(0)?, 0.0); // edges taper to zero
//! assert_eq!(signal.get(2)?, 1.0); // center passes through
//! # Result::<(), BufferError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use chunkbuf::prelude::*;
//!
//! let builder = DataBufferBuilder::new()
//!     .chunk_size(256)
//!     .auto_parallel(false)
//!     .parallel(true);
//!
//! let grid: DataBuffer<f64> = builder.build_two_dim(64, 64)?;
//!
//! assert!(grid.is_parallel());
//! assert_eq!(grid.chunk_count(), 16);
//! assert_eq!(grid.get_at(63, 63)?, 0.0);
//! # Result::<(), BufferError>::Ok(())
//! ```
//!
//! ## Execution Policy
//!
//! Each buffer resolves its policy once, at construction, from its
//! [`ChunkContext`](prelude::ChunkContext):
//!
//! - **Auto mode** (`auto_parallel = true`, the default): the buffer runs
//!   parallel iff it has at least
//!   [`PARALLEL_THRESHOLD`](prelude::PARALLEL_THRESHOLD) chunks. The
//!   explicit `parallel` flag is ignored.
//! - **Explicit mode** (`auto_parallel = false`): the `parallel` flag is
//!   honored verbatim.
//!
//! Sequential buffers process chunks in strict ascending index order, which
//! makes mid-operation failures (a zero divisor in buffer-vs-buffer
//! division) land deterministically. Parallel buffers trade that ordering
//! for throughput.
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<_, BufferError>`. Two failure shapes
//! are worth knowing:
//!
//! - **Atomic**: similarity failures, scalar division by zero, and
//!   unsupported window/element pairings are detected before any mutation;
//!   the buffer is unchanged.
//! - **Fail-fast**: buffer-vs-buffer division checks each divisor at use
//!   and stops at the first zero, leaving elements before the failure
//!   already divided. Divide a [`copy`](prelude::DataBuffer::copy) when
//!   atomicity matters.
//!
//! ## Element Types
//!
//! Buffers are generic over [`Element`](prelude::Element), implemented for
//! `f32`, `f64`, and `i32`. Binary operations require both operands to have
//! the same element type; that is enforced at compile time. The shaped
//! windows (Bartlett, Hanning) produce fractional weights and reject `i32`
//! buffers at run time.
//!
//! ## Feature Flags
//!
//! - `dev`: exposes internal modules as `chunkbuf::internals` for
//!   white-box testing and benchmarks. Not for production use.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - execution policy, fan-out, and validation.
mod engine;

// Layer 4: Buffer - the chunked data buffer and its operations.
mod buffer;

// High-level fluent API for chunked buffers.
mod api;

// Standard chunkbuf prelude.
pub mod prelude {
    pub use crate::api::{
        BufferError, BufferLayout, Chunk, ChunkContext, ChunkLayout, DataBuffer,
        DataBufferBuilder,
        Dimension::{self, OneDimensional, TwoDimensional},
        Element, ElementKind,
        ExecutionPolicy::{self, Parallel, Sequential},
        Shape::{self, OneDim, TwoDim},
        WindowContext,
        WindowFunction::{self, Bartlett, Hanning, Rectangular},
        DEFAULT_CHUNK_SIZE, PARALLEL_THRESHOLD,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod buffer {
        pub use crate::buffer::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
