//! Buffer operations: fills, maps, reductions, arithmetic, shifts, windows.
//!
//! ## Purpose
//!
//! This module implements every mutating and reducing operation on
//! [`DataBuffer`]. Each operation fans out across the chunks through
//! `engine::executor` under the policy fixed at construction.
//!
//! ## Design notes
//!
//! * **Chaining**: mutators return `&mut Self` (or `Result<&mut Self, _>`),
//!   so operations compose left to right on one receiver.
//! * **Validation first**: binary operations check similarity before any
//!   mutation, so a rejected operand leaves the receiver untouched.
//! * **Atomicity split**: scalar division checks its divisor once up front
//!   and fails atomically; buffer-vs-buffer division checks each divisor
//!   at use and fails mid-operation, leaving earlier elements divided.
//!
//! ## Key concepts
//!
//! * **Global-index map**: `map_indexed` and the window functions address
//!   elements by buffer-wide index, crossing chunk boundaries; everything
//!   else is chunk-local.
//! * **Intra-chunk shift**: shifting moves elements within each chunk
//!   independently; no element ever crosses a chunk boundary.
//!
//! ## Invariants
//!
//! * A failed similarity check mutates nothing.
//! * Sequential buffers process chunks in strict ascending order.
//!
//! ## Non-goals
//!
//! * This module does not construct buffers or translate indices
//!   (see `buffer::data`).

// External dependencies
use core::fmt::Display;

// Internal dependencies
use crate::buffer::data::DataBuffer;
use crate::engine::executor;
use crate::engine::validator::Validator;
use crate::math::window::{WindowContext, WindowFunction};
use crate::primitives::element::Element;
use crate::primitives::errors::BufferError;

impl<T: Element> DataBuffer<T> {
    // ========================================================================
    // Fills and Maps
    // ========================================================================

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) -> &mut Self {
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), move |chunk| chunk.fill(value));
        self
    }

    /// Fill every element with an independent uniform random draw:
    /// `[0, 1)` for float elements, the full value domain for integers.
    ///
    /// Each chunk draws from its executing thread's generator, so parallel
    /// fills are race-free but not reproducible across runs.
    pub fn rand(&mut self) -> &mut Self {
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), |chunk| chunk.rand());
        self
    }

    /// Apply `transform` to every element in place.
    pub fn map<F>(&mut self, transform: F) -> &mut Self
    where
        F: Fn(T) -> T + Send + Sync,
    {
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), |chunk| chunk.map(&transform));
        self
    }

    /// Apply a fallible `transform` to every element in place.
    ///
    /// The first failure aborts the operation with a computation error
    /// carrying the rendered cause. A sequential buffer stops at the first
    /// failing element, leaving earlier elements transformed; a parallel
    /// buffer leaves an indeterminate set of chunks transformed.
    pub fn try_map<F, E>(&mut self, transform: F) -> Result<&mut Self, BufferError>
    where
        F: Fn(T) -> Result<T, E> + Send + Sync,
        E: Display,
    {
        let policy = self.policy();
        executor::try_for_each(policy, self.chunks_mut(), |chunk| {
            chunk.try_map(&transform)
        })?;
        Ok(self)
    }

    /// Apply `transform(global_index, element)` to every element in place.
    ///
    /// The index is the buffer-wide position, not the chunk-local one, so
    /// a transform sees `0..total_size` across chunk boundaries.
    pub fn map_indexed<F>(&mut self, transform: F) -> &mut Self
    where
        F: Fn(usize, T) -> T + Send + Sync,
    {
        let policy = self.policy();
        let chunk_size = self.chunk_size();
        executor::for_each(policy, self.chunks_mut(), move |chunk| {
            let base = chunk.index() * chunk_size;
            chunk.map_enumerate(|local, value| transform(base + local, value));
        });
        self
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Smallest element. Fails with `EmptyData` on a zero-size buffer.
    pub fn min(&self) -> Result<T, BufferError> {
        executor::try_reduce(
            self.policy(),
            self.chunks(),
            |chunk| chunk.min(),
            |a, b| if b < a { b } else { a },
        )?
        .ok_or(BufferError::EmptyData)
    }

    /// Largest element. Fails with `EmptyData` on a zero-size buffer.
    pub fn max(&self) -> Result<T, BufferError> {
        executor::try_reduce(
            self.policy(),
            self.chunks(),
            |chunk| chunk.max(),
            |a, b| if b > a { b } else { a },
        )?
        .ok_or(BufferError::EmptyData)
    }

    /// Sum of all elements. A zero-size buffer sums to zero.
    pub fn sum(&self) -> T {
        executor::reduce(
            self.policy(),
            self.chunks(),
            |chunk| chunk.sum(),
            |a, b| a + b,
        )
        .unwrap_or_else(T::zero)
    }

    /// Arithmetic mean: `sum / total_size`. Integer elements truncate.
    ///
    /// Fails with `EmptyData` on a zero-size buffer.
    pub fn average(&self) -> Result<T, BufferError> {
        let count = self.total_size();
        if count == 0 {
            return Err(BufferError::EmptyData);
        }
        let divisor = T::from(count).ok_or_else(|| {
            BufferError::Computation(format!(
                "element count {count} is not representable as {}",
                T::KIND
            ))
        })?;
        Ok(self.sum() / divisor)
    }

    // ========================================================================
    // Buffer Arithmetic
    // ========================================================================

    /// Add `other` elementwise.
    ///
    /// Fails with `NotSimilar` before any mutation when the layouts differ.
    pub fn add(&mut self, other: &DataBuffer<T>) -> Result<&mut Self, BufferError> {
        Validator::validate_similarity(self.layout(), other.layout())?;
        let policy = self.policy();
        executor::try_for_each_zip(policy, self.chunks_mut(), other.chunks(), |chunk, rhs| {
            chunk.add_chunk(rhs)
        })?;
        Ok(self)
    }

    /// Subtract `other` elementwise.
    ///
    /// Fails with `NotSimilar` before any mutation when the layouts differ.
    pub fn sub(&mut self, other: &DataBuffer<T>) -> Result<&mut Self, BufferError> {
        Validator::validate_similarity(self.layout(), other.layout())?;
        let policy = self.policy();
        executor::try_for_each_zip(policy, self.chunks_mut(), other.chunks(), |chunk, rhs| {
            chunk.sub_chunk(rhs)
        })?;
        Ok(self)
    }

    /// Multiply by `other` elementwise.
    ///
    /// Fails with `NotSimilar` before any mutation when the layouts differ.
    pub fn mul(&mut self, other: &DataBuffer<T>) -> Result<&mut Self, BufferError> {
        Validator::validate_similarity(self.layout(), other.layout())?;
        let policy = self.policy();
        executor::try_for_each_zip(policy, self.chunks_mut(), other.chunks(), |chunk, rhs| {
            chunk.mul_chunk(rhs)
        })?;
        Ok(self)
    }

    /// Divide by `other` elementwise.
    ///
    /// Fails with `NotSimilar` before any mutation when the layouts differ.
    /// A zero divisor fails mid-operation with its local index: within the
    /// failing chunk, elements before that index are already divided and
    /// the rest untouched. A sequential buffer additionally leaves every
    /// chunk before the failing one fully divided and every later chunk
    /// untouched; a parallel buffer gives no cross-chunk guarantee. Callers
    /// that need atomicity divide a [`copy`](DataBuffer::copy).
    pub fn div(&mut self, other: &DataBuffer<T>) -> Result<&mut Self, BufferError> {
        Validator::validate_similarity(self.layout(), other.layout())?;
        let policy = self.policy();
        executor::try_for_each_zip(policy, self.chunks_mut(), other.chunks(), |chunk, rhs| {
            chunk.div_chunk(rhs)
        })?;
        Ok(self)
    }

    // ========================================================================
    // Scalar Arithmetic
    // ========================================================================

    /// Add `value` to every element.
    pub fn add_value(&mut self, value: T) -> &mut Self {
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), move |chunk| {
            chunk.add_value(value)
        });
        self
    }

    /// Subtract `value` from every element.
    pub fn sub_value(&mut self, value: T) -> &mut Self {
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), move |chunk| {
            chunk.sub_value(value)
        });
        self
    }

    /// Multiply every element by `value`.
    pub fn mul_value(&mut self, value: T) -> &mut Self {
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), move |chunk| {
            chunk.mul_value(value)
        });
        self
    }

    /// Multiply every element by `factor`. Alias of
    /// [`mul_value`](DataBuffer::mul_value).
    #[inline]
    pub fn scale(&mut self, factor: T) -> &mut Self {
        self.mul_value(factor)
    }

    /// Divide every element by `value`.
    ///
    /// The divisor is checked once, up front: a zero divisor fails before
    /// any mutation and the buffer is unchanged.
    pub fn div_value(&mut self, value: T) -> Result<&mut Self, BufferError> {
        if value.is_zero() {
            return Err(BufferError::DivisionByZero { index: None });
        }
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), move |chunk| {
            chunk.map(|v| v / value)
        });
        Ok(self)
    }

    /// Replace every element with its absolute value.
    pub fn abs(&mut self) -> &mut Self {
        self.map(T::abs)
    }

    /// Rescale all elements linearly into `[0, 1]`: the minimum maps to 0,
    /// the maximum to 1. A constant buffer is left unchanged. Integer
    /// elements truncate.
    ///
    /// Fails with `EmptyData` on a zero-size buffer.
    pub fn normalize(&mut self) -> Result<&mut Self, BufferError> {
        let lo = self.min()?;
        let hi = self.max()?;
        let range = hi - lo;
        if range.is_zero() {
            return Ok(self);
        }
        self.map(move |v| (v - lo) / range);
        Ok(self)
    }

    // ========================================================================
    // Shifting
    // ========================================================================

    /// Shift elements `offset` positions toward index 0, within each chunk
    /// independently.
    ///
    /// Elements never cross a chunk boundary. Circular mode wraps each
    /// chunk's vacated tail around to its own head; otherwise vacated
    /// positions fill with zero. A negative offset shifts right.
    pub fn shift_left(&mut self, offset: isize, circular: bool) -> &mut Self {
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), move |chunk| {
            chunk.shift_left(offset, circular)
        });
        self
    }

    /// Shift elements `offset` positions away from index 0, within each
    /// chunk independently.
    ///
    /// Elements never cross a chunk boundary. Circular mode wraps each
    /// chunk's vacated head around to its own tail; otherwise vacated
    /// positions fill with zero. A negative offset shifts left.
    pub fn shift_right(&mut self, offset: isize, circular: bool) -> &mut Self {
        let policy = self.policy();
        executor::for_each(policy, self.chunks_mut(), move |chunk| {
            chunk.shift_right(offset, circular)
        });
        self
    }

    // ========================================================================
    // Windowing
    // ========================================================================

    /// Multiply every element by its window weight, addressed by global
    /// index over the buffer's full logical range.
    pub fn window(&mut self, window: WindowFunction) -> Result<&mut Self, BufferError> {
        self.window_with(window, &WindowContext::new())
    }

    /// Multiply every element by its window weight, with explicit window
    /// parameters.
    ///
    /// Fails with `UnsupportedWindow` before any mutation when the window
    /// does not implement this element type (the shaped windows are float
    /// only). Rectangular is the identity and returns immediately. The
    /// built-in windows read nothing from the context.
    pub fn window_with(
        &mut self,
        window: WindowFunction,
        _ctx: &WindowContext,
    ) -> Result<&mut Self, BufferError> {
        if !window.supports(T::KIND) {
            return Err(BufferError::UnsupportedWindow {
                window: window.name(),
                element: T::KIND.name(),
            });
        }
        if window == WindowFunction::Rectangular {
            return Ok(self);
        }
        let n = self.total_size();
        self.map_indexed(move |idx, value| value * T::from_weight(window.weight(idx, n)));
        Ok(self)
    }
}
