//! Fixed-size element chunk: the atomic storage unit of a buffer.
//!
//! ## Purpose
//!
//! This module implements `Chunk<T>`, the contiguous run of elements a
//! buffer partitions its data into. Chunks provide bounds-checked access,
//! fills, maps, reductions, elementwise arithmetic, and local shifting.
//!
//! ## Design notes
//!
//! * **Isolation**: a chunk knows its own ordinal and size but nothing about
//!   sibling chunks or the owning buffer; shifting never crosses the chunk
//!   boundary.
//! * **Strict order**: every element loop runs single-threaded in ascending
//!   index order. The fail-fast divide contract depends on it.
//! * **Atomicity split**: scalar division checks its divisor once up front
//!   (failure leaves the chunk unchanged); elementwise division checks each
//!   divisor immediately before use (failure leaves the chunk partially
//!   mutated). Both behaviors are contracts, not accidents.
//!
//! ## Key concepts
//!
//! * **Local index**: position within this chunk, `0..size`.
//! * **Computation wrapping**: a failing caller transform is re-wrapped into
//!   a single computation error carrying the rendered cause.
//!
//! ## Invariants
//!
//! * `size >= 1`; elements default to zero at creation.
//! * `index >= 0`: chunks are numbered from zero within their buffer.
//! * `copy()` produces storage with no aliasing to the source.
//!
//! ## Non-goals
//!
//! * This module does not translate global indices (see `layout`).
//! * This module does not fan out work across chunks (see `engine`).

// External dependencies
use core::fmt::{self, Display, Formatter};
use rand::Rng;

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::errors::BufferError;

// ============================================================================
// Chunk
// ============================================================================

/// A contiguous, exclusively owned run of elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk<T> {
    /// Ordinal of this chunk within its owning buffer.
    index: usize,

    /// Element storage.
    data: Vec<T>,
}

impl<T: Element> Chunk<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a zero-filled chunk of `size` elements.
    ///
    /// Fails with `EmptyData` for `size == 0`; a chunk always holds at least
    /// one element.
    pub fn new(index: usize, size: usize) -> Result<Self, BufferError> {
        if size == 0 {
            return Err(BufferError::EmptyData);
        }
        Ok(Self {
            index,
            data: vec![T::zero(); size],
        })
    }

    /// Create a chunk seeded with `data`. Fails with `EmptyData` if empty.
    pub fn from_vec(index: usize, data: Vec<T>) -> Result<Self, BufferError> {
        if data.is_empty() {
            return Err(BufferError::EmptyData);
        }
        Ok(Self { index, data })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Ordinal of this chunk within its owning buffer.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Element data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Read the element at `local`.
    #[inline]
    pub fn get(&self, local: usize) -> Result<T, BufferError> {
        self.data
            .get(local)
            .copied()
            .ok_or(BufferError::IndexOutOfBounds {
                index: local,
                len: self.data.len(),
            })
    }

    /// Write the element at `local`.
    #[inline]
    pub fn set(&mut self, local: usize, value: T) -> Result<(), BufferError> {
        let len = self.data.len();
        match self.data.get_mut(local) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BufferError::IndexOutOfBounds { index: local, len }),
        }
    }

    // ========================================================================
    // Fills and Maps
    // ========================================================================

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Fill every element with an independent uniform random draw from a
    /// thread-local generator.
    pub fn rand(&mut self) {
        let mut rng = rand::rng();
        self.rand_with(&mut rng);
    }

    /// Fill every element with an independent uniform random draw from `rng`.
    pub fn rand_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in self.data.iter_mut() {
            *slot = T::sample_uniform(rng);
        }
    }

    /// Apply `transform` to every element in place, in ascending order.
    pub fn map<F>(&mut self, transform: F)
    where
        F: Fn(T) -> T,
    {
        for slot in self.data.iter_mut() {
            *slot = transform(*slot);
        }
    }

    /// Apply a fallible `transform` to every element in place.
    ///
    /// Stops at the first failure, wrapping the cause into a computation
    /// error. Elements before the failing index are already transformed.
    pub fn try_map<F, E>(&mut self, transform: F) -> Result<(), BufferError>
    where
        F: Fn(T) -> Result<T, E>,
        E: Display,
    {
        for slot in self.data.iter_mut() {
            match transform(*slot) {
                Ok(value) => *slot = value,
                Err(cause) => return Err(BufferError::Computation(cause.to_string())),
            }
        }
        Ok(())
    }

    /// Apply `transform(local, element)` to every element in place.
    pub fn map_enumerate<F>(&mut self, transform: F)
    where
        F: Fn(usize, T) -> T,
    {
        for (local, slot) in self.data.iter_mut().enumerate() {
            *slot = transform(local, *slot);
        }
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Smallest element. Fails with `EmptyData` on a zero-size chunk.
    pub fn min(&self) -> Result<T, BufferError> {
        let mut values = self.data.iter().copied();
        let first = values.next().ok_or(BufferError::EmptyData)?;
        Ok(values.fold(first, |acc, v| if v < acc { v } else { acc }))
    }

    /// Largest element. Fails with `EmptyData` on a zero-size chunk.
    pub fn max(&self) -> Result<T, BufferError> {
        let mut values = self.data.iter().copied();
        let first = values.next().ok_or(BufferError::EmptyData)?;
        Ok(values.fold(first, |acc, v| if v > acc { v } else { acc }))
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.data
            .iter()
            .copied()
            .fold(T::zero(), |acc, v| acc + v)
    }

    /// Arithmetic mean: `sum / size`. Integer elements truncate.
    pub fn average(&self) -> Result<T, BufferError> {
        if self.data.is_empty() {
            return Err(BufferError::EmptyData);
        }
        let count = T::from(self.data.len()).ok_or_else(|| {
            BufferError::Computation(format!(
                "element count {} is not representable as {}",
                self.data.len(),
                T::KIND
            ))
        })?;
        Ok(self.sum() / count)
    }

    // ========================================================================
    // Elementwise Arithmetic
    // ========================================================================

    /// Add `other` elementwise. Sizes must match (checked before mutation).
    pub fn add_chunk(&mut self, other: &Chunk<T>) -> Result<(), BufferError> {
        self.check_same_size(other)?;
        for (slot, &rhs) in self.data.iter_mut().zip(other.data.iter()) {
            *slot = *slot + rhs;
        }
        Ok(())
    }

    /// Subtract `other` elementwise. Sizes must match (checked before mutation).
    pub fn sub_chunk(&mut self, other: &Chunk<T>) -> Result<(), BufferError> {
        self.check_same_size(other)?;
        for (slot, &rhs) in self.data.iter_mut().zip(other.data.iter()) {
            *slot = *slot - rhs;
        }
        Ok(())
    }

    /// Multiply by `other` elementwise. Sizes must match (checked before mutation).
    pub fn mul_chunk(&mut self, other: &Chunk<T>) -> Result<(), BufferError> {
        self.check_same_size(other)?;
        for (slot, &rhs) in self.data.iter_mut().zip(other.data.iter()) {
            *slot = *slot * rhs;
        }
        Ok(())
    }

    /// Divide by `other` elementwise.
    ///
    /// Each divisor is checked immediately before its division. The first
    /// zero divisor fails the operation and leaves this chunk partially
    /// mutated: elements before the failing index are already divided,
    /// elements at and after it are untouched. Callers that need atomicity
    /// must `copy()` first.
    pub fn div_chunk(&mut self, other: &Chunk<T>) -> Result<(), BufferError> {
        self.check_same_size(other)?;
        for (local, (slot, &rhs)) in self.data.iter_mut().zip(other.data.iter()).enumerate() {
            if rhs.is_zero() {
                return Err(BufferError::DivisionByZero { index: Some(local) });
            }
            *slot = *slot / rhs;
        }
        Ok(())
    }

    /// Add `value` to every element.
    pub fn add_value(&mut self, value: T) {
        for slot in self.data.iter_mut() {
            *slot = *slot + value;
        }
    }

    /// Subtract `value` from every element.
    pub fn sub_value(&mut self, value: T) {
        for slot in self.data.iter_mut() {
            *slot = *slot - value;
        }
    }

    /// Multiply every element by `value`.
    pub fn mul_value(&mut self, value: T) {
        for slot in self.data.iter_mut() {
            *slot = *slot * value;
        }
    }

    /// Divide every element by `value`.
    ///
    /// The divisor is checked once, before the loop, so failure leaves the
    /// chunk entirely unchanged.
    pub fn div_value(&mut self, value: T) -> Result<(), BufferError> {
        if value.is_zero() {
            return Err(BufferError::DivisionByZero { index: None });
        }
        for slot in self.data.iter_mut() {
            *slot = *slot / value;
        }
        Ok(())
    }

    fn check_same_size(&self, other: &Chunk<T>) -> Result<(), BufferError> {
        if self.data.len() != other.data.len() {
            return Err(BufferError::SizeMismatch {
                left: self.data.len(),
                right: other.data.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Shifting
    // ========================================================================

    /// Shift elements `offset` positions toward index 0, within this chunk
    /// only.
    ///
    /// Circular mode wraps vacated positions around
    /// (`data[i] = old[(i + offset) % size]`); otherwise positions past the
    /// end read as zero. A negative offset delegates to `shift_right`.
    pub fn shift_left(&mut self, offset: isize, circular: bool) {
        if offset < 0 {
            self.shift_right_by(offset.unsigned_abs(), circular);
        } else {
            self.shift_left_by(offset as usize, circular);
        }
    }

    /// Shift elements `offset` positions away from index 0, within this
    /// chunk only.
    ///
    /// Circular mode wraps vacated positions around; otherwise positions
    /// before the start read as zero. A negative offset delegates to
    /// `shift_left`.
    pub fn shift_right(&mut self, offset: isize, circular: bool) {
        if offset < 0 {
            self.shift_left_by(offset.unsigned_abs(), circular);
        } else {
            self.shift_right_by(offset as usize, circular);
        }
    }

    fn shift_left_by(&mut self, offset: usize, circular: bool) {
        let size = self.data.len();
        let snapshot = self.data.clone();
        if circular {
            let offset = offset % size;
            for i in 0..size {
                self.data[i] = snapshot[(i + offset) % size];
            }
        } else {
            for i in 0..size {
                self.data[i] = match i.checked_add(offset) {
                    Some(src) if src < size => snapshot[src],
                    _ => T::zero(),
                };
            }
        }
    }

    fn shift_right_by(&mut self, offset: usize, circular: bool) {
        let size = self.data.len();
        let snapshot = self.data.clone();
        if circular {
            let offset = offset % size;
            for i in 0..size {
                self.data[i] = snapshot[(i + size - offset) % size];
            }
        } else {
            for i in 0..size {
                self.data[i] = if i >= offset {
                    snapshot[i - offset]
                } else {
                    T::zero()
                };
            }
        }
    }

    // ========================================================================
    // Copy
    // ========================================================================

    /// Deep-cloned chunk with the same index and element data.
    ///
    /// The clone owns fresh storage; mutating it never affects this chunk.
    pub fn copy(&self) -> Chunk<T> {
        self.clone()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Element> Display for Chunk<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "chunk {} [", self.index)?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
