//! Numeric element abstraction for chunks and buffers.
//!
//! ## Purpose
//!
//! This module defines the `Element` trait that chunks and buffers are
//! generic over, collapsing what would otherwise be one buffer/chunk
//! implementation per primitive type into a single generic one.
//!
//! ## Design notes
//!
//! * **Closed set**: The trait is implemented for `f32`, `f64`, and `i32`;
//!   `ElementKind` is the matching runtime tag.
//! * **Value semantics**: Elements are `Copy` and move through operations by
//!   value; chunks never hand out interior references.
//! * **Thread-safe**: `Send + Sync` bounds let parallel fan-out share
//!   operands across the thread pool.
//!
//! ## Key concepts
//!
//! * **Kind tag**: `ElementKind` names the concrete type at runtime for
//!   diagnostics and window-support checks.
//! * **Weight conversion**: window weights are computed in `f64` and
//!   converted via `from_weight`.
//! * **Uniform sampling**: `sample_uniform` draws `[0, 1)` for floats and
//!   the full value domain for integers.
//!
//! ## Invariants
//!
//! * `zero()` is the additive identity used for vacated shift slots and
//!   freshly allocated chunks.
//! * `from_weight` maps `1.0` to `one()` for every implementor.
//!
//! ## Non-goals
//!
//! * This module does not implement arbitrary-precision or complex types.
//! * This module does not define buffer or chunk behavior.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::ops::{Add, Div, Mul, Sub};
use num_traits::{NumCast, One, Zero};
use rand::Rng;

// ============================================================================
// Element Kind
// ============================================================================

/// Runtime tag identifying the concrete element type of a buffer or chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit IEEE 754 floating point.
    F32,

    /// 64-bit IEEE 754 floating point.
    F64,

    /// 32-bit signed integer.
    I32,
}

impl ElementKind {
    /// Get the name of the element kind.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::I32 => "i32",
        }
    }

    /// Returns `true` for the floating-point kinds.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Element Trait
// ============================================================================

/// Numeric element type storable in chunks and buffers.
///
/// The arithmetic bounds mirror the elementwise operation set; `PartialOrd`
/// backs the min/max reductions. Implementors are plain machine numerics,
/// so every operation is a value-to-value computation with no allocation.
pub trait Element:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + Zero
    + One
    + NumCast
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Runtime tag for this element type.
    const KIND: ElementKind;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Convert a window weight in `[0, 1]` to this element type.
    fn from_weight(weight: f64) -> Self;

    /// Draw a uniform random value: `[0, 1)` for floats, the full value
    /// domain for integers.
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

// ============================================================================
// Implementations
// ============================================================================

impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn from_weight(weight: f64) -> Self {
        weight as f32
    }

    #[inline]
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<f32>()
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::F64;

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn from_weight(weight: f64) -> Self {
        weight
    }

    #[inline]
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<f64>()
    }
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::I32;

    #[inline]
    fn abs(self) -> Self {
        i32::abs(self)
    }

    #[inline]
    fn from_weight(weight: f64) -> Self {
        weight.round() as i32
    }

    #[inline]
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<i32>()
    }
}
