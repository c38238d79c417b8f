//! Window functions for signal-processing weighting.
//!
//! ## Purpose
//!
//! This module provides the window functions a buffer can apply to itself:
//! stateless algorithms that compute a multiplicative weight per global
//! index over the buffer's full logical index range.
//!
//! ## Design notes
//!
//! * **Closed dispatch**: windows are a tagged enum, not trait objects.
//!   Every algorithm is stateless, so a plain match dispatches the formula
//!   and the tags share freely across buffers and threads.
//! * **Precision**: weights are computed in `f64` and converted to the
//!   element type at application time.
//! * **Support**: Bartlett and Hanning produce fractional weights and are
//!   defined for float elements only; an unsupported pairing fails fast
//!   instead of silently doing nothing. Rectangular is the identity for
//!   every element type.
//!
//! ## Key concepts
//!
//! * **Global index**: unlike every other fan-out, windowing treats the
//!   buffer as one flat index space, crossing chunk boundaries freely.
//! * **Span**: the formulas are parameterized by `n - 1`, the distance
//!   between the first and last index.
//!
//! ## Invariants
//!
//! * Weights lie in `[0, 1]` for all three windows.
//! * `weight(idx, n) == weight(n - 1 - idx, n)` (symmetry).
//! * `weight(idx, 1) == 1.0` (a single element has no span to shape).
//!
//! ## Non-goals
//!
//! * This module does not apply weights to data (see `buffer::ops`).
//! * No overlap-add, FFT, or spectral machinery; weighting only.

// External dependencies
use core::f64::consts::PI;
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::element::ElementKind;

// ============================================================================
// Window Function Enum
// ============================================================================

/// Window function tag.
///
/// Each window defines a weight `w: {0..n-1} -> [0, 1]` over the global
/// index range of an `n`-element buffer. Application multiplies every
/// element by its index's weight, in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowFunction {
    /// Identity window: `w(idx) = 1` for every index and element type.
    #[default]
    Rectangular,

    /// Triangular window: `w(idx) = 1 - |idx - (n-1)/2| / ((n-1)/2)`.
    Bartlett,

    /// Raised-cosine window: `w(idx) = 0.5 * (1 - cos(2*pi*idx / (n-1)))`.
    Hanning,
}

impl WindowFunction {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the window function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            WindowFunction::Rectangular => "Rectangular",
            WindowFunction::Bartlett => "Bartlett",
            WindowFunction::Hanning => "Hanning",
        }
    }

    /// Whether this window implements the given element kind.
    ///
    /// Rectangular is the no-op identity for every kind; the shaped windows
    /// produce fractional weights and are defined for floats only.
    #[inline]
    pub const fn supports(&self, kind: ElementKind) -> bool {
        match self {
            WindowFunction::Rectangular => true,
            WindowFunction::Bartlett | WindowFunction::Hanning => kind.is_float(),
        }
    }

    // ========================================================================
    // Weight Computation
    // ========================================================================

    /// Compute the weight for global index `idx` in a buffer of `n` elements.
    ///
    /// For `n <= 1` the span vanishes and the lone weight is 1.
    #[inline]
    pub fn weight(&self, idx: usize, n: usize) -> f64 {
        if n <= 1 {
            return 1.0;
        }
        match self {
            WindowFunction::Rectangular => 1.0,

            WindowFunction::Bartlett => {
                let half_span = (n as f64 - 1.0) / 2.0;
                1.0 - (idx as f64 - half_span).abs() / half_span
            }

            WindowFunction::Hanning => {
                let span = n as f64 - 1.0;
                0.5 * (1.0 - (2.0 * PI * idx as f64 / span).cos())
            }
        }
    }
}

impl Display for WindowFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Window Context
// ============================================================================

/// Parameter block passed alongside a window application.
///
/// The three built-in windows take no parameters; the context is the
/// extension point for parameterized window variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct WindowContext {}

impl WindowContext {
    /// Create an empty context.
    #[inline]
    pub const fn new() -> Self {
        Self {}
    }
}
