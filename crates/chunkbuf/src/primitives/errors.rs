//! Error types for buffer and chunk operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that buffer and chunk operations
//! can surface: bounds violations, shape mismatches, arithmetic failures,
//! wrapped transform failures, and unsupported window/element pairings.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the relevant values (indices, lengths,
//!   layouts) rather than pre-formatted strings.
//! * **Atomicity encoded**: `DivisionByZero` distinguishes the atomic scalar
//!   form (`index: None`) from the fail-fast chunk-vs-chunk form
//!   (`index: Some(local)`), which leaves the chunk partially mutated.
//! * **Trait implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Bounds**: linear index or grid position outside the valid range.
//! 2. **Shape**: operand layouts or sizes that do not line up.
//! 3. **Arithmetic**: division by zero in either form.
//! 4. **Computation**: a caller-supplied transform failed; the rendered
//!    cause travels with the error.
//! 5. **Unsupported**: a window invoked for an element type it does not
//!    implement.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// Internal dependencies
use crate::primitives::shape::BufferLayout;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for buffer and chunk operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// Linear index is outside the valid element range.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// Number of addressable elements.
        len: usize,
    },

    /// Grid position is outside the buffer extent.
    PositionOutOfBounds {
        /// The row that was requested.
        row: usize,
        /// The column that was requested.
        col: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// Chunk-level operands (or seed data) have different element counts.
    SizeMismatch {
        /// Element count of the receiver (or the expected count).
        left: usize,
        /// Element count of the operand (or the provided count).
        right: usize,
    },

    /// Buffer operands are not similar: their layout fingerprints differ.
    NotSimilar {
        /// Layout of the receiving buffer.
        left: BufferLayout,
        /// Layout of the operand buffer.
        right: BufferLayout,
    },

    /// Division by zero.
    ///
    /// `Some(local)` marks the fail-fast chunk-vs-chunk form: elements before
    /// `local` are already divided. `None` marks the scalar form, which is
    /// checked up front and leaves the data unchanged.
    DivisionByZero {
        /// Local index of the zero divisor, if the elementwise form failed.
        index: Option<usize>,
    },

    /// A caller-supplied transform failed; carries the rendered cause.
    Computation(String),

    /// The window function does not implement the element type.
    UnsupportedWindow {
        /// Name of the window function.
        window: &'static str,
        /// Name of the element type.
        element: &'static str,
    },

    /// A reduction was requested on zero elements.
    EmptyData,

    /// Chunk size must be at least 1.
    InvalidChunkSize(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for BufferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {index} (valid range is 0..{len})")
            }
            Self::PositionOutOfBounds {
                row,
                col,
                width,
                height,
            } => {
                write!(
                    f,
                    "Position out of bounds: ({row}, {col}) in a {width} x {height} grid"
                )
            }
            Self::SizeMismatch { left, right } => {
                write!(f, "Size mismatch: {left} elements vs {right}")
            }
            Self::NotSimilar { left, right } => {
                write!(f, "Buffers are not similar: {left} vs {right}")
            }
            Self::DivisionByZero { index } => match index {
                Some(local) => write!(
                    f,
                    "Division by zero at local index {local} (earlier elements already divided)"
                ),
                None => write!(f, "Division by zero scalar (data unchanged)"),
            },
            Self::Computation(cause) => write!(f, "Transform failed: {cause}"),
            Self::UnsupportedWindow { window, element } => {
                write!(f, "Window '{window}' does not support element type {element}")
            }
            Self::EmptyData => write!(f, "Operation requires at least one element"),
            Self::InvalidChunkSize(size) => {
                write!(f, "Invalid chunk_size: {size} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for BufferError {}
