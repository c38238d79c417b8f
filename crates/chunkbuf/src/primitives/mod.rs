//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Buffer
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Numeric element abstraction.
pub mod element;

/// Shared error types.
pub mod errors;

/// Buffer shapes and layout fingerprints.
pub mod shape;

/// Chunk partitioning and index translation.
pub mod layout;

/// Buffer construction options.
pub mod context;

/// Fixed-size element chunks.
pub mod chunk;
