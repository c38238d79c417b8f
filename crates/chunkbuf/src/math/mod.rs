//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions with no knowledge of
//! buffers, chunks, or execution: window weighting formulas and their
//! support rules.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Window weighting functions.
pub mod window;
