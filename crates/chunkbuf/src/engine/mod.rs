//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer decides and carries out execution: the parallel-vs-sequential
//! policy, the fan-out helpers that apply work across chunks under that
//! policy, and the precondition checks operations run before mutating.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Buffer
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution policy resolution.
pub mod policy;

/// Chunk fan-out under a fixed policy.
pub mod executor;

/// Validation utilities.
pub mod validator;
