//! Layer 4: Buffer
//!
//! # Purpose
//!
//! This layer implements the chunked data buffer itself: construction,
//! two-level addressing, similarity, and the full operation set (fills,
//! maps, reductions, arithmetic, shifts, windows) fanned out across chunks
//! under the policy fixed at construction.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Buffer ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The chunked data buffer type.
pub mod data;

/// Operations on data buffers.
pub mod ops;
