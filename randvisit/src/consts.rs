//======================================================================
// src/consts.rs
// Shared constants.
//======================================================================

/// Widest supported cipher block, in bits.
pub const MAX_BITS: u32 = 64;

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Candidate lanes processed per batched step.
#[cfg(feature = "simd")]
pub const LANES: usize = 8;

/// Widest block the batched walker supports (lanes are `u32`).
#[cfg(feature = "simd")]
pub const MAX_BATCH_BITS: u32 = 32;
