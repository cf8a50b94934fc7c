#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "simd", feature(portable_simd))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires up the modules.
//======================================================================

// --- Module declarations ---
pub mod cipher;
pub mod consts;
pub mod error;
pub mod mixer;
pub mod providers;
pub mod round;
pub mod stream;
pub mod walker;

mod backends;

// --- Re-exports ---
pub use cipher::FeistelCipher;
pub use error::Error;
pub use round::RoundFunction;
pub use stream::CounterStream;
pub use walker::{bits_for_domain, DomainWalker};

#[cfg(feature = "simd")]
pub use round::LaneRoundFunction;
#[cfg(feature = "simd")]
pub use walker::BatchWalker;

// --- Convenience Type Aliases for Users ---

/// Feistel cipher with the portable FNV-1a round function.
pub type Fnv1aCipher = FeistelCipher<providers::Fnv1aRound>;
/// Cycle walker backed by [`Fnv1aCipher`].
pub type Fnv1aWalker = DomainWalker<providers::Fnv1aRound>;

/// Feistel cipher with the xorshift32 round function.
pub type XoroCipher = FeistelCipher<providers::XoroRound>;
/// Cycle walker backed by [`XoroCipher`].
pub type XoroWalker = DomainWalker<providers::XoroRound>;

// --- Test Module ---
#[cfg(test)]
mod tests;
