//======================================================================
// src/lib.rs
// Crate entry point.
//======================================================================

//! Uniform random permutations of `[0, n)` without materializing them.
//!
//! A classic Fisher-Yates shuffle needs an array of `n` slots. This
//! crate runs the same algorithm over a *virtual* identity array,
//! recording only the positions where the shuffle has diverged from it.
//! Memory tracks the number of steps taken, not `n`, so shuffling the
//! first thousand elements of a 2^40 domain costs a thousand map
//! entries.
//!
//! The draws are classic Fisher-Yates draws, so for a uniform random
//! source the emitted permutation is uniform over all `n!` orderings.
//!
//! ```
//! use lazyshuffle::SparseShuffle;
//! use rand::SeedableRng;
//!
//! let rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let order: Vec<u64> = SparseShuffle::new(10, rng).collect();
//! assert_eq!(order.len(), 10);
//! ```

mod sparse;

pub use sparse::{lazy_fisher_yates, SparseShuffle};
