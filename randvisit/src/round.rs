//======================================================================
// src/round.rs
// The round-function capability injected into the Feistel engine.
//======================================================================

use rand_core::RngCore;

#[cfg(feature = "simd")]
use crate::consts::LANES;
#[cfg(feature = "simd")]
use core::simd::Simd;

/// A keyed, per-round transform on half-width integers.
///
/// The engine supports block widths up to 64 bits, so a half is at most
/// 32 bits and `u32` carries it for every width.
///
/// `apply` must be a pure function of `(key, x, round)`: no dependence on
/// call order, no shared mutable state. The contract makes *no* claim about
/// invertibility: the Feistel construction yields a bijection for any
/// deterministic round function, however poor. Statistical quality and
/// throughput are the only things a provider can ruin.
pub trait RoundFunction: Sized {
    /// Draw exactly this provider's required key material from `rng`.
    ///
    /// Called once, at seed time. `rounds` is the engine's round count, for
    /// providers that key each round independently.
    fn sample<R: RngCore + ?Sized>(rounds: usize, rng: &mut R) -> Self;

    /// Transform one half-width value for round `round` in `[0, rounds)`.
    fn apply(&self, x: u32, round: usize) -> u32;
}

/// Lane-parallel extension of [`RoundFunction`] for the batched walker.
///
/// Contract: `apply_lanes(x, round)[i] == apply(x[i], round)` for every
/// lane. The batched walker relies on this to emit the same value set as
/// the scalar walker; it is a tested property, not an assumption.
#[cfg(feature = "simd")]
#[cfg_attr(docsrs, doc(cfg(feature = "simd")))]
pub trait LaneRoundFunction: RoundFunction {
    /// Transform [`LANES`] half-width values at once.
    fn apply_lanes(&self, x: Simd<u32, LANES>, round: usize) -> Simd<u32, LANES>;
}
