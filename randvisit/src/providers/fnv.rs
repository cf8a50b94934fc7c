//======================================================================
// src/providers/fnv.rs
// Portable default provider: FNV-1a hash of the half, XORed with a
// per-round key word.
//======================================================================

use rand_core::RngCore;

use crate::consts::{FNV_OFFSET, FNV_PRIME};
use crate::round::RoundFunction;

#[cfg(feature = "simd")]
use crate::consts::LANES;
#[cfg(feature = "simd")]
use crate::round::LaneRoundFunction;
#[cfg(feature = "simd")]
use core::simd::Simd;

/// 32-bit FNV-1a over the four little-endian bytes of `value`.
#[inline(always)]
fn hash_fnv1a(value: u32) -> u32 {
    let mut hash = FNV_OFFSET;
    let mut v = value;
    for _ in 0..4 {
        hash ^= v & 0xFF;
        hash = hash.wrapping_mul(FNV_PRIME);
        v >>= 8;
    }
    hash
}

/// Lane-parallel twin of [`hash_fnv1a`]; byte-for-byte the same mixing.
#[cfg(feature = "simd")]
#[inline(always)]
fn hash_fnv1a_lanes(value: Simd<u32, LANES>) -> Simd<u32, LANES> {
    let prime = Simd::splat(FNV_PRIME);
    let byte = Simd::splat(0xFFu32);
    let mut hash = Simd::splat(FNV_OFFSET);
    let mut v = value;
    for _ in 0..4 {
        hash ^= v & byte;
        hash = hash * prime;
        v = v >> Simd::splat(8u32);
    }
    hash
}

/// FNV-1a round function with one key word per round.
///
/// FNV-1a is a fast non-cryptographic hash with good low-bit diffusion,
/// which is all the Feistel construction asks of a round transform.
/// Two rounds of this provider already pass large statistical batteries;
/// it is the portable default.
#[derive(Debug, Clone)]
pub struct Fnv1aRound {
    keys: Vec<u32>,
}

impl RoundFunction for Fnv1aRound {
    fn sample<R: RngCore + ?Sized>(rounds: usize, rng: &mut R) -> Self {
        Self { keys: (0..rounds).map(|_| rng.next_u32()).collect() }
    }

    #[inline(always)]
    fn apply(&self, x: u32, round: usize) -> u32 {
        hash_fnv1a(x) ^ self.keys[round]
    }
}

#[cfg(feature = "simd")]
#[cfg_attr(docsrs, doc(cfg(feature = "simd")))]
impl LaneRoundFunction for Fnv1aRound {
    #[inline(always)]
    fn apply_lanes(&self, x: Simd<u32, LANES>, round: usize) -> Simd<u32, LANES> {
        hash_fnv1a_lanes(x) ^ Simd::splat(self.keys[round])
    }
}
