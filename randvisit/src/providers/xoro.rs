//======================================================================
// src/providers/xoro.rs
// xorshift32-based provider with a single shared key word.
//======================================================================

use rand_core::RngCore;

use crate::round::RoundFunction;

/// One xorshift32 step of `x ^ key`.
///
/// Cheaper than hashing, weaker diffusion; useful as a second portable
/// provider and for comparing round-function quality.
#[derive(Debug, Clone)]
pub struct XoroRound {
    key: u32,
}

impl RoundFunction for XoroRound {
    fn sample<R: RngCore + ?Sized>(_rounds: usize, rng: &mut R) -> Self {
        Self { key: rng.next_u32() }
    }

    #[inline(always)]
    fn apply(&self, x: u32, _round: usize) -> u32 {
        let mut tmp = x ^ self.key;
        tmp ^= tmp << 13;
        tmp ^= tmp >> 17;
        tmp ^= tmp << 5;
        tmp
    }
}
