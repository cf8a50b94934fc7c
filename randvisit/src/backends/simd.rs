//======================================================================
// src/backends/simd.rs
// Portable-SIMD evaluation of the Feistel round loop over 8 u32 lanes.
// Same key, same round structure per lane; lanes are independent, so
// this is data parallelism within one thread.
//======================================================================

use core::simd::Simd;

use crate::cipher::FeistelCipher;
use crate::consts::LANES;
use crate::round::LaneRoundFunction;

/// Encrypt [`LANES`] independent block values at once.
///
/// Lane `i` of the result equals `cipher.encrypt(x[i])`; the scalar
/// path is the correctness oracle for this function. Only meaningful
/// for block widths of at most 32 bits (lanes are `u32`); the batched
/// walker enforces that bound at construction.
#[inline(always)]
pub(crate) fn encrypt_lanes<F: LaneRoundFunction>(
    cipher: &FeistelCipher<F>,
    x: Simd<u32, LANES>,
) -> Simd<u32, LANES> {
    if cipher.rounds == 0 {
        return x;
    }

    let mask = Simd::splat(cipher.mask);
    let shift = Simd::splat(cipher.half_bits);
    let mut left = (x >> shift) & mask;
    let mut right = x & mask;

    for round in 0..cipher.rounds {
        let f = cipher.round_fn.apply_lanes(right, round);
        left = (left ^ f) & mask;
        core::mem::swap(&mut left, &mut right);
    }
    // the loop swaps once too often
    core::mem::swap(&mut left, &mut right);

    (left << shift) | right
}
