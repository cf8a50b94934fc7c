//======================================================================
// src/backends/soft.rs
// Scalar evaluation of the Feistel round loop. Encrypt and decrypt
// share one body; decrypt runs the round indices in reverse.
//======================================================================

use crate::cipher::FeistelCipher;
use crate::round::RoundFunction;

#[inline(always)]
pub(crate) fn transform<F: RoundFunction>(
    cipher: &FeistelCipher<F>,
    x: u64,
    decrypt: bool,
) -> u64 {
    if cipher.rounds == 0 {
        return x;
    }

    let wide_mask = cipher.mask as u64;
    let mut left = ((x >> cipher.half_bits) & wide_mask) as u32;
    let mut right = (x & wide_mask) as u32;

    for i in 0..cipher.rounds {
        let round = if decrypt { cipher.rounds - 1 - i } else { i };
        let f = cipher.round_fn.apply(right, round);
        left = (left ^ f) & cipher.mask;
        core::mem::swap(&mut left, &mut right);
    }
    // the loop swaps once too often
    core::mem::swap(&mut left, &mut right);

    ((left as u64) << cipher.half_bits) | right as u64
}
