//======================================================================
// src/mixer.rs
// Invertible 64-bit finalizer. Every step (xor-shift by >= 32,
// multiply by an odd constant) is a bijection on u64, so the whole
// chain inverts exactly. Unkeyed; pair it with the cipher when the
// mapping itself must be secret.
//======================================================================

const PRIME_1: u64 = 0xff51_afd7_ed55_8ccd;
const PRIME_2: u64 = 0xc4ce_b9fe_1a85_ec53;

// Modular inverses of the primes mod 2^64.
const PRIME_1_INV: u64 = 0x4f74_430c_22a5_4005;
const PRIME_2_INV: u64 = 0x9cb4_b2f8_1293_37db;

// A shift of 33 touches each bit at most once, so the step undoes itself.
#[inline(always)]
fn xor_shift_33(h: u64) -> u64 {
    h ^ (h >> 33)
}

/// Scramble `h` through three multiply/xor-shift stages.
#[inline]
pub fn mix64(h: u64) -> u64 {
    let h = xor_shift_33(h);
    let h = h.wrapping_mul(PRIME_1);
    let h = xor_shift_33(h);
    let h = h.wrapping_mul(PRIME_2);
    xor_shift_33(h)
}

/// Exact inverse of [`mix64`].
#[inline]
pub fn unmix64(h: u64) -> u64 {
    let h = xor_shift_33(h);
    let h = h.wrapping_mul(PRIME_2_INV);
    let h = xor_shift_33(h);
    let h = h.wrapping_mul(PRIME_1_INV);
    xor_shift_33(h)
}
