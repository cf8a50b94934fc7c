//======================================================================
// src/providers/hw.rs
// Hardware-accelerated providers (x86_64). Each is runtime-detected at
// construction; the portable providers remain the universal fallback.
// The engine's contract never requires hardware support.
//======================================================================

use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_crc32_u32, _mm_cvtsi128_si32, _mm_loadu_si128,
    _mm_set1_epi32, _mm_sha1rnds4_epu32,
};

use rand_core::RngCore;

use crate::round::RoundFunction;

/// CRC32-C folding with one key word per round (SSE4.2).
#[derive(Debug, Clone)]
pub struct Crc32Round {
    keys: Vec<u32>,
}

impl Crc32Round {
    /// Whether the running CPU exposes the required instructions.
    pub fn is_supported() -> bool {
        std::arch::is_x86_feature_detected!("sse4.2")
    }
}

impl RoundFunction for Crc32Round {
    fn sample<R: RngCore + ?Sized>(rounds: usize, rng: &mut R) -> Self {
        assert!(Crc32Round::is_supported(), "sse4.2 unavailable; use a portable provider");
        Self { keys: (0..rounds).map(|_| rng.next_u32()).collect() }
    }

    #[inline]
    fn apply(&self, x: u32, round: usize) -> u32 {
        // SAFETY: support was verified in `sample`.
        unsafe { crc32(self.keys[round], x) }
    }
}

#[target_feature(enable = "sse4.2")]
unsafe fn crc32(key: u32, x: u32) -> u32 {
    _mm_crc32_u32(key, x)
}

/// One AES round on a broadcast of the half, against a 128-bit key
/// (AES-NI). The keyed substitution-permutation step gives strong
/// diffusion per round.
#[derive(Debug, Clone)]
pub struct AesRound {
    key: [u8; 16],
}

impl AesRound {
    /// Whether the running CPU exposes the required instructions.
    pub fn is_supported() -> bool {
        std::arch::is_x86_feature_detected!("aes")
    }
}

impl RoundFunction for AesRound {
    fn sample<R: RngCore + ?Sized>(_rounds: usize, rng: &mut R) -> Self {
        assert!(AesRound::is_supported(), "aes-ni unavailable; use a portable provider");
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        Self { key }
    }

    #[inline]
    fn apply(&self, x: u32, _round: usize) -> u32 {
        // SAFETY: support was verified in `sample`.
        unsafe { aes_round(&self.key, x) }
    }
}

#[target_feature(enable = "aes")]
unsafe fn aes_round(key: &[u8; 16], x: u32) -> u32 {
    let key = _mm_loadu_si128(key.as_ptr() as *const __m128i);
    let m = _mm_set1_epi32(x as i32);
    _mm_cvtsi128_si32(_mm_aesenc_si128(m, key)) as u32
}

/// One SHA-1 four-round transform against a 128-bit key (SHA-NI).
#[derive(Debug, Clone)]
pub struct ShaRound {
    key: [u8; 16],
}

impl ShaRound {
    /// Whether the running CPU exposes the required instructions.
    pub fn is_supported() -> bool {
        std::arch::is_x86_feature_detected!("sha")
    }
}

impl RoundFunction for ShaRound {
    fn sample<R: RngCore + ?Sized>(_rounds: usize, rng: &mut R) -> Self {
        assert!(ShaRound::is_supported(), "sha-ni unavailable; use a portable provider");
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        Self { key }
    }

    #[inline]
    fn apply(&self, x: u32, _round: usize) -> u32 {
        // SAFETY: support was verified in `sample`.
        unsafe { sha_round(&self.key, x) }
    }
}

#[target_feature(enable = "sha")]
unsafe fn sha_round(key: &[u8; 16], x: u32) -> u32 {
    let key = _mm_loadu_si128(key.as_ptr() as *const __m128i);
    let a = _mm_set1_epi32(x as i32);
    _mm_cvtsi128_si32(_mm_sha1rnds4_epu32::<0>(key, a)) as u32
}
