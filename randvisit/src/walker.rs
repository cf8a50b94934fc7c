//======================================================================
// src/walker.rs
// Cycle walking: restrict the cipher's power-of-two bijection to an
// arbitrary domain [0, M) by skipping candidates whose image falls
// outside the target range.
//======================================================================

use rand_core::RngCore;

use crate::cipher::FeistelCipher;
use crate::error::Error;
use crate::round::RoundFunction;

#[cfg(feature = "simd")]
use crate::backends;
#[cfg(feature = "simd")]
use crate::consts::{LANES, MAX_BATCH_BITS};
#[cfg(feature = "simd")]
use crate::round::LaneRoundFunction;
#[cfg(feature = "simd")]
use core::simd::Simd;

/// Smallest even bit width `b` with `2^b >= domain`.
///
/// The even rounding keeps the Feistel halves balanced, and `2^b < 4M`
/// bounds the rejection rate: walking to exhaustion touches fewer than
/// four candidates per emitted value.
pub fn bits_for_domain(domain: u64) -> u32 {
    if domain <= 1 {
        return 0;
    }
    let bits = 64 - (domain - 1).leading_zeros();
    (bits + 1) & !1
}

/// Emits each value of `[0, domain)` exactly once, in pseudorandom order.
///
/// Candidates `0, 1, 2, …` are pushed through the cipher; images inside
/// the domain are emitted, the rest are discarded and never revisited.
/// Because the cipher is a bijection on `[0, 2^b)`, the accepted
/// candidates are exactly the preimages of `[0, domain)`: nothing is
/// skipped, nothing repeats, and the walk stops after exactly `domain`
/// emissions.
///
/// The sequence is forward-only and not restartable; deterministic
/// replay means building a new walker from the same seed.
#[derive(Debug, Clone)]
pub struct DomainWalker<F> {
    cipher: FeistelCipher<F>,
    domain: u64,
    candidate: u64,
    emitted: u64,
}

impl<F: RoundFunction> DomainWalker<F> {
    /// Derive the bit width from `domain`, seed a cipher and walk.
    ///
    /// `domain == 0` is not an error; the walker is simply empty.
    pub fn new<R: RngCore + ?Sized>(
        domain: u64,
        rounds: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let cipher = FeistelCipher::seeded(bits_for_domain(domain), rounds, rng)?;
        Ok(Self { cipher, domain, candidate: 0, emitted: 0 })
    }

    /// Walk `[0, domain)` through an already-seeded cipher.
    pub fn from_cipher(cipher: FeistelCipher<F>, domain: u64) -> Result<Self, Error> {
        if !cipher.domain_fits(domain) {
            return Err(Error::DomainTooLarge { domain, nbits: cipher.nbits() });
        }
        Ok(Self { cipher, domain, candidate: 0, emitted: 0 })
    }

    /// The domain size this walker covers.
    #[inline]
    pub fn domain(&self) -> u64 {
        self.domain
    }

    /// Values not yet emitted.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.domain - self.emitted
    }
}

impl<F: RoundFunction> Iterator for DomainWalker<F> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.emitted < self.domain {
            let e = self.cipher.encrypt(self.candidate);
            self.candidate = self.candidate.wrapping_add(1);
            if e < self.domain {
                self.emitted += 1;
                return Some(e);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Batched cycle walking: [`LANES`] candidate lanes per step.
///
/// Every lane shares the key and the Feistel structure; all lane
/// counters advance by [`LANES`] each step. For a fixed seed and domain
/// the emitted *set* equals the scalar [`DomainWalker`]'s: batching may
/// reorder emissions but never alters the bijection, drops a value or
/// duplicates one. A pure throughput optimization with no new
/// semantics.
///
/// Lanes are `u32`, so the derived width is capped at
/// [`MAX_BATCH_BITS`]; wider domains fail at construction.
#[cfg(feature = "simd")]
#[cfg_attr(docsrs, doc(cfg(feature = "simd")))]
#[derive(Debug, Clone)]
pub struct BatchWalker<F> {
    cipher: FeistelCipher<F>,
    domain: u64,
    candidate: u64,
    emitted: u64,
    accepted: [u64; LANES],
    len: usize,
    pos: usize,
}

#[cfg(feature = "simd")]
impl<F: LaneRoundFunction> BatchWalker<F> {
    /// Derive the bit width from `domain`, seed a cipher and walk.
    pub fn new<R: RngCore + ?Sized>(
        domain: u64,
        rounds: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let bits = bits_for_domain(domain);
        if bits > MAX_BATCH_BITS {
            return Err(Error::WidthExceeded { bits, max: MAX_BATCH_BITS });
        }
        let cipher = FeistelCipher::seeded(bits, rounds, rng)?;
        Ok(Self {
            cipher,
            domain,
            candidate: 0,
            emitted: 0,
            accepted: [0; LANES],
            len: 0,
            pos: 0,
        })
    }

    /// The domain size this walker covers.
    #[inline]
    pub fn domain(&self) -> u64 {
        self.domain
    }
}

#[cfg(feature = "simd")]
impl<F: LaneRoundFunction> Iterator for BatchWalker<F> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            if self.emitted >= self.domain {
                return None;
            }
            if self.pos < self.len {
                let v = self.accepted[self.pos];
                self.pos += 1;
                self.emitted += 1;
                return Some(v);
            }

            // Refill: encrypt the next LANES candidates and keep the
            // lanes that land inside the domain, in lane order.
            let base = self.candidate;
            self.candidate = self.candidate.wrapping_add(LANES as u64);
            let lanes =
                Simd::from_array(core::array::from_fn(|i| base.wrapping_add(i as u64) as u32));
            let images = backends::simd::encrypt_lanes(&self.cipher, lanes).to_array();

            self.len = 0;
            self.pos = 0;
            for &e in &images {
                if (e as u64) < self.domain {
                    self.accepted[self.len] = e as u64;
                    self.len += 1;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // For blocks narrower than a batch the buffer can hold aliased
        // images the emission cap will never yield; clamp to remaining.
        let buffered = self.len - self.pos;
        let remaining = usize::try_from(self.domain - self.emitted).ok();
        (buffered.min(remaining.unwrap_or(usize::MAX)), remaining)
    }
}
