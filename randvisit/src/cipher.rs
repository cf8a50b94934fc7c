//======================================================================
// src/cipher.rs
// The generic Feistel engine: a bijection on [0, 2^nbits) for any
// deterministic round function. Evaluation is delegated to the
// backends module.
//======================================================================

use rand_core::RngCore;

use crate::backends;
use crate::consts::MAX_BITS;
use crate::error::Error;
use crate::round::RoundFunction;

/// A keyed permutation of `[0, 2^nbits)` built from a Feistel network.
///
/// `encrypt`/`decrypt` form a total bijection pair for every provider,
/// every key and every round count, including `rounds == 0` (the
/// identity). Correctness is structural: each round is a self-inverse
/// "XOR one half with a function of the other, then swap" step, so
/// running the rounds in reverse order undoes them.
///
/// The cipher is seeded exactly once: there is no key mutator, so
/// re-seeding is unrepresentable. After construction all methods take
/// `&self` and are safe for concurrent reads.
#[derive(Debug, Clone)]
pub struct FeistelCipher<F> {
    pub(crate) half_bits: u32,
    pub(crate) mask: u32,
    pub(crate) rounds: usize,
    pub(crate) round_fn: F,
}

fn check_width(nbits: u32) -> Result<(), Error> {
    if nbits > MAX_BITS {
        return Err(Error::WidthExceeded { bits: nbits, max: MAX_BITS });
    }
    if nbits % 2 != 0 {
        return Err(Error::OddWidth(nbits));
    }
    Ok(())
}

impl<F: RoundFunction> FeistelCipher<F> {
    /// Build a cipher around an already-keyed round function.
    ///
    /// `nbits` must be even and at most [`MAX_BITS`].
    pub fn from_round_fn(nbits: u32, rounds: usize, round_fn: F) -> Result<Self, Error> {
        check_width(nbits)?;
        let half_bits = nbits / 2;
        // half_bits <= 32, so the shift is done in u64 and narrowed.
        let mask = ((1u64 << half_bits) - 1) as u32;
        Ok(Self { half_bits, mask, rounds, round_fn })
    }

    /// Build a cipher, drawing the provider's key material from `rng`.
    ///
    /// The width is validated before any bits are drawn.
    pub fn seeded<R: RngCore + ?Sized>(
        nbits: u32,
        rounds: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        check_width(nbits)?;
        Self::from_round_fn(nbits, rounds, F::sample(rounds, rng))
    }

    /// Block width in bits.
    #[inline]
    pub fn nbits(&self) -> u32 {
        self.half_bits * 2
    }

    /// Round count.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Whether `[0, domain)` fits inside this cipher's block.
    pub(crate) fn domain_fits(&self, domain: u64) -> bool {
        self.nbits() >= 64 || domain <= 1u64 << self.nbits()
    }

    /// Map `x` in `[0, 2^nbits)` forward through the permutation.
    #[inline]
    pub fn encrypt(&self, x: u64) -> u64 {
        backends::soft::transform(self, x, false)
    }

    /// Invert [`encrypt`](Self::encrypt).
    #[inline]
    pub fn decrypt(&self, x: u64) -> u64 {
        backends::soft::transform(self, x, true)
    }
}
