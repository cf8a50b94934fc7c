//======================================================================
// src/stream.rs
// Endless permutation stream: the cipher applied to a wrapping counter.
// Each period of 2^nbits outputs is a full permutation of the block
// space, so any window of that length contains no duplicates.
//======================================================================

use rand_core::RngCore;

use crate::cipher::FeistelCipher;
use crate::error::Error;
use crate::round::RoundFunction;

/// Infinite stream of pseudorandom words with a no-repeat window.
///
/// Feeding `0, 1, 2, …` through the cipher yields every value of
/// `[0, 2^nbits)` exactly once per period; the counter then wraps and
/// the same permutation replays. Useful as a cheap source of guaranteed
/// collision-free identifiers.
#[derive(Debug, Clone)]
pub struct CounterStream<F> {
    cipher: FeistelCipher<F>,
    counter: u64,
}

impl<F: RoundFunction> CounterStream<F> {
    /// Stream over an already-seeded cipher, starting at counter zero.
    pub fn from_cipher(cipher: FeistelCipher<F>) -> Self {
        Self { cipher, counter: 0 }
    }

    /// Seed a fresh cipher of the given width and stream it.
    pub fn seeded<R: RngCore + ?Sized>(
        nbits: u32,
        rounds: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        Ok(Self::from_cipher(FeistelCipher::seeded(nbits, rounds, rng)?))
    }

    /// Block width in bits; the period is `2^nbits` outputs.
    #[inline]
    pub fn nbits(&self) -> u32 {
        self.cipher.nbits()
    }
}

impl<F: RoundFunction> Iterator for CounterStream<F> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let nbits = self.cipher.nbits();
        let x = if nbits >= 64 {
            self.counter
        } else {
            self.counter & ((1u64 << nbits) - 1)
        };
        self.counter = self.counter.wrapping_add(1);
        Some(self.cipher.encrypt(x))
    }
}
