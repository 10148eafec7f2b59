//! Random index source for the sampler.
//!
//! The sampler never reaches for a global generator; callers hand it a
//! [`RandomSource`]. Production code uses [`SecureRandom`], which only
//! accepts generators marked [`CryptoRng`].

use rand::rngs::ThreadRng;
use rand::{CryptoRng, Rng};

/// Something that can pick an index uniformly from `0..bound`.
pub trait RandomSource {
    /// Return an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Cryptographically secure index source.
///
/// Defaults to the thread-local generator, which is seeded from the
/// operating system and periodically reseeded.
pub struct SecureRandom<R: CryptoRng = ThreadRng>(R);

impl SecureRandom {
    pub fn new() -> Self {
        SecureRandom(rand::rng())
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRng> SecureRandom<R> {
    /// Wrap a specific secure generator (a seeded `StdRng` in tests).
    pub fn from_rng(rng: R) -> Self {
        SecureRandom(rng)
    }
}

impl<R: CryptoRng> RandomSource for SecureRandom<R> {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        // Rejection sampling inside random_range keeps this unbiased.
        self.0.random_range(0..bound)
    }
}
