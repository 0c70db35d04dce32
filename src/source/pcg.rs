use crate::source::RandomSource;
use rand::rngs::OsRng;
use rand_core::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The default [`RandomSource`], backed by a permuted congruential generator.
#[derive(Clone, Debug)]
pub struct PcgSource {
    rng: Pcg64Mcg,
}

impl PcgSource {
    /// Construct a new `PcgSource` with a freshly seeded RNG.
    pub fn new() -> Self {
        Self::from_seed(OsRng.next_u64())
    }

    /// Construct a new `PcgSource` from a given seed.
    ///
    /// Two sources initialized with the same seed produce the same stream of
    /// draws and the same children under [`split`](RandomSource::split).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl Default for PcgSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for PcgSource {
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn split(&mut self) -> Box<dyn RandomSource> {
        // Advances the parent by one draw; `seed_from_u64` mixes it through
        // SplitMix64, so the child stream is decorrelated from the parent's.
        Box::new(Self::from_seed(self.rng.next_u64()))
    }
}
