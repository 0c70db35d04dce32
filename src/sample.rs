//! Repeated sampling with deterministic failure replay.

use crate::error::{GenError, GenResult};
use crate::generator::Generator;
use crate::source::seed::{deserialize_seed, serialize_seed};
use crate::source::PcgSource;
use rand::rngs::OsRng;
use rand_core::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use thiserror::Error;
use tracing::{debug, span, Level};

/// Environment variable consulted by [`Sampler::new`] for a fixed master
/// seed, making freshly constructed samplers reproducible across runs.
pub const SEED_ENV_VAR: &str = "CONFECT_SEED";

fn seed_from_env(default: u64) -> u64 {
    match std::env::var(SEED_ENV_VAR) {
        Ok(var) => var
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("{SEED_ENV_VAR} must hold a u64 seed, got {var:?}")),
        Err(_) => default,
    }
}

/// A `Sampler` repeatedly runs generators, dealing a fresh seed to each
/// sampling round so that any failing round can be reproduced from its seed
/// alone.
///
/// The round seeds come from a master RNG owned by the sampler: two samplers
/// constructed from the same master seed deal the same sequence of round
/// seeds and therefore produce the same sequence of samples for the same
/// generators.
#[derive(Debug)]
pub struct Sampler {
    rng: Pcg64Mcg,
}

impl Sampler {
    /// Construct a new `Sampler` with a freshly seeded master RNG.
    ///
    /// If the `CONFECT_SEED` environment variable is set, its value is used
    /// as the master seed instead.
    pub fn new() -> Self {
        Self::from_seed(seed_from_env(OsRng.next_u64()))
    }

    /// Construct a new `Sampler` from a given master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Run one sampling round of `generator`.
    ///
    /// On failure the returned [`SampleError`] carries the round seed in
    /// serialized form; pass it to [`replay`] to reproduce the failure.
    pub fn sample<A: 'static>(&mut self, generator: &Generator<A>) -> Result<A, SampleError> {
        let seed = self.rng.next_u64();
        span!(Level::DEBUG, "sample", seed).in_scope(|| {
            let mut source = PcgSource::from_seed(seed);
            generator.generate(&mut source).map_err(|reason| {
                let encoded_seed = serialize_seed(seed);
                debug!(%encoded_seed, %reason, "sampling round failed");
                SampleError { encoded_seed, reason }
            })
        })
    }

    /// Run `count` sampling rounds of `generator`, collecting the values in
    /// order. Stops at the first failing round.
    pub fn sample_n<A: 'static>(
        &mut self,
        generator: &Generator<A>,
        count: usize,
    ) -> Result<Vec<A>, SampleError> {
        (0..count).map(|_| self.sample(generator)).collect()
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

/// A failed sampling round, carrying the seed needed to reproduce it.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("generation failed: {reason}\nfailing seed: \"{encoded_seed}\"\npass that seed to `confect::replay` to reproduce the failure")]
pub struct SampleError {
    /// Serialized seed of the failing round.
    pub encoded_seed: String,
    /// The generation failure itself.
    pub reason: GenError,
}

/// Re-run a single sampling round from a serialized seed, usually taken from
/// a failing [`SampleError`].
///
/// As long as the generator definition is unchanged, replaying a failing
/// round's seed reproduces its failure exactly.
///
/// # Panics
///
/// Panics if `encoded_seed` is not a seed string produced by this library.
pub fn replay<A: 'static>(generator: &Generator<A>, encoded_seed: &str) -> GenResult<A> {
    let seed = deserialize_seed(encoded_seed).expect("invalid seed");
    generate_seeded(generator, seed)
}

/// Run `generator` once against a fresh source built from `seed`.
pub fn generate_seeded<A: 'static>(generator: &Generator<A>, seed: u64) -> GenResult<A> {
    let mut source = PcgSource::from_seed(seed);
    generator.generate(&mut source)
}
