#![deny(warnings, missing_debug_implementations, missing_docs)]

//! Confect is a library for composable random generation of structured test
//! data and simulation inputs.
//!
//! A [`Generator<A>`] produces pseudo-random instances of arbitrary types by
//! combining smaller generators. Callers build generators out of primitives
//! and combinators; execution is deferred until a random source is supplied
//! to [`Generator::generate`], and the same source state always reproduces
//! the same value, which makes randomized tests and simulations replayable.
//!
//! ## Building generators
//!
//! Primitives draw single values ([`int_range`], [`double_range`],
//! [`pick_one`]); combinators assemble them into structures ([`combine`],
//! [`replicate`], [`choice`], [`frequency`], [`sample_bernoulli`]) or
//! transform their output ([`Generator::map`], [`Generator::bind`]):
//!
//! ```
//! use confect::{combine, int_range, pick_one, Sampler};
//!
//! // A generator for a currency position. Nothing is drawn at construction;
//! // the generator can be run any number of times.
//! let position = combine(
//!     pick_one(vec!["USD", "EUR", "JPY"]),
//!     int_range(1, 1_000_000),
//!     |currency, minor_units| (currency, minor_units),
//! );
//!
//! let mut sampler = Sampler::from_seed(0x5eed);
//! let (currency, minor_units) = sampler.sample(&position).unwrap();
//! assert!(["USD", "EUR", "JPY"].contains(&currency));
//! assert!((1..=1_000_000).contains(&minor_units));
//! ```
//!
//! [`Generator::bind`] sequences a dependent generator based on a prior
//! result:
//!
//! ```
//! use confect::{generate_seeded, int_range, replicate};
//!
//! // Draw a length, then that many bytes.
//! let bytes = int_range(0, 8).bind(|len| replicate(len as usize, int_range(0, 255)));
//! let len = generate_seeded(&bytes.map(|bytes| bytes.len()), 1).unwrap();
//! assert!(len <= 8);
//! ```
//!
//! ## Determinism and replay
//!
//! Generation is a pure function of the generator definition and the source
//! state:
//!
//! ```
//! use confect::{generate_seeded, int_range, replicate};
//!
//! let rolls = replicate(5, int_range(1, 6));
//! assert_eq!(generate_seeded(&rolls, 42), generate_seeded(&rolls, 42));
//! ```
//!
//! A [`Sampler`] runs many rounds, dealing each round its own seed. When a
//! round fails, the [`SampleError`] carries that seed in serialized form, and
//! [`replay`] reproduces the failure deterministically:
//!
//! ```
//! use confect::{choice, replay, GenError, Generator, Sampler};
//!
//! let doomed: Generator<u64> = choice(vec![]);
//! let mut sampler = Sampler::from_seed(7);
//! let failure = sampler.sample(&doomed).unwrap_err();
//! assert_eq!(failure.reason, GenError::EmptyOptions { combinator: "choice" });
//!
//! let replayed = replay(&doomed, &failure.encoded_seed).unwrap_err();
//! assert_eq!(replayed, failure.reason);
//! ```
//!
//! ## Failure handling
//!
//! No generator panics on a generation failure; every failure is a returned
//! [`GenError`], and every combinator short-circuits once a failure is known
//! (see the [`GenError`] docs for which combinators annotate the failure with
//! their position). A failed top-level sample is an ordinary `Err` for the
//! caller to inspect or turn into a hard stop.
//!
//! ## Random sources
//!
//! Generators draw from the [`source::RandomSource`] trait, a splittable
//! stream abstraction: `split()` derives an independent child stream, which
//! is how combinators obtain several uncorrelated draws from one source. The
//! default implementation, [`source::PcgSource`], is backed by
//! [`rand_pcg::Pcg64Mcg`]; the library itself implements no pseudo-random
//! algorithm. Because sibling streams never alias, a caller may evaluate
//! sibling branches of a combinator on separate threads, though the library
//! schedules no concurrency itself.

mod combine;
mod error;
mod generator;
mod range;
mod sample;
mod select;
mod sequence;

pub mod source;

pub use combine::{combine, combine3, combine4};
pub use error::{GenError, GenResult};
pub use generator::Generator;
pub use range::{double_range, int_range};
pub use sample::{generate_seeded, replay, SampleError, Sampler, SEED_ENV_VAR};
pub use select::{
    choice, frequency, pick_one, sample_bernoulli, sample_bernoulli_with, WeightedOption,
};
pub use sequence::replicate;
