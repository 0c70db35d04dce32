//! Uniform and weighted selection among alternatives.

use crate::error::GenError;
use crate::generator::Generator;
use smallvec::SmallVec;

/// A non-negative weight paired with the generator it selects.
pub type WeightedOption<A> = (f64, Generator<A>);

/// Cumulative normalized weights. Frequency tables are nearly always small,
/// so the partition lives inline.
type Partition = SmallVec<[f64; 8]>;

/// Choose uniformly among `options`, then delegate to the chosen generator.
///
/// An empty `options` fails with an empty-options error, checked before any
/// draw is consumed from the source. Failures of the chosen generator
/// propagate unchanged.
pub fn choice<A: 'static>(options: Vec<Generator<A>>) -> Generator<A> {
    Generator::from_fn(move |source| {
        if options.is_empty() {
            return Err(GenError::EmptyOptions { combinator: "choice" });
        }
        let index = source.next_bounded(options.len() as u64) as usize;
        options[index].generate(source)
    })
}

/// Choose uniformly among literal `values`.
///
/// Always succeeds once constructed with at least one value; an empty
/// `values` fails the same way as [`choice`].
pub fn pick_one<A>(values: Vec<A>) -> Generator<A>
where
    A: Clone + Send + Sync + 'static,
{
    Generator::from_fn(move |source| {
        if values.is_empty() {
            return Err(GenError::EmptyOptions { combinator: "pick_one" });
        }
        let index = source.next_bounded(values.len() as u64) as usize;
        Ok(values[index].clone())
    })
}

/// Choose among `options` with probability proportional to each weight.
///
/// Weights are normalized by their sum into a cumulative partition of
/// `[0, 1)`, built once at construction, with one interval per option in
/// list order; a single uniform draw selects the first option whose interval
/// contains it. A draw landing exactly on a partition boundary resolves to
/// the earlier of the two adjacent options, and an option with weight zero
/// owns an empty interval and is never selected.
///
/// An empty `options`, or one whose weights sum to zero, fails with an
/// empty-options error before any draw is consumed. Failures of the chosen
/// generator propagate unchanged.
///
/// # Panics
///
/// Panics at construction if any weight is negative or non-finite.
pub fn frequency<A: 'static>(options: Vec<WeightedOption<A>>) -> Generator<A> {
    for (weight, _) in &options {
        assert!(
            weight.is_finite() && *weight >= 0.0,
            "frequency weights must be finite and non-negative, got {weight}"
        );
    }
    let partition = cumulative_partition(options.iter().map(|(weight, _)| *weight));
    Generator::from_fn(move |source| {
        let partition = match &partition {
            Some(partition) => partition,
            None => return Err(GenError::EmptyOptions { combinator: "frequency" }),
        };
        let draw = source.next_double();
        let index = select_index(partition, draw);
        options[index].1.generate(source)
    })
}

/// Independently include each element of `values` with probability one-half.
///
/// See [`sample_bernoulli_with`] for the general form.
pub fn sample_bernoulli<A>(values: Vec<A>) -> Generator<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
{
    sample_bernoulli_with(values, 0.5)
}

/// Independently include each element of `values` with the given probability.
///
/// Each element gets its own Bernoulli trial, so the output length is random
/// in `[0, values.len()]`; survivors keep their input order. Never fails: an
/// empty result is a valid outcome.
///
/// # Panics
///
/// Panics at construction if `probability` is not in `[0, 1]`.
pub fn sample_bernoulli_with<A>(values: Vec<A>, probability: f64) -> Generator<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
{
    assert!(
        (0.0..=1.0).contains(&probability),
        "inclusion probability must lie in [0, 1], got {probability}"
    );
    Generator::from_fn(move |source| {
        let mut included = Vec::new();
        for value in &values {
            if source.next_double() < probability {
                included.push(value.clone());
            }
        }
        Ok(included)
    })
}

/// Cumulative normalized weights, or `None` when the weights cannot form a
/// distribution (no options, or a zero or overflowing total weight).
fn cumulative_partition(weights: impl Iterator<Item = f64>) -> Option<Partition> {
    let weights: Partition = weights.collect();
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || !total.is_finite() || total <= 0.0 {
        return None;
    }
    let mut cumulative = 0.0;
    Some(
        weights
            .iter()
            .map(|weight| {
                cumulative += weight / total;
                cumulative
            })
            .collect(),
    )
}

/// Index of the first option with a non-empty interval whose upper cumulative
/// bound reaches `draw`. A draw exactly on a boundary therefore lands on the
/// earlier of the two adjacent options, and zero-weight options (whose bound
/// equals their predecessor's) are skipped.
///
/// Rounding can leave the final cumulative bound a hair under 1.0; a draw
/// beyond every bound falls back to the last option with a non-empty
/// interval.
// TODO switch the scan to a binary search if frequency tables ever get large.
fn select_index(partition: &Partition, draw: f64) -> usize {
    let mut fallback = 0;
    let mut previous = 0.0;
    for (index, &bound) in partition.iter().enumerate() {
        if bound > previous {
            if draw <= bound {
                return index;
            }
            fallback = index;
        }
        previous = bound;
    }
    fallback
}
