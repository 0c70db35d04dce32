//! The core generator type and its execution loop.

use crate::error::{GenError, GenResult};
use crate::source::RandomSource;
use std::fmt;

/// One step of a generator's execution: either a finished outcome, or a
/// continuation generator the execution loop should run next.
enum Step<A> {
    Done(GenResult<A>),
    Continue(Generator<A>),
}

type RunFn<A> = dyn Fn(&mut dyn RandomSource) -> Step<A> + Send + Sync;

/// A composable producer of random values of type `A`.
///
/// A `Generator<A>` wraps a function from a [`RandomSource`] to a
/// [`GenResult<A>`]. Nothing is drawn at construction time; execution is
/// deferred until a source is supplied to [`generate`](Generator::generate).
/// Generators are immutable: composing two generators produces a new one and
/// never mutates an existing one, so a generator built once at setup time can
/// be run any number of times against fresh or split sources.
pub struct Generator<A> {
    run: Box<RunFn<A>>,
}

impl<A> fmt::Debug for Generator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

impl<A: 'static> Generator<A> {
    fn from_step(run: impl Fn(&mut dyn RandomSource) -> Step<A> + Send + Sync + 'static) -> Self {
        Self { run: Box::new(run) }
    }

    /// Construct a generator from a raw generation function.
    ///
    /// This is the seam for custom primitives. The function must be a pure
    /// function of the source state: two calls against sources in the same
    /// state must produce the same outcome. Failures are returned, never
    /// panicked.
    pub fn from_fn(
        run: impl Fn(&mut dyn RandomSource) -> GenResult<A> + Send + Sync + 'static,
    ) -> Self {
        Self::from_step(move |source| Step::Done(run(source)))
    }

    /// A generator that always succeeds with a clone of `value`, consuming no
    /// randomness.
    pub fn constant(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::from_fn(move |_| Ok(value.clone()))
    }

    /// A generator that always fails with a clone of `reason`, consuming no
    /// randomness.
    pub fn fail(reason: GenError) -> Self {
        Self::from_fn(move |_| Err(reason.clone()))
    }

    /// Run the generator against a random source.
    ///
    /// This is the sole execution entry point. Execution is an iterative step
    /// loop: each [`bind`](Generator::bind) continuation is returned to this
    /// loop rather than invoked in a nested call, so right-nested recursive
    /// generator definitions (the usual shape of self-referential generators)
    /// execute in constant stack.
    pub fn generate(&self, source: &mut dyn RandomSource) -> GenResult<A> {
        let mut step = (self.run)(&mut *source);
        loop {
            match step {
                Step::Done(result) => return result,
                Step::Continue(next) => step = (next.run)(&mut *source),
            }
        }
    }

    /// Apply `f` to this generator's outcome.
    ///
    /// `f` is invoked only on success; a failure propagates unchanged without
    /// calling `f`.
    pub fn map<B: 'static>(self, f: impl Fn(A) -> B + Send + Sync + 'static) -> Generator<B> {
        Generator::from_step(move |source| Step::Done(self.generate(source).map(&f)))
    }

    /// Sequence a dependent generator after this one.
    ///
    /// Runs this generator and, on success, feeds the value to `f` to obtain
    /// the next generator, which continues on the same source. On failure it
    /// short-circuits without calling `f`.
    ///
    /// The continuation returned by `f` is trampolined, so a generator that
    /// recurses through `f` (a right-nested chain) runs in constant stack no
    /// matter how deep it goes. Nesting on the receiver side instead, as in
    /// `a.bind(..).bind(..)` stacked a thousand deep before any continuation
    /// fires, still grows the call stack by one frame per level; prefer
    /// [`replicate`](crate::replicate) for large repeated structures and
    /// reserve `bind` chains for shallow, bounded sequencing.
    pub fn bind<B: 'static>(
        self,
        f: impl Fn(A) -> Generator<B> + Send + Sync + 'static,
    ) -> Generator<B> {
        Generator::from_step(move |source| match self.generate(source) {
            Ok(value) => Step::Continue(f(value)),
            Err(reason) => Step::Done(Err(reason)),
        })
    }
}
