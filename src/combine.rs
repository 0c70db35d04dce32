//! Joining independent generators with a combining function.

use crate::error::GenError;
use crate::generator::Generator;

/// Join two independent generators with `f`.
///
/// The incoming source is split into one child stream per operand, in
/// declaration order, before anything is evaluated. Operands then run
/// left-to-right, each against its own child, so their outcomes are
/// uncorrelated and draws made from the parent source after the combined
/// generator do not depend on the operands at all.
///
/// Evaluation short-circuits: once an operand fails, later operands are not
/// evaluated. Because their streams were already split, short-circuiting is
/// unobservable through the source; only the side effects of evaluating
/// doomed operands are skipped. The first failing operand (lowest index)
/// determines the reported failure, annotated with its position.
pub fn combine<A: 'static, B: 'static, C: 'static>(
    ga: Generator<A>,
    gb: Generator<B>,
    f: impl Fn(A, B) -> C + Send + Sync + 'static,
) -> Generator<C> {
    Generator::from_fn(move |source| {
        let mut sa = source.split();
        let mut sb = source.split();
        let a = ga.generate(&mut *sa).map_err(|reason| propagated(0, reason))?;
        let b = gb.generate(&mut *sb).map_err(|reason| propagated(1, reason))?;
        Ok(f(a, b))
    })
}

/// Join three independent generators with `f`.
///
/// See [`combine`] for the stream-splitting and short-circuit contract.
pub fn combine3<A: 'static, B: 'static, C: 'static, D: 'static>(
    ga: Generator<A>,
    gb: Generator<B>,
    gc: Generator<C>,
    f: impl Fn(A, B, C) -> D + Send + Sync + 'static,
) -> Generator<D> {
    Generator::from_fn(move |source| {
        let mut sa = source.split();
        let mut sb = source.split();
        let mut sc = source.split();
        let a = ga.generate(&mut *sa).map_err(|reason| propagated(0, reason))?;
        let b = gb.generate(&mut *sb).map_err(|reason| propagated(1, reason))?;
        let c = gc.generate(&mut *sc).map_err(|reason| propagated(2, reason))?;
        Ok(f(a, b, c))
    })
}

/// Join four independent generators with `f`.
///
/// See [`combine`] for the stream-splitting and short-circuit contract.
pub fn combine4<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static>(
    ga: Generator<A>,
    gb: Generator<B>,
    gc: Generator<C>,
    gd: Generator<D>,
    f: impl Fn(A, B, C, D) -> E + Send + Sync + 'static,
) -> Generator<E> {
    Generator::from_fn(move |source| {
        let mut sa = source.split();
        let mut sb = source.split();
        let mut sc = source.split();
        let mut sd = source.split();
        let a = ga.generate(&mut *sa).map_err(|reason| propagated(0, reason))?;
        let b = gb.generate(&mut *sb).map_err(|reason| propagated(1, reason))?;
        let c = gc.generate(&mut *sc).map_err(|reason| propagated(2, reason))?;
        let d = gd.generate(&mut *sd).map_err(|reason| propagated(3, reason))?;
        Ok(f(a, b, c, d))
    })
}

fn propagated(index: usize, reason: GenError) -> GenError {
    GenError::Propagated {
        combinator: "combine",
        index,
        reason: Box::new(reason),
    }
}
