//! Ordered replication of a generator.

use crate::error::GenError;
use crate::generator::Generator;
use crate::source::RandomSource;

/// Produce an ordered sequence of `n` values from `g`.
///
/// The source is split into `n` independent child streams upfront, in order,
/// and `g` runs against each sequentially. The splits happen regardless of
/// where a failure occurs, so draws made from the parent source after the
/// sequence do not depend on the outcome. The first failure encountered
/// (lowest index) is the reported failure, short-circuiting the remaining
/// elements.
///
/// `n = 0` yields an empty sequence without consuming any randomness. Unlike
/// a chain of [`bind`](Generator::bind) calls, replication is iterative, so
/// arbitrarily large `n` does not grow the call stack.
pub fn replicate<A: 'static>(n: usize, g: Generator<A>) -> Generator<Vec<A>> {
    Generator::from_fn(move |source| {
        if n == 0 {
            return Ok(Vec::new());
        }
        let mut children: Vec<Box<dyn RandomSource>> = Vec::with_capacity(n);
        for _ in 0..n {
            children.push(source.split());
        }
        let mut values = Vec::with_capacity(n);
        for (index, mut child) in children.into_iter().enumerate() {
            match g.generate(&mut *child) {
                Ok(value) => values.push(value),
                Err(reason) => {
                    return Err(GenError::Propagated {
                        combinator: "replicate",
                        index,
                        reason: Box::new(reason),
                    })
                }
            }
        }
        Ok(values)
    })
}
