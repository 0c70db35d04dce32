//! Failure representation for generators.
//!
//! Failures are produced, not thrown: every combinator detects inner failures
//! and surfaces them as [`GenResult`] values, so a failed generation never
//! escapes as a panic.

use thiserror::Error;

/// The outcome of running a generator: a value or a generation failure.
pub type GenResult<A> = Result<A, GenError>;

/// A failure produced while running a generator.
///
/// Combinators that delegate to a single inner generator (`map`, `bind`,
/// `choice`, `frequency`) pass an inner failure through unchanged. Combinators
/// that run several constituents (`combine`, `replicate`) wrap it in
/// [`GenError::Propagated`], recording which combinator observed it and at
/// which operand position.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GenError {
    /// A selection combinator was invoked with no selectable alternatives.
    ///
    /// Also covers a `frequency` table whose weights sum to zero: every
    /// option then has zero selection probability, so nothing is selectable.
    #[error("{combinator} invoked with no selectable alternatives")]
    EmptyOptions {
        /// The combinator that had nothing to select from.
        combinator: &'static str,
    },

    /// An integer range whose low bound exceeds its high bound.
    #[error("invalid integer range: low {low} exceeds high {high}")]
    InvalidIntRange {
        /// Low bound (inclusive).
        low: i64,
        /// High bound (inclusive).
        high: i64,
    },

    /// A floating-point range whose low bound does not precede its high
    /// bound, including ranges with a NaN bound.
    #[error("invalid floating-point range: low {low} does not precede high {high}")]
    InvalidDoubleRange {
        /// Low bound (inclusive).
        low: f64,
        /// High bound (exclusive).
        high: f64,
    },

    /// An inner failure observed by a multi-operand combinator.
    ///
    /// The inner reason is carried unchanged; only the observing combinator
    /// and the operand position are added.
    #[error("{combinator} failed at operand {index}: {reason}")]
    Propagated {
        /// The combinator that observed the failure.
        combinator: &'static str,
        /// Zero-based position of the failing operand or element.
        index: usize,
        /// The failure produced by the inner generator.
        reason: Box<GenError>,
    },
}

impl GenError {
    /// The innermost failure, stripped of any [`GenError::Propagated`]
    /// annotations added along the way.
    pub fn root_cause(&self) -> &GenError {
        match self {
            GenError::Propagated { reason, .. } => reason.root_cause(),
            other => other,
        }
    }
}
