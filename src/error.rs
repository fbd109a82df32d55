use std::convert::Infallible;

use thiserror::Error;

use crate::Float;

/// Errors raised while validating the inputs of an optimization.
///
/// All of these are detected before any particle is created, so a failed run never produces a
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The domain is empty, inverted, or not finite.
    #[error("invalid domain [{low}, {high}]: bounds must be finite and satisfy low < high")]
    InvalidDomain {
        /// The lower bound that was given.
        low: Float,
        /// The upper bound that was given.
        high: Float,
    },
    /// The target is neither `minimize`, `maximize` nor a finite number.
    #[error("invalid target {0:?}: expected \"minimize\", \"maximize\", or a finite number")]
    InvalidTarget(String),
    /// Two coordinate vectors (or a vector and the configured dimension) have different lengths.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The expected number of dimensions.
        expected: usize,
        /// The number of dimensions that was found.
        found: usize,
    },
    /// A configuration parameter is out of range.
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// The name of the offending parameter.
        parameter: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter,
            reason: reason.into(),
        }
    }
}

/// The error type returned by an optimization run.
///
/// The generic `E` is the error type of the [`CostFunction`](crate::traits::CostFunction) being
/// optimized, which is [`Infallible`] for functions that cannot fail.
#[derive(Debug, Error)]
pub enum PsoError<E = Infallible> {
    /// The run was rejected before it started.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The cost function returned an error.
    #[error("cost function evaluation failed: {0}")]
    Evaluation(E),
}

impl<E> PsoError<E> {
    /// Returns the [`ValidationError`] if this error was raised during validation.
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Evaluation(_) => None,
        }
    }
}
