//! Parameter normalization for categorical-family distributions

use super::checks::{assert_near, assert_non_negative, assert_rank_at_least};
use crate::dtype::FloatElement;
use crate::error::{Error, Result};
use crate::ops::TensorEngine;
use crate::tensor::Tensor;

/// The two ways to specify class probabilities
///
/// Both forms are normalized to a `(logits, probs)` pair by
/// [`logits_and_probs`], so either can be read back after construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Parameterization<T: FloatElement = f64> {
    /// Unnormalized log-probabilities; `probs = softmax(logits)`
    Logits(Tensor<T>),
    /// Probabilities summing to one along the last axis; `logits = ln(probs)`
    Probs(Tensor<T>),
}

impl<T: FloatElement> Parameterization<T> {
    /// Build from two optional inputs, exactly one of which must be set
    ///
    /// # Errors
    ///
    /// `Configuration` if both or neither are given.
    pub fn from_options(logits: Option<Tensor<T>>, probs: Option<Tensor<T>>) -> Result<Self> {
        match (logits, probs) {
            (Some(logits), None) => Ok(Self::Logits(logits)),
            (None, Some(probs)) => Ok(Self::Probs(probs)),
            (Some(_), Some(_)) => Err(Error::configuration(
                "must pass probs or logits, but not both",
            )),
            (None, None) => Err(Error::configuration(
                "must pass probs or logits, but not neither",
            )),
        }
    }

    /// The parameter tensor as given
    pub fn tensor(&self) -> &Tensor<T> {
        match self {
            Self::Logits(t) | Self::Probs(t) => t,
        }
    }

    /// "logits" or "probs"
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Logits(_) => "logits",
            Self::Probs(_) => "probs",
        }
    }
}

/// Normalize a parameterization to a consistent `(logits, probs)` pair
///
/// Class probabilities live on the last axis, which must exist and be
/// non-empty. Given logits, `probs = softmax(logits)`; given probs,
/// `logits = ln(probs)` (zero probabilities map to `-inf`, which softmax maps
/// back to zero).
///
/// With `validate_args`, probs must be non-negative and each row must sum to
/// one within [`FloatElement::sum_tolerance`] (absolute plus relative).
pub fn logits_and_probs<T: FloatElement, C: TensorEngine>(
    client: &C,
    params: &Parameterization<T>,
    validate_args: bool,
) -> Result<(Tensor<T>, Tensor<T>)> {
    let arg = params.kind();
    let tensor = params.tensor();
    assert_rank_at_least(tensor, 1, arg)?;
    if tensor.size(-1) == Some(0) {
        return Err(Error::invalid_argument(arg, "last dimension must be non-empty"));
    }

    match params {
        Parameterization::Logits(logits) => {
            let probs = client.softmax(logits, -1)?;
            Ok((logits.clone(), probs))
        }
        Parameterization::Probs(probs) => {
            if validate_args {
                assert_non_negative(probs, "probs")?;
                let sums = client.sum(probs, &[probs.ndim() - 1], false)?;
                let tol = T::sum_tolerance();
                assert_near(client, &sums, &Tensor::scalar(T::one()), tol + tol, "probs")?;
            }
            let logits = client.log(probs)?;
            Ok((logits, probs.clone()))
        }
    }
}

/// Log of the multinomial coefficient `n! / prod(counts_j!)`
///
/// `counts` holds class counts on its last axis; `n` broadcasts against the
/// remaining (batch) axes. Factorials are computed as `lgamma(x + 1)`, so
/// non-integer inputs are accepted.
pub fn log_combinations<T: FloatElement, C: TensorEngine>(
    client: &C,
    n: &Tensor<T>,
    counts: &Tensor<T>,
) -> Result<Tensor<T>> {
    assert_rank_at_least(counts, 1, "counts")?;

    let log_n_factorial = client.lgamma(&client.add_scalar(n, 1.0)?)?;
    let log_count_factorials = client.lgamma(&client.add_scalar(counts, 1.0)?)?;
    let sum_log_count_factorials = client.sum(&log_count_factorials, &[counts.ndim() - 1], false)?;

    client.sub(&log_n_factorial, &sum_log_count_factorials)
}
