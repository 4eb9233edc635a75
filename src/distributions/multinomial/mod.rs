//! Multinomial distribution over class-count vectors.
//!
//! `Multinomial(total_count, probs)` describes the counts of each of `k`
//! classes after `total_count` independent categorical trials:
//!
//! ```text
//! P(counts) = n! / (c_0! ... c_{k-1}!) * p_0^c_0 * ... * p_{k-1}^c_{k-1}
//! ```
//!
//! Parameters are batched. `total_count` has shape `[..]` and `probs` (or
//! `logits`) has shape `[.., k]`; the batch shape is the broadcast of
//! `total_count` with the leading axes of `probs`, and the event shape is `[k]`.
//!
//! # Example
//!
//! ```
//! use numdist::prelude::*;
//!
//! let client = CpuClient::new();
//! let dist = Multinomial::builder(Tensor::scalar(4.0f64))
//!     .probs(Tensor::from_slice(&[0.2, 0.3, 0.5], &[3]))
//!     .validate_args(true)
//!     .build(&client)?;
//!
//! assert_eq!(dist.event_shape(), &[3]);
//! let counts = Tensor::from_slice(&[1.0, 1.0, 2.0], &[3]);
//! let p = dist.prob(&counts)?.item()?;
//! // 4!/(1! 1! 2!) * 0.2 * 0.3 * 0.25 = 0.18
//! assert!((p - 0.18).abs() < 1e-12);
//! # Ok::<(), numdist::error::Error>(())
//! ```

mod builder;
mod density;
mod moments;
mod sample;

pub use builder::MultinomialBuilder;

use super::checks::embed_check_nonnegative_integer_form;
use super::params::{Parameterization, logits_and_probs};
use super::{Distribution, DistributionOptions, ReparameterizationType};
use crate::dtype::FloatElement;
use crate::error::{Error, Result};
use crate::ops::TensorEngine;
use crate::runtime::cpu::CpuClient;
use crate::tensor::{Shape, Tensor};
use tracing::{debug, debug_span};

/// A batch of multinomial distributions
///
/// Immutable once built: the normalized `logits` and `probs`, the mean and
/// the batch/event shapes are all computed at construction. Cloning shares
/// the underlying tensors.
#[derive(Clone, Debug)]
pub struct Multinomial<T: FloatElement = f64, C: TensorEngine = CpuClient> {
    client: C,
    total_count: Tensor<T>,
    logits: Tensor<T>,
    probs: Tensor<T>,
    parameters: Parameterization<T>,
    mean: Tensor<T>,
    batch_shape: Shape,
    event_shape: [usize; 1],
    options: DistributionOptions,
}

impl<T: FloatElement> Multinomial<T> {
    /// Start building a distribution with `total_count` trials
    pub fn builder(total_count: Tensor<T>) -> MultinomialBuilder<T> {
        MultinomialBuilder::new(total_count)
    }
}

impl<T: FloatElement, C: TensorEngine> Multinomial<T, C> {
    /// Construct a multinomial distribution
    ///
    /// # Arguments
    ///
    /// * `client` - Engine used for every computation on this distribution
    /// * `total_count` - Number of trials, shape `[..]`
    /// * `params` - Class logits or probabilities, shape `[.., k]`
    /// * `options` - Validation, NaN policy and diagnostic name
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the parameter tensor is a scalar or has an empty
    ///   last axis
    /// - `BroadcastError` if `total_count` does not broadcast against the
    ///   batch axes of the parameters
    /// - With `validate_args`: `InvalidArgument` if `total_count` is negative
    ///   or fractional, `probs` is negative or does not sum to one, or `k < 2`
    pub fn new(
        client: &C,
        total_count: Tensor<T>,
        params: Parameterization<T>,
        options: DistributionOptions,
    ) -> Result<Self> {
        let span = debug_span!("distribution", name = %options.name);
        let _enter = span.enter();

        let validate = options.validate_args;
        let total_count = embed_check_nonnegative_integer_form(&total_count, "total_count", validate)?;
        let (logits, probs) = logits_and_probs(client, &params, validate)?;

        let k = probs.shape()[probs.ndim() - 1];
        if validate && k < 2 {
            return Err(Error::invalid_argument(
                params.kind(),
                format!("must have at least 2 classes, got {k}"),
            ));
        }

        let mean = client.mul(&total_count.unsqueeze(-1)?, &probs)?;
        let batch_shape: Shape = mean.shape()[..mean.ndim() - 1].iter().copied().collect();

        debug!(
            batch_shape = ?batch_shape.as_slice(),
            event_shape = k,
            parameterization = params.kind(),
            validate_args = validate,
            "constructed multinomial"
        );

        Ok(Self {
            client: client.clone(),
            total_count,
            logits,
            probs,
            parameters: params,
            mean,
            batch_shape,
            event_shape: [k],
            options,
        })
    }

    /// Number of trials, as given at construction
    pub fn total_count(&self) -> &Tensor<T> {
        &self.total_count
    }

    /// Log-probabilities of each class
    ///
    /// Equal to the logits given at construction, or `ln(probs)`.
    pub fn logits(&self) -> &Tensor<T> {
        &self.logits
    }

    /// Probabilities of each class
    pub fn probs(&self) -> &Tensor<T> {
        &self.probs
    }

    /// The construction inputs: `total_count` and the parameterization
    pub fn parameters(&self) -> (&Tensor<T>, &Parameterization<T>) {
        (&self.total_count, &self.parameters)
    }

    /// Number of classes `k`
    pub fn num_classes(&self) -> usize {
        self.event_shape[0]
    }

    /// The engine this distribution computes with
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<T: FloatElement, C: TensorEngine> Distribution<T> for Multinomial<T, C> {
    fn options(&self) -> &DistributionOptions {
        &self.options
    }

    fn reparameterization_type(&self) -> ReparameterizationType {
        ReparameterizationType::NotReparameterized
    }

    fn batch_shape(&self) -> &[usize] {
        &self.batch_shape
    }

    fn event_shape(&self) -> &[usize] {
        &self.event_shape
    }

    fn sample_n(&self, n: usize, seed: Option<u64>) -> Result<Tensor<T>> {
        self.sample_counts(n, seed)
    }

    fn log_prob(&self, counts: &Tensor<T>) -> Result<Tensor<T>> {
        self.log_prob_counts(counts)
    }

    fn prob(&self, counts: &Tensor<T>) -> Result<Tensor<T>> {
        self.client.exp(&self.log_prob_counts(counts)?)
    }

    fn mean(&self) -> Result<Tensor<T>> {
        self.mean_stat()
    }

    fn variance(&self) -> Result<Tensor<T>> {
        self.variance_stat()
    }

    fn stddev(&self) -> Result<Tensor<T>> {
        self.client.sqrt(&self.variance_stat()?)
    }

    fn covariance(&self) -> Result<Tensor<T>> {
        self.covariance_stat()
    }
}
