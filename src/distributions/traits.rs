//! The interface shared by batched distributions.

use super::DistributionOptions;
use crate::dtype::{DType, FloatElement};
use crate::error::Result;
use crate::tensor::Tensor;

/// How samples depend on the distribution parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReparameterizationType {
    /// Samples are a differentiable function of the parameters
    FullyReparameterized,
    /// Samples are not differentiable with respect to the parameters
    NotReparameterized,
}

/// A batch of probability distributions over tensors of element type `T`
///
/// Shapes follow the batch/event split: a distribution with batch shape `B`
/// and event shape `E` describes `prod(B)` independent distributions, each
/// over values of shape `E`. Drawing a sample of shape `S` yields a tensor of
/// shape `[S, B, E]`.
///
/// Statistics (`mean`, `variance`, ...) have shape `[B, E]`, and densities of
/// a value of shape `[.., B, E]` have shape `[.., B]`.
pub trait Distribution<T: FloatElement> {
    /// Options the distribution was constructed with
    fn options(&self) -> &DistributionOptions;

    /// Diagnostic name
    fn name(&self) -> &str {
        &self.options().name
    }

    /// Element type of samples and statistics
    fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Whether parameters and samples are checked at runtime
    fn validate_args(&self) -> bool {
        self.options().validate_args
    }

    /// Whether undefined statistics come back as NaN instead of an error
    fn allow_nan_stats(&self) -> bool {
        self.options().allow_nan_stats
    }

    /// How samples relate to the parameters
    fn reparameterization_type(&self) -> ReparameterizationType;

    /// Shape of the batch of independent distributions
    fn batch_shape(&self) -> &[usize];

    /// Shape of a single draw
    fn event_shape(&self) -> &[usize];

    /// Batch shape as a 1-D tensor of dimensions
    fn batch_shape_tensor(&self) -> Tensor<i64> {
        shape_tensor(self.batch_shape())
    }

    /// Event shape as a 1-D tensor of dimensions
    fn event_shape_tensor(&self) -> Tensor<i64> {
        shape_tensor(self.event_shape())
    }

    /// True when the batch holds a single distribution
    fn is_scalar_batch(&self) -> bool {
        self.batch_shape().is_empty()
    }

    /// True when each draw is a scalar
    fn is_scalar_event(&self) -> bool {
        self.event_shape().is_empty()
    }

    /// Draw `n` samples, shaped `[n, B, E]`
    fn sample_n(&self, n: usize, seed: Option<u64>) -> Result<Tensor<T>>;

    /// Draw samples shaped `[sample_shape, B, E]`
    fn sample(&self, sample_shape: &[usize], seed: Option<u64>) -> Result<Tensor<T>> {
        let n = sample_shape.iter().product();
        let flat = self.sample_n(n, seed)?;

        let out_shape: Vec<usize> = sample_shape
            .iter()
            .chain(self.batch_shape())
            .chain(self.event_shape())
            .copied()
            .collect();
        flat.reshape(&out_shape)
    }

    /// Log probability (mass or density) of `value`
    fn log_prob(&self, value: &Tensor<T>) -> Result<Tensor<T>>;

    /// Probability (mass or density) of `value`
    fn prob(&self, value: &Tensor<T>) -> Result<Tensor<T>> {
        let log_prob = self.log_prob(value)?;
        Tensor::from_vec(
            log_prob.as_slice().iter().map(|x| x.exp()).collect(),
            log_prob.shape(),
        )
    }

    /// Mean, shaped `[B, E]`
    fn mean(&self) -> Result<Tensor<T>>;

    /// Variance, shaped `[B, E]`
    fn variance(&self) -> Result<Tensor<T>>;

    /// Standard deviation, shaped `[B, E]`
    fn stddev(&self) -> Result<Tensor<T>> {
        let variance = self.variance()?;
        Tensor::from_vec(
            variance.as_slice().iter().map(|x| x.sqrt()).collect(),
            variance.shape(),
        )
    }

    /// Covariance, shaped `[B, E, E]` for vector events
    fn covariance(&self) -> Result<Tensor<T>>;
}

fn shape_tensor(shape: &[usize]) -> Tensor<i64> {
    let dims: Vec<i64> = shape.iter().map(|&d| d as i64).collect();
    Tensor::from_slice(&dims, &[dims.len()])
}
