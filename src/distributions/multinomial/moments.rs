//! Mean, variance and covariance

use super::Multinomial;
use crate::distributions::checks::check_statistic;
use crate::dtype::FloatElement;
use crate::error::Result;
use crate::ops::TensorEngine;
use crate::tensor::Tensor;

impl<T: FloatElement, C: TensorEngine> Multinomial<T, C> {
    /// `total_count[.., None] * probs`, computed at construction
    pub(super) fn mean_stat(&self) -> Result<Tensor<T>> {
        check_statistic(self.mean.clone(), "mean", self.options.allow_nan_stats)
    }

    /// `mean * (1 - probs)`
    pub(super) fn variance_stat(&self) -> Result<Tensor<T>> {
        let variance = self.variance_unchecked()?;
        check_statistic(variance, "variance", self.options.allow_nan_stats)
    }

    /// `-mean_i * probs_j` off the diagonal, `variance_i` on it
    pub(super) fn covariance_stat(&self) -> Result<Tensor<T>> {
        let client = &self.client;
        let probs = self.probs_like_mean()?;

        let outer = client.matmul(&self.mean.unsqueeze(-1)?, &probs.unsqueeze(-2)?)?;
        let covariance = client.set_diagonal(&client.neg(&outer)?, &self.variance_unchecked()?)?;
        check_statistic(covariance, "covariance", self.options.allow_nan_stats)
    }

    fn variance_unchecked(&self) -> Result<Tensor<T>> {
        let probs = self.probs_like_mean()?;
        self.client
            .sub(&self.mean, &self.client.mul(&self.mean, &probs)?)
    }

    // probs expanded over the batch axes contributed by total_count
    fn probs_like_mean(&self) -> Result<Tensor<T>> {
        self.client.broadcast_to(&self.probs, self.mean.shape())
    }
}
