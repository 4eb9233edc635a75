//! Log-probability of count vectors

use super::Multinomial;
use crate::distributions::checks::{assert_equal, assert_rank_at_least, embed_check_nonnegative_integer_form};
use crate::distributions::params::log_combinations;
use crate::dtype::FloatElement;
use crate::error::Result;
use crate::ops::TensorEngine;
use crate::tensor::Tensor;
use tracing::trace;

impl<T: FloatElement, C: TensorEngine> Multinomial<T, C> {
    /// `log_prob(counts) = log_unnormalized_prob(counts) - log_normalization(counts)`
    pub(super) fn log_prob_counts(&self, counts: &Tensor<T>) -> Result<Tensor<T>> {
        trace!(shape = ?counts.shape(), "multinomial log_prob");
        let counts = self.check_counts(counts)?;

        let log_unnormalized = self.log_unnormalized_prob(&counts)?;
        let log_normalization = self.log_normalization(&counts)?;
        self.client.sub(&log_unnormalized, &log_normalization)
    }

    /// `sum_j counts_j * ln(probs_j)`, with `0 * ln(0) = 0`
    pub fn log_unnormalized_prob(&self, counts: &Tensor<T>) -> Result<Tensor<T>> {
        assert_rank_at_least(counts, 1, "counts")?;
        let terms = self.client.xlogy(counts, &self.probs)?;
        self.client.sum(&terms, &[terms.ndim() - 1], false)
    }

    /// Negative log multinomial coefficient, `-ln(total_count! / prod_j counts_j!)`
    pub fn log_normalization(&self, counts: &Tensor<T>) -> Result<Tensor<T>> {
        let log_coefficient = log_combinations(&self.client, &self.total_count, counts)?;
        self.client.neg(&log_coefficient)
    }

    // Counts must be non-negative whole numbers summing to total_count.
    fn check_counts(&self, counts: &Tensor<T>) -> Result<Tensor<T>> {
        assert_rank_at_least(counts, 1, "counts")?;
        if !self.options.validate_args {
            return Ok(counts.clone());
        }

        let counts = embed_check_nonnegative_integer_form(counts, "counts", true)?;
        let sums = self.client.sum(&counts, &[counts.ndim() - 1], false)?;
        assert_equal(&self.client, &sums, &self.total_count, "counts")?;
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use crate::distributions::{Distribution, DistributionOptions, Parameterization};
    use crate::error::Error;
    use crate::runtime::cpu::CpuClient;
    use crate::tensor::Tensor;

    use super::Multinomial;

    fn dist(total: f64, probs: &[f64], validate: bool) -> Multinomial {
        Multinomial::new(
            &CpuClient::new(),
            Tensor::scalar(total),
            Parameterization::Probs(Tensor::from_slice(probs, &[probs.len()])),
            DistributionOptions::default().with_validate_args(validate),
        )
        .unwrap()
    }

    #[test]
    fn test_log_prob_matches_closed_form() {
        let d = dist(3.0, &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0], true);
        // 3!/(1!1!1!) * (1/3)^3 = 2/9
        let p = d.prob(&Tensor::from_slice(&[1.0, 1.0, 1.0], &[3])).unwrap();
        assert!((p.item().unwrap() - 2.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_probability_class_with_zero_count() {
        let d = dist(5.0, &[1.0, 0.0], true);
        let lp = d.log_prob(&Tensor::from_slice(&[5.0, 0.0], &[2])).unwrap();
        assert!(lp.item().unwrap().abs() < 1e-12);

        let lp = d.log_prob(&Tensor::from_slice(&[4.0, 1.0], &[2])).unwrap();
        assert_eq!(lp.item().unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_sum_mismatch_rejected_only_when_validating() {
        let counts = Tensor::from_slice(&[1.0, 1.0, 1.0], &[3]);

        let err = dist(4.0, &[0.2, 0.3, 0.5], true).log_prob(&counts).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "counts", .. }));

        assert!(dist(4.0, &[0.2, 0.3, 0.5], false).log_prob(&counts).is_ok());
    }

    #[test]
    fn test_fractional_and_negative_counts_rejected() {
        let d = dist(2.0, &[0.5, 0.5], true);
        assert!(d.log_prob(&Tensor::from_slice(&[1.5, 0.5], &[2])).is_err());
        assert!(d.log_prob(&Tensor::from_slice(&[3.0, -1.0], &[2])).is_err());
    }

    #[test]
    fn test_scalar_counts_rejected() {
        let d = dist(2.0, &[0.5, 0.5], false);
        assert!(d.log_prob(&Tensor::scalar(2.0)).is_err());
    }

    #[test]
    fn test_unnormalized_plus_coefficient() {
        let d = dist(4.0, &[0.2, 0.3, 0.5], false);
        let counts = Tensor::from_slice(&[2.0, 1.0, 1.0], &[3]);
        let unnorm = d.log_unnormalized_prob(&counts).unwrap().item().unwrap();
        let norm = d.log_normalization(&counts).unwrap().item().unwrap();
        let expected_unnorm = 2.0 * 0.2f64.ln() + 0.3f64.ln() + 0.5f64.ln();
        assert!((unnorm - expected_unnorm).abs() < 1e-12);
        assert!((norm + 12f64.ln()).abs() < 1e-12);
    }
}
